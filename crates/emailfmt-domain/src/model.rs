/// A candidate address, pre-split once so every check reads the same view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Input exactly as supplied.
    pub raw: &'a str,

    /// `raw` without leading/trailing whitespace. All structural checks read this.
    pub trimmed: &'a str,

    /// Number of `@` characters in `trimmed`.
    pub at_count: usize,

    /// Username/domain split; `None` when `trimmed` has no `@`.
    pub parts: Option<AddressParts<'a>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressParts<'a> {
    pub local: &'a str,
    pub domain: &'a str,
}

impl<'a> Candidate<'a> {
    pub fn new(raw: &'a str) -> Self {
        let trimmed = trim_whitespace(raw);
        let at_count = trimmed.matches('@').count();
        let parts = (at_count > 0).then(|| AddressParts::split(trimmed));
        Self {
            raw,
            trimmed,
            at_count,
            parts,
        }
    }

    pub fn has_surrounding_whitespace(&self) -> bool {
        self.trimmed.len() != self.raw.len()
    }
}

impl<'a> AddressParts<'a> {
    /// Split on `@`: the username is the first fragment and the domain the second.
    ///
    /// With more than one `@`, fragments after the second are dropped, so
    /// `a@b@c.com` yields local `a` and domain `b`.
    pub fn split(address: &'a str) -> Self {
        let mut fragments = address.split('@');
        let local = fragments.next().unwrap_or_default();
        let domain = fragments.next().unwrap_or_default();
        Self { local, domain }
    }

    /// Text after the last `.` of the domain (the whole domain if it has none).
    pub fn tld(&self) -> &'a str {
        self.domain.rsplit('.').next().unwrap_or_default()
    }
}

/// Whitespace stripped from both ends of a candidate.
///
/// Unicode `White_Space` without U+0085 (NEL), plus U+FEFF (BOM), which is the set
/// browsers strip with `String.prototype.trim`.
pub fn is_trimmable(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

pub fn trim_whitespace(s: &str) -> &str {
    s.trim_matches(is_trimmable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_single_at() {
        let parts = AddressParts::split("john.doe@example.com");
        assert_eq!(parts.local, "john.doe");
        assert_eq!(parts.domain, "example.com");
        assert_eq!(parts.tld(), "com");
    }

    #[test]
    fn split_multiple_at_keeps_first_two_fragments() {
        let parts = AddressParts::split("a@b@c.com");
        assert_eq!(parts.local, "a");
        assert_eq!(parts.domain, "b");

        let parts = AddressParts::split("@@");
        assert_eq!(parts.local, "");
        assert_eq!(parts.domain, "");
    }

    #[test]
    fn tld_is_after_last_dot() {
        assert_eq!(AddressParts::split("u@sub.domain.co.uk").tld(), "uk");
        assert_eq!(AddressParts::split("u@example.").tld(), "");
        assert_eq!(AddressParts::split("u@localhost").tld(), "localhost");
    }

    #[test]
    fn candidate_without_at_has_no_parts() {
        let c = Candidate::new("plainaddress");
        assert_eq!(c.at_count, 0);
        assert!(c.parts.is_none());
    }

    #[test]
    fn candidate_splits_on_trimmed_text() {
        let c = Candidate::new("  user@example.com\t");
        assert_eq!(c.trimmed, "user@example.com");
        assert!(c.has_surrounding_whitespace());
        let parts = c.parts.expect("parts");
        assert_eq!(parts.local, "user");
        assert_eq!(parts.domain, "example.com");
    }

    #[test]
    fn trimming_matches_browser_whitespace_set() {
        assert_eq!(trim_whitespace("\u{FEFF}a@b.co\u{00A0}"), "a@b.co");
        assert_eq!(trim_whitespace("\u{2028}a@b.co\r\n"), "a@b.co");
        assert_eq!(trim_whitespace("\u{0085}a@b.co"), "\u{0085}a@b.co");
        assert_eq!(trim_whitespace("   "), "");
    }
}
