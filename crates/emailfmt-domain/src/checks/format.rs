use crate::messages;
use crate::model::Candidate;
use crate::report::CheckLedger;
use emailfmt_types::CheckId;
use once_cell::sync::Lazy;
use regex::Regex;

// `<local>@<domain>.<tld>`, with the tld after the last dot. Looser than the per-part
// checks: dot placement in the local part is not inspected here.
static OVERALL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("overall address pattern must compile")
});

/// Evaluated on the trimmed text, independently of the other checks.
pub fn run(candidate: &Candidate<'_>, ledger: &mut CheckLedger) {
    ledger.record(
        CheckId::Format,
        matches_overall_pattern(candidate.trimmed),
        messages::FORMAT_MISMATCH,
    );
}

pub fn matches_overall_pattern(address: &str) -> bool {
    OVERALL_RE.is_match(address)
}
