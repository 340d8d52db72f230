use crate::messages;
use crate::model::Candidate;
use crate::report::CheckLedger;
use emailfmt_types::CheckId;

/// Punctuation allowed in a username besides letters, digits and `.`.
const LOCAL_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~-";

pub fn run(candidate: &Candidate<'_>, ledger: &mut CheckLedger) {
    let Some(parts) = candidate.parts else {
        ledger.fail(CheckId::LocalPart, messages::LOCAL_PART_NO_AT);
        return;
    };

    ledger.record(
        CheckId::LocalPart,
        is_valid_local(parts.local),
        messages::LOCAL_PART_INVALID,
    );
}

pub fn is_valid_local(local: &str) -> bool {
    !local.is_empty()
        && local.chars().all(is_local_char)
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || LOCAL_SPECIALS.contains(c)
}
