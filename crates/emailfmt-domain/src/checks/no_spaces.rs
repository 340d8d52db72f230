use crate::messages;
use crate::model::Candidate;
use crate::report::CheckLedger;
use emailfmt_types::CheckId;

pub fn run(candidate: &Candidate<'_>, ledger: &mut CheckLedger) {
    ledger.record(
        CheckId::NoSpaces,
        !candidate.has_surrounding_whitespace(),
        messages::NO_SPACES,
    );
}
