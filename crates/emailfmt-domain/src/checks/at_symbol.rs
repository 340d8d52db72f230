use crate::messages;
use crate::model::Candidate;
use crate::report::CheckLedger;
use emailfmt_types::CheckId;

pub fn run(candidate: &Candidate<'_>, ledger: &mut CheckLedger) {
    match candidate.at_count {
        0 => ledger.fail(CheckId::AtSymbol, messages::AT_SYMBOL_MISSING),
        1 => {
            ledger.record(CheckId::AtSymbol, true, "");
        }
        _ => ledger.fail(CheckId::AtSymbol, messages::AT_SYMBOL_MULTIPLE),
    }
}
