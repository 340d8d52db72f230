use crate::model::Candidate;
use crate::report::CheckLedger;

mod at_symbol;
mod domain_part;
mod format;
mod local_part;
mod no_spaces;
mod tld;

#[cfg(test)]
mod tests;

/// Run every check in evaluation order. The order fixes the order of error messages.
pub fn run_all(candidate: &Candidate<'_>, ledger: &mut CheckLedger) {
    no_spaces::run(candidate, ledger);
    at_symbol::run(candidate, ledger);
    local_part::run(candidate, ledger);
    domain_part::run(candidate, ledger);
    tld::run(candidate, ledger);
    format::run(candidate, ledger);
}
