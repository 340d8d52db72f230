use crate::checks;
use crate::model::Candidate;
use crate::report::CheckLedger;
use emailfmt_types::ValidationReport;

/// Validate one candidate address.
///
/// Total and deterministic: every input yields a report, and the same input always
/// yields an equal report.
pub fn validate(input: &str) -> ValidationReport {
    if input.is_empty() {
        return CheckLedger::empty_input();
    }

    let candidate = Candidate::new(input);
    let mut ledger = CheckLedger::fresh();

    checks::run_all(&candidate, &mut ledger);

    ledger.finish()
}
