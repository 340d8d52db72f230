use crate::model::Candidate;
use crate::report::CheckLedger;

pub type CheckFn = fn(&Candidate<'_>, &mut CheckLedger);

/// Run `checks` in order against a fresh ledger.
pub fn run_checks(input: &str, checks: &[CheckFn]) -> CheckLedger {
    let candidate = Candidate::new(input);
    let mut ledger = CheckLedger::fresh();
    for check in checks {
        check(&candidate, &mut ledger);
    }
    ledger
}
