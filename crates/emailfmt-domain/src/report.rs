use crate::messages;
use emailfmt_types::{CheckId, CheckItem, Outcome, ValidationReport};

/// The six checks in display order, none of them run yet.
pub fn initial_checks() -> [CheckItem; 6] {
    CheckId::ALL.map(CheckItem::pending)
}

/// Per-run scratch state. Each run owns a fresh ledger; nothing is shared between runs.
#[derive(Clone, Debug)]
pub struct CheckLedger {
    checks: [CheckItem; 6],
    messages: Vec<String>,
}

impl CheckLedger {
    pub fn fresh() -> Self {
        Self {
            checks: initial_checks(),
            messages: Vec::new(),
        }
    }

    /// Record an outcome; a failure appends `message`. Returns `passed`.
    pub fn record(&mut self, id: CheckId, passed: bool, message: &str) -> bool {
        self.checks[id.index()].outcome = Outcome::from_passed(passed);
        if !passed {
            self.messages.push(message.to_string());
        }
        passed
    }

    pub fn fail(&mut self, id: CheckId, message: &str) {
        self.record(id, false, message);
    }

    pub fn outcome(&self, id: CheckId) -> Outcome {
        self.checks[id.index()].outcome
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn finish(self) -> ValidationReport {
        ValidationReport::new(self.checks, self.messages)
    }

    /// Terminal state for a zero-length input: every check fails, one message total.
    pub fn empty_input() -> ValidationReport {
        let checks = CheckId::ALL.map(|id| CheckItem {
            outcome: Outcome::Fail,
            ..CheckItem::pending(id)
        });
        ValidationReport::new(checks, vec![messages::EMPTY_INPUT.to_string()])
    }
}

impl Default for CheckLedger {
    fn default() -> Self {
        Self::fresh()
    }
}
