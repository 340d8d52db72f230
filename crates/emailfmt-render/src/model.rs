#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableOutcome {
    Pass,
    Fail,
    NotEvaluated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableCheck {
    pub id: String,
    pub description: String,
    pub outcome: RenderableOutcome,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableEntry {
    pub input: String,
    pub line: Option<u32>,
    pub is_valid: bool,
    pub checks: Vec<RenderableCheck>,
    pub messages: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableSummary {
    pub total: u32,
    pub valid: u32,
    pub invalid: u32,
    pub emitted: u32,
    pub truncated_reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub source: Option<String>,
    pub entries: Vec<RenderableEntry>,
    pub summary: RenderableSummary,
}

impl RenderableEntry {
    pub fn headline(&self) -> &'static str {
        if self.is_valid {
            "VALID FORMAT"
        } else {
            "INVALID FORMAT"
        }
    }

    /// Ids of failing checks, in report order.
    pub fn failed_ids(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|c| c.outcome == RenderableOutcome::Fail)
            .map(|c| c.id.as_str())
            .collect()
    }
}
