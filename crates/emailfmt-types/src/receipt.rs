use crate::ids::CheckId;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for batch reports.
pub const SCHEMA_REPORT_V1: &str = "emailfmt.report.v1";

/// Result of a single check. `NotEvaluated` is neither a pass nor a fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    Pass,
    Fail,
    NotEvaluated,
}

impl Outcome {
    pub fn from_passed(passed: bool) -> Self {
        if passed { Outcome::Pass } else { Outcome::Fail }
    }

    pub fn is_pass(self) -> bool {
        self == Outcome::Pass
    }

    pub fn is_fail(self) -> bool {
        self == Outcome::Fail
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckItem {
    pub id: CheckId,
    pub description: String,
    pub outcome: Outcome,
}

impl CheckItem {
    /// A check that has not run yet.
    pub fn pending(id: CheckId) -> Self {
        Self {
            id,
            description: id.description().to_string(),
            outcome: Outcome::NotEvaluated,
        }
    }
}

/// Malformed report shapes rejected on deserialization.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReportShapeError {
    #[error("expected {expected} checks, found {found}")]
    CheckCount { expected: usize, found: usize },

    #[error("check at position {position} is `{found}`, expected `{expected}`")]
    CheckOrder {
        position: usize,
        expected: CheckId,
        found: CheckId,
    },

    #[error("isValid is {claimed} but the check outcomes derive {derived}")]
    ValidityMismatch { claimed: bool, derived: bool },
}

/// Outcome of validating one address.
///
/// `is_valid` is always derived from `checks`; there is no way to set it directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    is_valid: bool,
    checks: Vec<CheckItem>,
    error_messages: Vec<String>,
}

impl ValidationReport {
    /// Build a report from the six checks in display order.
    pub fn new(checks: [CheckItem; 6], error_messages: Vec<String>) -> Self {
        debug_assert!(
            checks
                .iter()
                .zip(CheckId::ALL)
                .all(|(item, id)| item.id == id),
            "checks must be in display order"
        );
        let is_valid = checks.iter().all(|c| c.outcome.is_pass());
        Self {
            is_valid,
            checks: checks.into(),
            error_messages,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn checks(&self) -> &[CheckItem] {
        &self.checks
    }

    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }

    pub fn check(&self, id: CheckId) -> &CheckItem {
        &self.checks[id.index()]
    }

    pub fn outcome(&self, id: CheckId) -> Outcome {
        self.check(id).outcome
    }

    pub fn failed(&self) -> impl Iterator<Item = CheckId> + '_ {
        self.checks
            .iter()
            .filter(|c| c.outcome.is_fail())
            .map(|c| c.id)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidationReportWire {
    is_valid: bool,
    checks: Vec<CheckItem>,
    #[serde(default)]
    error_messages: Vec<String>,
}

impl TryFrom<ValidationReportWire> for ValidationReport {
    type Error = ReportShapeError;

    fn try_from(wire: ValidationReportWire) -> Result<Self, Self::Error> {
        if wire.checks.len() != CheckId::ALL.len() {
            return Err(ReportShapeError::CheckCount {
                expected: CheckId::ALL.len(),
                found: wire.checks.len(),
            });
        }
        for (position, (item, expected)) in wire.checks.iter().zip(CheckId::ALL).enumerate() {
            if item.id != expected {
                return Err(ReportShapeError::CheckOrder {
                    position,
                    expected,
                    found: item.id,
                });
            }
        }
        let derived = wire.checks.iter().all(|c| c.outcome.is_pass());
        if derived != wire.is_valid {
            return Err(ReportShapeError::ValidityMismatch {
                claimed: wire.is_valid,
                derived,
            });
        }
        Ok(Self {
            is_valid: derived,
            checks: wire.checks,
            error_messages: wire.error_messages,
        })
    }
}

impl<'de> Deserialize<'de> for ValidationReport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = ValidationReportWire::deserialize(deserializer)?;
        ValidationReport::try_from(wire).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Batch receipt
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
    Skip,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RunMeta {
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub duration_ms: u64,
}

/// Counts over every input, including entries dropped by truncation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Summary {
    pub total: u32,
    pub valid: u32,
    pub invalid: u32,
    pub emitted: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncated_reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEntry {
    /// The candidate exactly as supplied, including any surrounding whitespace.
    pub input: String,
    /// 1-based line number when the candidate came from an address list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    pub report: ValidationReport,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EmailfmtReportV1 {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    pub run: RunMeta,
    /// Address list the entries were read from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub verdict: Verdict,
    pub summary: Summary,
    pub entries: Vec<ReportEntry>,
}
