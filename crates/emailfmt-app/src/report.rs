use anyhow::Context;
use emailfmt_render::{
    RenderableCheck, RenderableEntry, RenderableOutcome, RenderableReport, RenderableSummary,
    RenderableVerdictStatus,
};
use emailfmt_types::{EmailfmtReportV1, Outcome, ReportEntry, SCHEMA_REPORT_V1, Verdict};

/// Parse a receipt previously written by `check`.
///
/// Per-address reports are shape-checked on the way in, so a hand-edited `isValid` or a
/// missing check is rejected here.
pub fn parse_report_json(text: &str) -> anyhow::Result<EmailfmtReportV1> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema:?} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse emailfmt report")
}

pub fn serialize_report(report: &EmailfmtReportV1) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &EmailfmtReportV1) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Fail => RenderableVerdictStatus::Fail,
            Verdict::Skip => RenderableVerdictStatus::Skip,
        },
        source: report.source.clone(),
        entries: report.entries.iter().map(renderable_entry).collect(),
        summary: RenderableSummary {
            total: report.summary.total,
            valid: report.summary.valid,
            invalid: report.summary.invalid,
            emitted: report.summary.emitted,
            truncated_reason: report.summary.truncated_reason.clone(),
        },
    }
}

fn renderable_entry(entry: &ReportEntry) -> RenderableEntry {
    RenderableEntry {
        input: entry.input.clone(),
        line: entry.line,
        is_valid: entry.report.is_valid(),
        checks: entry
            .report
            .checks()
            .iter()
            .map(|c| RenderableCheck {
                id: c.id.as_str().to_string(),
                description: c.description.clone(),
                outcome: match c.outcome {
                    Outcome::Pass => RenderableOutcome::Pass,
                    Outcome::Fail => RenderableOutcome::Fail,
                    Outcome::NotEvaluated => RenderableOutcome::NotEvaluated,
                },
            })
            .collect(),
        messages: entry.report.error_messages().to_vec(),
    }
}
