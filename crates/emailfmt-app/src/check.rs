//! The `check` use case: validate every candidate and produce a receipt.

use anyhow::Context;
use emailfmt_settings::{FailOn, Overrides, ResolvedConfig};
use emailfmt_types::{
    EmailfmtReportV1, ReportEntry, RunMeta, SCHEMA_REPORT_V1, Summary, ToolMeta, Verdict,
};
use rayon::prelude::*;
use time::OffsetDateTime;

use crate::inputs::AddressInput;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Candidates in the order they were supplied.
    pub inputs: Vec<AddressInput>,
    /// Address list path, recorded in the report and used for annotation locations.
    pub source: Option<String>,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: EmailfmtReportV1,
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: resolve config, validate all inputs, build the receipt.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Empty config is allowed, defaults apply.
    let cfg = if input.config_text.trim().is_empty() {
        emailfmt_settings::EmailfmtConfigV1::default()
    } else {
        emailfmt_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved =
        emailfmt_settings::resolve_config(cfg, input.overrides).context("resolve config")?;
    let max_entries = resolved.effective.max_entries;

    tracing::debug!(
        inputs = input.inputs.len(),
        max_entries,
        source = input.source.as_deref(),
        "validating addresses"
    );

    // Indexed parallel collect keeps input order.
    let mut entries: Vec<ReportEntry> = input
        .inputs
        .par_iter()
        .map(|candidate| ReportEntry {
            input: candidate.value.clone(),
            line: candidate.line,
            report: emailfmt_domain::validate(&candidate.value),
        })
        .collect();

    let total = entries.len() as u32;
    let valid = entries.iter().filter(|e| e.report.is_valid()).count() as u32;
    let invalid = total - valid;

    let truncated_reason = if entries.len() > max_entries {
        entries.truncate(max_entries);
        Some(format!("entries truncated to max_entries={max_entries}"))
    } else {
        None
    };

    let verdict = if total == 0 {
        Verdict::Skip
    } else if invalid == 0 {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    let finished_at = OffsetDateTime::now_utc();
    let duration_ms = (finished_at - started_at).whole_milliseconds().max(0) as u64;

    tracing::info!(total, valid, invalid, duration_ms, "check complete");
    if let Some(reason) = &truncated_reason {
        tracing::warn!(total, max_entries, "{reason}");
    }

    let report = EmailfmtReportV1 {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "emailfmt".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        run: RunMeta {
            started_at,
            finished_at,
            duration_ms,
        },
        source: input.source,
        verdict,
        summary: Summary {
            total,
            valid,
            invalid,
            emitted: entries.len() as u32,
            truncated_reason,
        },
        entries,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map a receipt to an exit code: 0 = nothing to report, 2 = invalid input present.
pub fn exit_code(report: &EmailfmtReportV1, fail_on: FailOn) -> i32 {
    match (report.verdict, fail_on) {
        (_, FailOn::Never) => 0,
        (Verdict::Fail, FailOn::Invalid) => 2,
        (Verdict::Pass | Verdict::Skip, FailOn::Invalid) => 0,
    }
}
