use crate::SCHEMA_CONFIG_V1;
use crate::model::EmailfmtConfigV1;
use crate::policy::{EffectiveConfig, FailOn, OutputFormat};
use anyhow::Context;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub output: Option<String>,
    pub fail_on: Option<String>,
    pub max_entries: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: EmailfmtConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let mut effective = EffectiveConfig::default();

    if let Some(output) = overrides.output.or(cfg.output) {
        effective.output = parse_output(&output).context("invalid output")?;
    }

    if let Some(fail_on) = overrides.fail_on.or(cfg.fail_on) {
        effective.fail_on = parse_fail_on(&fail_on).context("invalid fail_on")?;
    }

    if let Some(max) = overrides.max_entries.or(cfg.max_entries) {
        if max == 0 {
            anyhow::bail!("max_entries must be at least 1");
        }
        effective.max_entries = max as usize;
    }

    Ok(ResolvedConfig { effective })
}

pub fn parse_output(v: &str) -> anyhow::Result<OutputFormat> {
    match v {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        other => anyhow::bail!("unknown output format: {other} (expected text|json|markdown)"),
    }
}

pub fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "invalid" => Ok(FailOn::Invalid),
        "never" => Ok(FailOn::Never),
        other => anyhow::bail!("unknown fail_on: {other} (expected invalid|never)"),
    }
}
