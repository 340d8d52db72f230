//! Config parsing and override resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod policy;
mod resolve;

pub use model::EmailfmtConfigV1;
pub use policy::{DEFAULT_MAX_ENTRIES, EffectiveConfig, FailOn, OutputFormat};
pub use resolve::{Overrides, ResolvedConfig, parse_fail_on, parse_output};

/// Schema string accepted in the optional `schema` key.
pub const SCHEMA_CONFIG_V1: &str = "emailfmt.config.v1";

/// Parse `emailfmt.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<EmailfmtConfigV1> {
    let cfg: EmailfmtConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config (defaults < config file < overrides).
pub fn resolve_config(
    cfg: EmailfmtConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
