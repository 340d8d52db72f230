use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `emailfmt.toml` schema v1.
///
/// This is a *user-facing* config model: values stay as strings here and are checked
/// during resolution, so error messages can name the offending key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EmailfmtConfigV1 {
    /// Optional schema string for tooling (`emailfmt.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Output format: `text` (default), `json`, or `markdown`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// When to exit non-zero: `invalid` (default) or `never`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// How many entries to emit before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_entries: Option<u32>,
}
