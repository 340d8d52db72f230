//! Shared test utilities for the emailfmt workspace.
//!
//! Lives in its own crate so the CLI integration tests and the BDD harness can share
//! golden-comparison helpers without depending on each other.

use serde_json::Value;

pub const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";
pub const VERSION_PLACEHOLDER: &str = "__VERSION__";

/// Normalize the run clock and tool version of a receipt for golden comparison.
///
/// Only the root envelope is touched (`schema`, `tool`, `run`, `verdict`, `entries` all present).
/// Entries hold caller-supplied text and are never rewritten.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    let Some(obj) = value.as_object_mut() else {
        return value;
    };
    let is_envelope = ["schema", "tool", "run", "verdict", "entries"]
        .iter()
        .all(|k| obj.contains_key(*k));
    if !is_envelope {
        return value;
    }

    if let Some(tool) = obj.get_mut("tool").and_then(Value::as_object_mut)
        && tool.contains_key("version")
    {
        tool.insert(
            "version".to_string(),
            Value::String(VERSION_PLACEHOLDER.to_string()),
        );
    }

    if let Some(run) = obj.get_mut("run").and_then(Value::as_object_mut) {
        for key in ["started_at", "finished_at"] {
            if run.contains_key(key) {
                run.insert(
                    key.to_string(),
                    Value::String(TIMESTAMP_PLACEHOLDER.to_string()),
                );
            }
        }
        if run.contains_key("duration_ms") {
            run.insert("duration_ms".to_string(), Value::Number(0.into()));
        }
    }

    value
}

/// Parse report text and normalize it in one step.
pub fn normalize_report_json(text: &str) -> serde_json::Result<Value> {
    serde_json::from_str(text).map(normalize_nondeterministic)
}
