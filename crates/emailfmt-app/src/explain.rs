//! The `explain` use case: look up check documentation.

use emailfmt_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier; includes the ids that would have worked.
    NotFound {
        identifier: String,
        available_check_ids: &'static [&'static str],
    },
}

/// Look up an explanation for a check id.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_check_ids: explain::all_check_ids(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    // Debug quoting keeps leading/trailing whitespace visible.
    out.push_str(&format!("Invalid: {:?}\n", exp.examples.before));
    out.push_str(&format!("Valid:   {:?}\n", exp.examples.after));

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, check_ids: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown check id: {}\n\n", identifier));
    out.push_str("Available check ids:\n");
    for id in check_ids {
        out.push_str(&format!("  - {}\n", id));
    }

    out
}
