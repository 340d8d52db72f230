use crate::{RenderableOutcome, RenderableReport, RenderableVerdictStatus};

/// Wrap `s` in a code span. The fence is one backtick longer than the longest backtick run in `s`.
fn code_span(s: &str) -> String {
    let longest_run = s.split(|c| c != '`').map(str::len).max().unwrap_or(0);
    if longest_run == 0 {
        return format!("`{}`", s);
    }
    let fence = "`".repeat(longest_run + 1);
    format!("{fence} {s} {fence}")
}

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Email format report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Fail => "FAIL",
        RenderableVerdictStatus::Skip => "SKIP",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Addresses: {} checked, {} valid, {} invalid ({} emitted)\n",
        verdict,
        report.summary.total,
        report.summary.valid,
        report.summary.invalid,
        report.summary.emitted
    ));
    if let Some(source) = &report.source {
        out.push_str(&format!("- Source: {}\n", code_span(source)));
    }
    out.push('\n');

    if let Some(r) = &report.summary.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if report.entries.is_empty() {
        out.push_str("No addresses checked.\n");
        return out;
    }

    for entry in &report.entries {
        // Debug quoting keeps surrounding whitespace visible.
        let shown = code_span(&format!("{:?}", entry.input));
        match entry.line {
            Some(line) => out.push_str(&format!(
                "## {} (line {}): {}\n\n",
                shown,
                line,
                entry.headline()
            )),
            None => out.push_str(&format!("## {}: {}\n\n", shown, entry.headline())),
        }

        for check in &entry.checks {
            let mark = match check.outcome {
                RenderableOutcome::Pass => "PASS",
                RenderableOutcome::Fail => "FAIL",
                RenderableOutcome::NotEvaluated => "----",
            };
            out.push_str(&format!(
                "- [{}] {}: {}\n",
                mark,
                code_span(&check.id),
                check.description
            ));
        }

        if !entry.messages.is_empty() {
            out.push_str("\nErrors:\n\n");
            for msg in &entry.messages {
                out.push_str(&format!("- {}\n", msg));
            }
        }
        out.push('\n');
    }

    out
}
