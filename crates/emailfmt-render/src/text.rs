use crate::{RenderableEntry, RenderableOutcome, RenderableReport};

fn marker(outcome: RenderableOutcome) -> &'static str {
    match outcome {
        RenderableOutcome::Pass => "[✓]",
        RenderableOutcome::Fail => "[✗]",
        RenderableOutcome::NotEvaluated => "[ ]",
    }
}

/// Terminal view of one entry: headline, one line per check, then diagnostics.
pub fn render_entry_text(entry: &RenderableEntry) -> String {
    let mut out = String::new();

    match entry.line {
        Some(line) => out.push_str(&format!(
            "{:?} (line {}): {}\n",
            entry.input,
            line,
            entry.headline()
        )),
        None => out.push_str(&format!("{:?}: {}\n", entry.input, entry.headline())),
    }

    for check in &entry.checks {
        out.push_str(&format!("  {} {}\n", marker(check.outcome), check.description));
    }

    if !entry.messages.is_empty() {
        out.push_str("  errors:\n");
        for msg in &entry.messages {
            out.push_str(&format!("    - {}\n", msg));
        }
    }

    out
}

pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    for (i, entry) in report.entries.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_entry_text(entry));
    }

    if report.summary.total > 1 || report.entries.is_empty() {
        if !report.entries.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!(
            "{} checked: {} valid, {} invalid\n",
            report.summary.total, report.summary.valid, report.summary.invalid
        ));
    }

    if let Some(reason) = &report.summary.truncated_reason {
        out.push_str(&format!("note: {}\n", reason));
    }

    out
}
