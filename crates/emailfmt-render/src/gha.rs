use crate::RenderableReport;

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

/// Render invalid entries as GitHub Actions workflow command annotations.
///
/// Format:
/// `::error file={source},line={line}::[{failed ids}] {input}: {messages}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for entry in report.entries.iter().filter(|e| !e.is_valid) {
        let mut meta = String::new();
        if let Some(source) = &report.source {
            meta.push_str(&format!("file={}", escape_property(source)));
            if let Some(line) = entry.line {
                meta.push_str(&format!(",line={}", line));
            }
        }

        let message = escape_data(&format!(
            "[{}] {:?}: {}",
            entry.failed_ids().join(","),
            entry.input,
            entry.messages.join(" ")
        ));

        if meta.is_empty() {
            out.push(format!("::error::{}", message));
        } else {
            out.push(format!("::error {}::{}", meta, message));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        RenderableCheck, RenderableEntry, RenderableOutcome, RenderableSummary,
        RenderableVerdictStatus,
    };

    fn entry(input: &str, line: Option<u32>, valid: bool) -> RenderableEntry {
        let outcome = if valid {
            RenderableOutcome::Pass
        } else {
            RenderableOutcome::Fail
        };
        RenderableEntry {
            input: input.to_string(),
            line,
            is_valid: valid,
            checks: vec![
                RenderableCheck {
                    id: "format".to_string(),
                    description: String::new(),
                    outcome,
                },
                RenderableCheck {
                    id: "noSpaces".to_string(),
                    description: String::new(),
                    outcome: RenderableOutcome::Pass,
                },
            ],
            messages: if valid {
                Vec::new()
            } else {
                vec!["The email format does not match the standard pattern.".to_string()]
            },
        }
    }

    fn report(source: Option<&str>, entries: Vec<RenderableEntry>) -> RenderableReport {
        RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            source: source.map(str::to_string),
            summary: RenderableSummary {
                total: entries.len() as u32,
                valid: 0,
                invalid: 0,
                emitted: entries.len() as u32,
                truncated_reason: None,
            },
            entries,
        }
    }

    #[test]
    fn only_invalid_entries_are_annotated() {
        let r = report(
            Some("signups.txt"),
            vec![entry("ok@example.com", Some(1), true), entry("bad", Some(2), false)],
        );
        let out = render_github_annotations(&r);
        assert_eq!(
            out,
            vec![
                "::error file=signups.txt,line=2::[format] \"bad\": The email format does not match the standard pattern."
                    .to_string()
            ]
        );
    }

    #[test]
    fn no_source_means_no_location() {
        let r = report(None, vec![entry("bad", Some(2), false)]);
        let out = render_github_annotations(&r);
        assert!(out[0].starts_with("::error::[format]"));
    }

    #[test]
    fn escapes_newlines_and_percent() {
        let r = report(None, vec![entry("50%\nx", None, false)]);
        let out = render_github_annotations(&r);
        // Debug quoting already turns the newline into `\n`; `%` is escaped.
        assert!(out[0].contains("\"50%25\\nx\""));
        assert!(!out[0].contains('\n'));
    }
}
