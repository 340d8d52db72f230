//! CLI entry point for emailfmt.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup, and exit
//! codes. All business logic lives in the `emailfmt-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use emailfmt_app::{
    AddressInput, CheckInput, ExplainOutput, exit_code, format_explanation, format_not_found,
    from_args, parse_report_json, read_inputs, render_annotations, render_markdown, render_text,
    run_check, run_explain, serialize_report, to_renderable,
};
use emailfmt_settings::{OutputFormat, Overrides};
use std::io::{IsTerminal, Read};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "EMAILFMT_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "emailfmt",
    version,
    about = "Email address format checker with per-rule diagnostics"
)]
struct Cli {
    /// Path to emailfmt config TOML (missing file means defaults).
    #[arg(long, default_value = "emailfmt.toml")]
    config: Utf8PathBuf,

    /// Emit logs as JSON lines on stderr.
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate addresses and print a per-check breakdown.
    Check {
        /// Addresses to validate, taken verbatim (quote them to keep surrounding spaces).
        /// Put addresses that start with `-` after `--`, e.g. `check -- -user@example.com`.
        addresses: Vec<String>,

        /// Address list, one per line; `-` reads stdin.
        #[arg(long)]
        input: Option<Utf8PathBuf>,

        /// Output format (text|json|markdown).
        #[arg(long)]
        format: Option<String>,

        /// When to exit non-zero (invalid|never).
        #[arg(long)]
        fail_on: Option<String>,

        /// Override maximum entries to emit.
        #[arg(long)]
        max_entries: Option<u32>,

        /// Also write the JSON receipt to this path.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a check id with remediation guidance.
    Explain {
        /// The check id to explain (e.g. "localPart").
        identifier: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    let result = match cli.cmd {
        Commands::Check {
            addresses,
            input,
            format,
            fail_on,
            max_entries,
            report_out,
        } => cmd_check(
            &cli.config,
            addresses,
            input,
            Overrides {
                output: format,
                fail_on,
                max_entries,
            },
            report_out,
        ),
        Commands::Md { report, output } => cmd_md(&report, output.as_deref()),
        Commands::Annotations { report, max } => cmd_annotations(&report, max),
        Commands::Explain { identifier } => Ok(cmd_explain(&identifier)),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("emailfmt error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn cmd_check(
    config_path: &Utf8Path,
    addresses: Vec<String>,
    input: Option<Utf8PathBuf>,
    overrides: Overrides,
    report_out: Option<Utf8PathBuf>,
) -> anyhow::Result<u8> {
    let config_text = read_config(config_path)?;

    let mut inputs = from_args(addresses);
    let mut source = None;
    if let Some(path) = input {
        inputs.extend(read_address_list(&path)?);
        if path.as_str() != "-" {
            source = Some(path.into_string());
        }
    }

    let output = run_check(CheckInput {
        inputs,
        source,
        config_text: &config_text,
        overrides,
    })?;

    if let Some(path) = &report_out {
        let data = serialize_report(&output.report)?;
        write_file(path, &data).context("write report json")?;
    }

    match output.resolved_config.effective.output {
        OutputFormat::Text => print!("{}", render_text(&to_renderable(&output.report))),
        OutputFormat::Markdown => print!("{}", render_markdown(&to_renderable(&output.report))),
        OutputFormat::Json => {
            let data = serialize_report(&output.report)?;
            println!("{}", String::from_utf8_lossy(&data));
        }
    }

    let code = exit_code(&output.report, output.resolved_config.effective.fail_on);
    Ok(code as u8)
}

fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    if !path.exists() {
        tracing::debug!(config = %path, "no config file; using defaults");
        return Ok(String::new());
    }
    std::fs::read_to_string(path).with_context(|| format!("read config: {}", path))
}

fn read_address_list(path: &Utf8Path) -> anyhow::Result<Vec<AddressInput>> {
    let text = if path.as_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read addresses from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("read address list: {}", path))?
    };
    Ok(read_inputs(&text))
}

fn write_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write file: {}", path))?;
    Ok(())
}

fn load_report(path: &Utf8Path) -> anyhow::Result<emailfmt_types::EmailfmtReportV1> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read report: {}", path))?;
    parse_report_json(&text)
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<u8> {
    let report = load_report(report_path)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_file(out_path, md.as_bytes()).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(0)
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<u8> {
    let report = load_report(report_path)?;
    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{}", annotation);
    }
    Ok(0)
}

fn cmd_explain(identifier: &str) -> u8 {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            0
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
        } => {
            eprint!("{}", format_not_found(&identifier, available_check_ids));
            1
        }
    }
}
