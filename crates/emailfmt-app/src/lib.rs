//! Use case orchestration for emailfmt.
//!
//! This crate provides the application layer: use cases that coordinate the domain, settings,
//! and render layers. It stays IO-free; reading address lists and writing reports is the CLI's job.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod inputs;
mod render;
mod report;

pub use check::{CheckInput, CheckOutput, exit_code, run_check};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use inputs::{AddressInput, from_args, read_inputs};
pub use render::{render_annotations, render_markdown, render_text};
pub use report::{parse_report_json, serialize_report, to_renderable};
