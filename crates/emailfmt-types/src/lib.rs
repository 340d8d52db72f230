//! Stable DTOs and IDs used across the emailfmt workspace.
//!
//! This crate is intentionally boring:
//! - data types for the per-address validation report and the batch receipt
//! - stable string IDs for the fixed check set
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use ids::CheckId;
pub use receipt::{
    CheckItem, EmailfmtReportV1, Outcome, ReportEntry, ReportShapeError, RunMeta,
    SCHEMA_REPORT_V1, Summary, ToolMeta, ValidationReport, Verdict,
};
