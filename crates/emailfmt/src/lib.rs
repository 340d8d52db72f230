//! Email address format checking with a per-rule breakdown.
//!
//! [`validate`] runs six fixed checks over one candidate and returns a [`ValidationReport`]
//! listing each check's outcome plus a human-readable message for every failure. Validity is
//! derived from the outcomes: an address is valid only when all six checks pass.
//!
//! ```
//! use emailfmt::{CheckId, Outcome, validate};
//!
//! let report = validate("john.doe@example.com");
//! assert!(report.is_valid());
//!
//! let report = validate(" john.doe@example.com");
//! assert!(!report.is_valid());
//! assert_eq!(report.outcome(CheckId::NoSpaces), Outcome::Fail);
//! assert_eq!(
//!     report.error_messages(),
//!     ["Email should not have leading or trailing spaces."]
//! );
//! ```
//!
//! This is a syntactic pre-check only. It does not resolve domains or talk to mail servers.

#![forbid(unsafe_code)]

pub use emailfmt_domain::validate;
pub use emailfmt_types::{CheckId, CheckItem, Outcome, ReportShapeError, ValidationReport};

/// Text of every message [`validate`] can emit.
pub mod messages {
    pub use emailfmt_domain::messages::*;
}
