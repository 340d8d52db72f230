//! Pure address format evaluation (no IO).
//!
//! Input: one candidate string, exactly as the caller received it.
//! Output: the six-check report with diagnostics.

#![forbid(unsafe_code)]

pub mod messages;
pub mod model;
pub mod report;

mod checks;
mod engine;

pub use engine::validate;
pub use report::{CheckLedger, initial_checks};

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;
