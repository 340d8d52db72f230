//! Fuzz target for address validation.
//!
//! Goal: `validate` is total. It must never panic, and every report it returns must record all
//! six checks with `isValid` equal to "every check passed".
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_validate
//! ```

#![no_main]

use emailfmt_types::{CheckId, Outcome};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let report = emailfmt_domain::validate(&text);

    let ids: Vec<CheckId> = report.checks().iter().map(|c| c.id).collect();
    assert_eq!(ids, CheckId::ALL);
    assert!(report.checks().iter().all(|c| c.outcome != Outcome::NotEvaluated));

    let all_pass = report.checks().iter().all(|c| c.outcome == Outcome::Pass);
    assert_eq!(report.is_valid(), all_pass);
    assert_eq!(report.is_valid(), report.error_messages().is_empty());
});
