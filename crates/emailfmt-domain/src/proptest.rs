//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Validity being derived from the six outcomes
//! - Message bookkeeping and ordering
//! - Trimming and determinism

use crate::engine::validate;
use crate::messages;
use crate::model::trim_whitespace;
use emailfmt_types::{CheckId, Outcome, ValidationReport};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Local parts that satisfy both the per-part rule and the overall pattern.
fn arb_local() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_%+-]{1,10}(\\.[a-zA-Z0-9_%+-]{1,10}){0,2}").unwrap()
}

/// Dotted domains without the TLD.
fn arb_domain_labels() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9-]{1,12}(\\.[a-z0-9-]{1,12}){0,2}").unwrap()
}

fn arb_tld() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z]{2,6}").unwrap()
}

fn arb_well_formed() -> impl Strategy<Value = String> {
    (arb_local(), arb_domain_labels(), arb_tld())
        .prop_map(|(local, domain, tld)| format!("{local}@{domain}.{tld}"))
}

/// Strings drawn from the characters the checks care about, to hit edge cases often.
fn arb_address_like() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z@. \t'+_-]{0,24}").unwrap()
}

fn arb_padding() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t\r\n\u{00A0}\u{FEFF}]{1,3}").unwrap()
}

fn fail_count(report: &ValidationReport) -> usize {
    report.failed().count()
}

// ============================================================================
// Invariants over arbitrary input
// ============================================================================

proptest! {
    /// Validity is exactly the conjunction of the six outcomes.
    #[test]
    fn is_valid_iff_all_pass(input in any::<String>()) {
        let report = validate(&input);
        let all_pass = report.checks().iter().all(|c| c.outcome == Outcome::Pass);
        prop_assert_eq!(report.is_valid(), all_pass);
    }

    #[test]
    fn is_valid_iff_all_pass_on_address_like(input in arb_address_like()) {
        let report = validate(&input);
        let all_pass = report.checks().iter().all(|c| c.outcome == Outcome::Pass);
        prop_assert_eq!(report.is_valid(), all_pass);
    }

    /// Every returned report has all six checks in order, and none left unevaluated.
    #[test]
    fn every_check_is_recorded(input in arb_address_like()) {
        let report = validate(&input);
        let ids: Vec<CheckId> = report.checks().iter().map(|c| c.id).collect();
        prop_assert_eq!(ids, CheckId::ALL.to_vec());
        prop_assert!(report.checks().iter().all(|c| c.outcome != Outcome::NotEvaluated));
    }

    /// One message per failing check, except for the empty-input terminal state.
    #[test]
    fn message_count_matches_failures(input in arb_address_like()) {
        let report = validate(&input);
        if input.is_empty() {
            prop_assert_eq!(report.error_messages(), [messages::EMPTY_INPUT]);
        } else {
            prop_assert_eq!(report.error_messages().len(), fail_count(&report));
        }
    }

    #[test]
    fn validate_is_idempotent(input in any::<String>()) {
        prop_assert_eq!(validate(&input), validate(&input));
    }

    /// Without an `@`, the three part checks always carry their dependency messages.
    #[test]
    fn missing_at_forces_dependency_failures(input in "[a-z. ]{1,20}") {
        let report = validate(&input);
        prop_assert_eq!(report.outcome(CheckId::AtSymbol), Outcome::Fail);
        prop_assert_eq!(report.outcome(CheckId::Format), Outcome::Fail);
        let msgs = report.error_messages();
        prop_assert!(msgs.iter().any(|m| m == messages::LOCAL_PART_NO_AT));
        prop_assert!(msgs.iter().any(|m| m == messages::DOMAIN_PART_NO_AT));
        prop_assert!(msgs.iter().any(|m| m == messages::TLD_NO_AT));
    }
}

// ============================================================================
// Well-formed addresses and trimming
// ============================================================================

proptest! {
    #[test]
    fn well_formed_addresses_are_valid(address in arb_well_formed()) {
        let report = validate(&address);
        prop_assert!(report.is_valid(), "{} -> {:?}", address, report.error_messages());
    }

    /// Padding only ever adds the `noSpaces` failure; every other outcome is unchanged.
    #[test]
    fn padding_only_affects_no_spaces(
        input in arb_address_like(),
        left in arb_padding(),
        right in arb_padding(),
    ) {
        let core = trim_whitespace(&input).to_string();
        prop_assume!(!core.is_empty());

        let plain = validate(&core);
        let padded = validate(&format!("{left}{core}{right}"));

        prop_assert_eq!(padded.outcome(CheckId::NoSpaces), Outcome::Fail);
        for id in CheckId::ALL.into_iter().filter(|id| *id != CheckId::NoSpaces) {
            prop_assert_eq!(padded.outcome(id), plain.outcome(id), "{}", id);
        }

        let mut expected = vec![messages::NO_SPACES.to_string()];
        expected.extend(plain.error_messages().iter().cloned());
        prop_assert_eq!(padded.error_messages(), expected.as_slice());
    }
}
