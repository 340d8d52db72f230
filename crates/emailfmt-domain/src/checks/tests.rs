use super::{at_symbol, domain_part, format, local_part, no_spaces, tld};
use crate::messages;
use crate::test_support::run_checks;
use crate::validate;
use emailfmt_types::{CheckId, Outcome, explain};

#[test]
fn no_spaces_compares_raw_and_trimmed() {
    let ledger = run_checks("user@example.com", &[no_spaces::run]);
    assert_eq!(ledger.outcome(CheckId::NoSpaces), Outcome::Pass);

    for input in [" user@example.com", "user@example.com\n", "\tuser@example.com "] {
        let ledger = run_checks(input, &[no_spaces::run]);
        assert_eq!(ledger.outcome(CheckId::NoSpaces), Outcome::Fail, "{input:?}");
        assert_eq!(ledger.messages(), [messages::NO_SPACES]);
    }

    // Interior whitespace is not this check's concern.
    let ledger = run_checks("us er@example.com", &[no_spaces::run]);
    assert_eq!(ledger.outcome(CheckId::NoSpaces), Outcome::Pass);
}

#[test]
fn at_symbol_requires_exactly_one() {
    let cases = [
        ("user@example.com", Outcome::Pass, None),
        ("userexample.com", Outcome::Fail, Some(messages::AT_SYMBOL_MISSING)),
        ("a@b@c.com", Outcome::Fail, Some(messages::AT_SYMBOL_MULTIPLE)),
        ("@@@", Outcome::Fail, Some(messages::AT_SYMBOL_MULTIPLE)),
    ];
    for (input, expected, message) in cases {
        let ledger = run_checks(input, &[at_symbol::run]);
        assert_eq!(ledger.outcome(CheckId::AtSymbol), expected, "{input}");
        assert_eq!(ledger.messages().first().map(String::as_str), message);
    }
}

#[test]
fn at_symbol_counts_on_trimmed_text() {
    let ledger = run_checks("  @  ", &[at_symbol::run]);
    assert_eq!(ledger.outcome(CheckId::AtSymbol), Outcome::Pass);
}

#[test]
fn local_part_accepts_rfc_specials() {
    for local in [
        "john",
        "john.doe",
        "a",
        "x+tag",
        "o'brien",
        "!#$%&'*+-/=?^_`{|}~",
        "UPPER.lower.123",
    ] {
        assert!(local_part::is_valid_local(local), "{local}");
    }
}

#[test]
fn local_part_rejects_bad_dots_and_characters() {
    for local in [
        "",
        ".john",
        "john.",
        "john..doe",
        "jo hn",
        "jöhn",
        "john(comment)",
        "\"quoted\"",
        "a,b",
    ] {
        assert!(!local_part::is_valid_local(local), "{local:?}");
    }
}

#[test]
fn local_part_without_at_reports_dependency() {
    let ledger = run_checks("plainaddress", &[local_part::run]);
    assert_eq!(ledger.outcome(CheckId::LocalPart), Outcome::Fail);
    assert_eq!(ledger.messages(), [messages::LOCAL_PART_NO_AT]);
}

#[test]
fn local_part_empty_before_at() {
    let ledger = run_checks("@example.com", &[local_part::run]);
    assert_eq!(ledger.outcome(CheckId::LocalPart), Outcome::Fail);
    assert_eq!(ledger.messages(), [messages::LOCAL_PART_INVALID]);
}

#[test]
fn domain_part_needs_a_dot() {
    assert!(domain_part::is_valid_domain("example.com"));
    assert!(domain_part::is_valid_domain("."));
    assert!(!domain_part::is_valid_domain(""));
    assert!(!domain_part::is_valid_domain("localhost"));

    let ledger = run_checks("user@", &[domain_part::run]);
    assert_eq!(ledger.outcome(CheckId::DomainPart), Outcome::Fail);
    assert_eq!(ledger.messages(), [messages::DOMAIN_PART_INVALID]);

    let ledger = run_checks("user", &[domain_part::run]);
    assert_eq!(ledger.messages(), [messages::DOMAIN_PART_NO_AT]);
}

#[test]
fn tld_letters_only_and_at_least_two() {
    assert!(tld::is_valid_tld("com"));
    assert!(tld::is_valid_tld("UK"));
    assert!(!tld::is_valid_tld("c"));
    assert!(!tld::is_valid_tld(""));
    assert!(!tld::is_valid_tld("c0m"));
    assert!(!tld::is_valid_tld("co-uk"));
    assert!(!tld::is_valid_tld("рф"));
}

#[test]
fn tld_is_forced_to_fail_when_domain_fails() {
    let ledger = run_checks("user@example", &[domain_part::run, tld::run]);
    assert_eq!(ledger.outcome(CheckId::Tld), Outcome::Fail);
    assert_eq!(
        ledger.messages(),
        [messages::DOMAIN_PART_INVALID, messages::TLD_DOMAIN_INVALID]
    );
}

#[test]
fn tld_after_trailing_dot_is_empty() {
    let ledger = run_checks("user@example.", &[domain_part::run, tld::run]);
    assert_eq!(ledger.outcome(CheckId::DomainPart), Outcome::Pass);
    assert_eq!(ledger.outcome(CheckId::Tld), Outcome::Fail);
    assert_eq!(ledger.messages(), [messages::TLD_INVALID]);
}

#[test]
fn tld_without_at_reports_dependency() {
    let ledger = run_checks("example.com", &[domain_part::run, tld::run]);
    assert_eq!(
        ledger.messages(),
        [messages::DOMAIN_PART_NO_AT, messages::TLD_NO_AT]
    );
}

#[test]
fn overall_pattern_matches() {
    for address in [
        "john.doe@example.com",
        "user@sub.domain.co.uk",
        "a_b%c+d-e@x-y.io",
        // Looser than the per-part rules: dot placement is not checked.
        "john..doe@example.com",
        ".john@example.com",
        "user@-example.com",
        "user@example..com",
    ] {
        assert!(format::matches_overall_pattern(address), "{address}");
    }
}

#[test]
fn overall_pattern_rejects() {
    for address in [
        "",
        "user@example",
        "user@example.c",
        "user@example.c0m",
        "a@b@c.com",
        "o'brien@example.com",
        "user@exa_mple.com",
        " user@example.com",
        "user@example.com ",
        "user@.com",
        "user@example.com\n",
    ] {
        assert!(!format::matches_overall_pattern(address), "{address:?}");
    }
}

#[test]
fn format_reads_trimmed_text() {
    let ledger = run_checks("  user@example.com  ", &[format::run]);
    assert_eq!(ledger.outcome(CheckId::Format), Outcome::Pass);
}

#[test]
fn per_part_rules_can_be_stricter_or_looser_than_format() {
    // Special characters allowed by localPart but not by the overall pattern.
    let report = validate("o'brien@example.com");
    assert_eq!(report.outcome(CheckId::LocalPart), Outcome::Pass);
    assert_eq!(report.outcome(CheckId::Format), Outcome::Fail);
    assert_eq!(report.error_messages(), [messages::FORMAT_MISMATCH]);

    // Leading dot rejected by localPart but accepted by the overall pattern.
    let report = validate(".john@example.com");
    assert_eq!(report.outcome(CheckId::LocalPart), Outcome::Fail);
    assert_eq!(report.outcome(CheckId::Format), Outcome::Pass);
}

#[test]
fn explain_examples_match_their_checks() {
    for id in CheckId::ALL {
        let exp = explain::lookup_explanation(id.as_str()).expect("explanation");

        let before = validate(exp.examples.before);
        assert_eq!(
            before.outcome(id),
            Outcome::Fail,
            "{id}: example {:?} should fail",
            exp.examples.before
        );

        let after = validate(exp.examples.after);
        assert!(
            after.is_valid(),
            "{id}: example {:?} should be valid: {:?}",
            exp.examples.after,
            after.error_messages()
        );
    }
}
