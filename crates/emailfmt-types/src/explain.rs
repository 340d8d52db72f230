//! Explain registry for checks.
//!
//! Maps check IDs to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check.
    pub title: &'static str,
    /// What the check does.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Failing/passing address examples.
    pub examples: ExamplePair,
}

/// A failing and a passing address for the same check.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Address that fails the check.
    pub before: &'static str,
    /// Address that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check id.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_FORMAT => Some(explain_format()),
        ids::CHECK_NO_SPACES => Some(explain_no_spaces()),
        ids::CHECK_AT_SYMBOL => Some(explain_at_symbol()),
        ids::CHECK_LOCAL_PART => Some(explain_local_part()),
        ids::CHECK_DOMAIN_PART => Some(explain_domain_part()),
        ids::CHECK_TLD => Some(explain_tld()),
        _ => None,
    }
}

/// List all known check IDs, in report order.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_FORMAT,
        ids::CHECK_NO_SPACES,
        ids::CHECK_AT_SYMBOL,
        ids::CHECK_LOCAL_PART,
        ids::CHECK_DOMAIN_PART,
        ids::CHECK_TLD,
    ]
}

fn explain_format() -> Explanation {
    Explanation {
        title: "Overall Format",
        description: "\
Matches the whole trimmed address against a single pattern:

    <local>@<domain>.<tld>

- <local> is one or more letters, digits, or `. _ % + -`
- <domain> is one or more letters, digits, or `. -`
- <tld> is two or more letters and follows the last dot

This rule is evaluated on its own and does not look at dot placement in the
username. An address can pass it and still fail `localPart`.",
        remediation: "\
Make sure the address has a username, a single `@`, a domain, and a
letters-only top-level domain of at least two characters.",
        examples: ExamplePair {
            before: "user@domain",
            after: "user@domain.com",
        },
    }
}

fn explain_no_spaces() -> Explanation {
    Explanation {
        title: "No Leading or Trailing Spaces",
        description: "\
Fails when the address has whitespace before or after it. All other checks
still run against the trimmed address, so this is often the only failure for
a pasted address.",
        remediation: "Remove the surrounding whitespace.",
        examples: ExamplePair {
            before: " user@example.com ",
            after: "user@example.com",
        },
    }
}

fn explain_at_symbol() -> Explanation {
    Explanation {
        title: "Exactly One @ Symbol",
        description: "\
An address is split into username and domain at the `@`. Zero `@` symbols
means neither part exists; the username, domain, and TLD checks are then
reported as failed without being evaluated.

With more than one `@`, the username is the text before the first `@` and
the domain is the text between the first and second `@`.",
        remediation: "Use exactly one `@` between the username and the domain.",
        examples: ExamplePair {
            before: "user@mail@example.com",
            after: "user@example.com",
        },
    }
}

fn explain_local_part() -> Explanation {
    Explanation {
        title: "Valid Username",
        description: "\
The username (before `@`) must be non-empty and contain only letters, digits,
`.` and ``! # $ % & ' * + - / = ? ^ _ ` { | } ~``.

Dots may not start or end the username and may not appear twice in a row.",
        remediation: "Remove disallowed characters and stray dots from the username.",
        examples: ExamplePair {
            before: "john..doe@example.com",
            after: "john.doe@example.com",
        },
    }
}

fn explain_domain_part() -> Explanation {
    Explanation {
        title: "Valid Domain",
        description: "\
The domain (after `@`) must be non-empty and contain at least one dot.
When this check fails the TLD check is reported as failed too.",
        remediation: "Use a fully qualified domain such as `example.com`.",
        examples: ExamplePair {
            before: "user@localhost",
            after: "user@example.com",
        },
    }
}

fn explain_tld() -> Explanation {
    Explanation {
        title: "Valid Top-Level Domain",
        description: "\
The text after the last dot of the domain must be at least two characters and
consist only of letters. It is only evaluated when the domain check passed.",
        remediation: "End the domain with a letters-only TLD such as `.com` or `.org`.",
        examples: ExamplePair {
            before: "user@example.c0m",
            after: "user@example.com",
        },
    }
}
