//! Stable identifiers for the fixed check set.
//!
//! Renderers key off these strings; the set, its order, and its spelling are part of the
//! report contract.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const CHECK_FORMAT: &str = "format";
pub const CHECK_NO_SPACES: &str = "noSpaces";
pub const CHECK_AT_SYMBOL: &str = "atSymbol";
pub const CHECK_LOCAL_PART: &str = "localPart";
pub const CHECK_DOMAIN_PART: &str = "domainPart";
pub const CHECK_TLD: &str = "tld";

/// One of the six structural rules, in display order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum CheckId {
    Format,
    NoSpaces,
    AtSymbol,
    LocalPart,
    DomainPart,
    Tld,
}

impl CheckId {
    /// Every check, in the order reports list them.
    pub const ALL: [CheckId; 6] = [
        CheckId::Format,
        CheckId::NoSpaces,
        CheckId::AtSymbol,
        CheckId::LocalPart,
        CheckId::DomainPart,
        CheckId::Tld,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            CheckId::Format => CHECK_FORMAT,
            CheckId::NoSpaces => CHECK_NO_SPACES,
            CheckId::AtSymbol => CHECK_AT_SYMBOL,
            CheckId::LocalPart => CHECK_LOCAL_PART,
            CheckId::DomainPart => CHECK_DOMAIN_PART,
            CheckId::Tld => CHECK_TLD,
        }
    }

    /// Human-readable line shown next to the outcome marker.
    pub const fn description(self) -> &'static str {
        match self {
            CheckId::Format => "Overall email format is valid (e.g. user@domain.com)",
            CheckId::NoSpaces => "No leading/trailing spaces",
            CheckId::AtSymbol => "'@' symbol is present",
            CheckId::LocalPart => "Has a valid username part (before @)",
            CheckId::DomainPart => "Has a valid domain name part (after @)",
            CheckId::Tld => "Domain has a valid Top-Level-Domain (e.g. .com, .org)",
        }
    }

    /// Position in [`CheckId::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn parse(s: &str) -> Option<CheckId> {
        CheckId::ALL.into_iter().find(|id| id.as_str() == s)
    }
}

impl std::fmt::Display for CheckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
