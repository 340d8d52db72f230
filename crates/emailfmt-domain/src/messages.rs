//! Diagnostic strings. Callers display these verbatim.

pub const EMPTY_INPUT: &str = "Email address cannot be empty.";

pub const NO_SPACES: &str = "Email should not have leading or trailing spaces.";

pub const AT_SYMBOL_MISSING: &str = "A valid email must contain an '@' symbol.";
pub const AT_SYMBOL_MULTIPLE: &str = "Email must contain exactly one '@' symbol.";

pub const LOCAL_PART_INVALID: &str = "The username part of the email (before @) is invalid.";
pub const LOCAL_PART_NO_AT: &str = "Cannot check username part without an @ symbol.";

pub const DOMAIN_PART_INVALID: &str =
    "The domain part of the email (after @) is invalid or missing a dot.";
pub const DOMAIN_PART_NO_AT: &str = "Cannot check domain part without an @ symbol.";

pub const TLD_INVALID: &str = "The Top-Level-Domain (e.g., .com) is invalid or too short.";
pub const TLD_DOMAIN_INVALID: &str = "Cannot check TLD because the domain part is invalid.";
pub const TLD_NO_AT: &str = "Cannot check TLD without an @ symbol.";

pub const FORMAT_MISMATCH: &str = "The email format does not match the standard pattern.";
