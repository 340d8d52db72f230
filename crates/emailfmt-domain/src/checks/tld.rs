use crate::messages;
use crate::model::Candidate;
use crate::report::CheckLedger;
use emailfmt_types::CheckId;

/// Depends on `domainPart`: a failed domain forces a failed TLD without evaluating it.
pub fn run(candidate: &Candidate<'_>, ledger: &mut CheckLedger) {
    let Some(parts) = candidate.parts else {
        ledger.fail(CheckId::Tld, messages::TLD_NO_AT);
        return;
    };

    if !ledger.outcome(CheckId::DomainPart).is_pass() {
        ledger.fail(CheckId::Tld, messages::TLD_DOMAIN_INVALID);
        return;
    }

    ledger.record(CheckId::Tld, is_valid_tld(parts.tld()), messages::TLD_INVALID);
}

pub fn is_valid_tld(tld: &str) -> bool {
    tld.len() >= 2 && tld.bytes().all(|b| b.is_ascii_alphabetic())
}
