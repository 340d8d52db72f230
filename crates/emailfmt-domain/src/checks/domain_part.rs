use crate::messages;
use crate::model::Candidate;
use crate::report::CheckLedger;
use emailfmt_types::CheckId;

pub fn run(candidate: &Candidate<'_>, ledger: &mut CheckLedger) {
    let Some(parts) = candidate.parts else {
        ledger.fail(CheckId::DomainPart, messages::DOMAIN_PART_NO_AT);
        return;
    };

    ledger.record(
        CheckId::DomainPart,
        is_valid_domain(parts.domain),
        messages::DOMAIN_PART_INVALID,
    );
}

pub fn is_valid_domain(domain: &str) -> bool {
    !domain.is_empty() && domain.contains('.')
}
