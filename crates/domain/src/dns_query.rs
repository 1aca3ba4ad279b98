use super::RecordType;
use crate::domain_name::normalize_domain;
use std::sync::Arc;

/// One question as seen by the resolver.
///
/// `record_type` is `None` when the wire query type is anything the responder does not model
/// (AAAA, MX, ...). Such questions never produce answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: Option<RecordType>,
}

impl DnsQuery {
    pub fn new(domain: &str, record_type: Option<RecordType>) -> Self {
        Self {
            domain: normalize_domain(domain).into(),
            record_type,
        }
    }

    pub fn a(domain: &str) -> Self {
        Self::new(domain, Some(RecordType::A))
    }
}
