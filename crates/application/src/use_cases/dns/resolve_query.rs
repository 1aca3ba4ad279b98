use crate::ports::RecordStore;
use std::sync::Arc;
use stubzone_domain::{
    normalize_domain, wildcard_candidates, DnsAnswer, DnsQuery, DnsRecord, RecordType,
    Resolution,
};
use tracing::debug;

/// Answers one question from the record store.
///
/// Only A questions match. Lookup is exact first, then the single-label wildcard peel
/// (`a.b.c.` tries `*.b.c.` then `*.c.`), first hit wins. Not RFC 4592 closest-encloser
/// matching. A CNAME hit is chased exactly once: the target is looked up as a fresh A
/// question and, if it is an A record, appended after the CNAME.
pub struct ResolveQueryUseCase {
    store: Arc<dyn RecordStore>,
}

impl ResolveQueryUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, query: &DnsQuery) -> Resolution {
        if query.record_type != Some(RecordType::A) {
            debug!(domain = %query.domain, record_type = ?query.record_type, "Query type not served");
            return Resolution::not_found();
        }

        let Some(record) = self.lookup(&query.domain).await else {
            return Resolution::not_found();
        };

        match record.record_type {
            RecordType::A => match record.ipv4() {
                Some(address) => Resolution::found(vec![DnsAnswer::a(
                    Arc::clone(&query.domain),
                    record.ttl,
                    address,
                )]),
                None => {
                    debug!(domain = %record.domain, value = %record.value, "A record holds a non-IPv4 value");
                    Resolution::not_found()
                }
            },
            RecordType::CNAME => {
                let target: Arc<str> = normalize_domain(&record.value).into();
                let mut answers = vec![DnsAnswer::cname(
                    Arc::clone(&query.domain),
                    record.ttl,
                    Arc::clone(&target),
                )];

                if let Some(answer) = self.chase(&target).await {
                    answers.push(answer);
                }

                Resolution::found(answers)
            }
        }
    }

    /// One hop only: a target that is itself a CNAME is not followed.
    async fn chase(&self, target: &Arc<str>) -> Option<DnsAnswer> {
        let record = self.lookup(target).await?;
        match record.record_type {
            RecordType::A => record
                .ipv4()
                .map(|address| DnsAnswer::a(Arc::clone(target), record.ttl, address)),
            RecordType::CNAME => {
                debug!(target = %target, next = %record.value, "CNAME chain not followed past one hop");
                None
            }
        }
    }

    async fn lookup(&self, domain: &str) -> Option<DnsRecord> {
        let record = match self.store.get(domain).await {
            Some(record) => record,
            None => self.lookup_wildcard(domain).await?,
        };

        debug!(
            domain = %domain,
            matched = %record.domain,
            wildcard = record.is_wildcard(),
            "Record matched"
        );
        Some(record)
    }

    async fn lookup_wildcard(&self, domain: &str) -> Option<DnsRecord> {
        for candidate in wildcard_candidates(domain) {
            if let Some(record) = self.store.get(&candidate).await {
                return Some(record);
            }
        }
        None
    }
}
