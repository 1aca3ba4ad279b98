use async_trait::async_trait;
use stubzone_domain::{DnsRecord, DomainError, RecordType};

/// Durable mapping from normalized domain name to its single record.
///
/// Implementations normalize every domain argument. Reads may run concurrently;
/// `add` and `remove` exclude all other operations until the change is persisted.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Inserts or replaces the record for `domain`, regardless of its previous type.
    async fn add(
        &self,
        domain: &str,
        record_type: RecordType,
        value: &str,
        ttl: u32,
    ) -> Result<DnsRecord, DomainError>;

    /// Deletes the record for `domain`, failing with `NotFound` when absent.
    async fn remove(&self, domain: &str) -> Result<DnsRecord, DomainError>;

    /// Exact lookup. Wildcards are not expanded here.
    async fn get(&self, domain: &str) -> Option<DnsRecord>;

    /// Snapshot of every record, unordered.
    async fn list(&self) -> Vec<DnsRecord>;
}
