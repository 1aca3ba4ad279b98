use crate::ports::RecordStore;
use std::str::FromStr;
use std::sync::Arc;
use stubzone_domain::{DnsRecord, DomainError, RecordType};
use tracing::info;

pub struct AddRecordUseCase {
    store: Arc<dyn RecordStore>,
}

impl AddRecordUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        domain: &str,
        record_type: &str,
        value: &str,
        ttl: u32,
    ) -> Result<DnsRecord, DomainError> {
        let record_type = RecordType::from_str(record_type)?;
        let record = self.store.add(domain, record_type, value, ttl).await?;

        info!(
            domain = %record.domain,
            record_type = %record.record_type,
            value = %record.value,
            ttl = record.ttl,
            "DNS record added"
        );

        Ok(record)
    }
}
