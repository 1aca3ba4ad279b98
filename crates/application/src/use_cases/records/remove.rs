use crate::ports::RecordStore;
use std::sync::Arc;
use stubzone_domain::{DnsRecord, DomainError};
use tracing::info;

pub struct RemoveRecordUseCase {
    store: Arc<dyn RecordStore>,
}

impl RemoveRecordUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, domain: &str) -> Result<DnsRecord, DomainError> {
        let removed = self.store.remove(domain).await?;
        info!(domain = %removed.domain, record_type = %removed.record_type, "DNS record removed");
        Ok(removed)
    }
}
