use crate::ports::RecordStore;
use std::sync::Arc;
use stubzone_domain::{normalize_domain, DnsRecord, DomainError};

pub struct GetRecordUseCase {
    store: Arc<dyn RecordStore>,
}

impl GetRecordUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, domain: &str) -> Result<DnsRecord, DomainError> {
        self.store
            .get(domain)
            .await
            .ok_or_else(|| DomainError::NotFound(normalize_domain(domain)))
    }
}
