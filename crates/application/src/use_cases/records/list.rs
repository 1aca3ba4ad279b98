use crate::ports::RecordStore;
use std::sync::Arc;
use stubzone_domain::DnsRecord;

pub struct ListRecordsUseCase {
    store: Arc<dyn RecordStore>,
}

impl ListRecordsUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// All records sorted by domain, for stable display.
    pub async fn execute(&self) -> Vec<DnsRecord> {
        let mut records = self.store.list().await;
        records.sort_by(|a, b| a.domain.cmp(&b.domain));
        records
    }
}
