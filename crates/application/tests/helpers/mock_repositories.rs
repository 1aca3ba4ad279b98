#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use stubzone_application::ports::RecordStore;
use stubzone_domain::{normalize_domain, DnsRecord, DomainError, RecordType};
use tokio::sync::RwLock;

/// In-memory store with the same normalization and validation as the file store.
#[derive(Clone, Default)]
pub struct MockRecordStore {
    records: Arc<RwLock<HashMap<String, DnsRecord>>>,
    get_calls: Arc<AtomicUsize>,
    fail_writes: Arc<RwLock<bool>>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_records(records: &[(&str, RecordType, &str, u32)]) -> Self {
        let store = Self::new();
        for (domain, record_type, value, ttl) in records {
            store.add(domain, *record_type, value, *ttl).await.unwrap();
        }
        store
    }

    pub async fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.write().await = fail;
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn add(
        &self,
        domain: &str,
        record_type: RecordType,
        value: &str,
        ttl: u32,
    ) -> Result<DnsRecord, DomainError> {
        let record = DnsRecord::new(domain, record_type, value, ttl)?;
        if *self.fail_writes.read().await {
            return Err(DomainError::PersistenceError("mock write failure".to_string()));
        }
        self.records
            .write()
            .await
            .insert(record.domain.clone(), record.clone());
        Ok(record)
    }

    async fn remove(&self, domain: &str) -> Result<DnsRecord, DomainError> {
        let domain = normalize_domain(domain);
        if *self.fail_writes.read().await {
            return Err(DomainError::PersistenceError("mock write failure".to_string()));
        }
        self.records
            .write()
            .await
            .remove(&domain)
            .ok_or(DomainError::NotFound(domain))
    }

    async fn get(&self, domain: &str) -> Option<DnsRecord> {
        self.get_calls.fetch_add(1, Ordering::Relaxed);
        self.records
            .read()
            .await
            .get(&normalize_domain(domain))
            .cloned()
    }

    async fn list(&self) -> Vec<DnsRecord> {
        self.records.read().await.values().cloned().collect()
    }
}
