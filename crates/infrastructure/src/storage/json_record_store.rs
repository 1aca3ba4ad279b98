//! File-backed record store.
//!
//! The whole map is rewritten as a pretty-printed JSON object (domain -> record) on every
//! mutation, while the write lock is held. A crash mid-write can leave a partial file.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use stubzone_application::ports::RecordStore;
use stubzone_domain::{normalize_domain, DnsRecord, DomainError, RecordType};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

pub struct JsonFileRecordStore {
    path: PathBuf,
    records: RwLock<HashMap<String, DnsRecord>>,
}

impl JsonFileRecordStore {
    /// Opens the store at `path`, creating its parent directory when missing.
    ///
    /// An absent file means an empty store; the file is created on the first mutation.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref().to_path_buf();

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.is_dir() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    DomainError::StorageInitError(format!(
                        "failed to create storage directory {}: {}",
                        dir.display(),
                        e
                    ))
                })?;
            }
        }

        let records = if path.exists() {
            Self::load(&path)?
        } else {
            debug!(path = %path.display(), "Record file absent, starting empty");
            HashMap::new()
        };

        info!(path = %path.display(), records = records.len(), "Record store opened");

        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<HashMap<String, DnsRecord>, DomainError> {
        let data = std::fs::read_to_string(path).map_err(|e| {
            DomainError::StorageInitError(format!("failed to read records: {}", e))
        })?;

        let stored: HashMap<String, DnsRecord> = serde_json::from_str(&data).map_err(|e| {
            DomainError::StorageInitError(format!("failed to unmarshal records: {}", e))
        })?;

        // Keys are rebuilt from each record's normalized domain.
        Ok(stored
            .into_values()
            .map(|mut record| {
                record.domain = normalize_domain(&record.domain);
                (record.domain.clone(), record)
            })
            .collect())
    }

    async fn persist(&self, records: &HashMap<String, DnsRecord>) -> Result<(), DomainError> {
        let sorted: BTreeMap<&str, &DnsRecord> =
            records.iter().map(|(k, v)| (k.as_str(), v)).collect();

        let data = serde_json::to_string_pretty(&sorted)
            .map_err(|e| DomainError::PersistenceError(format!("failed to marshal records: {}", e)))?;

        tokio::fs::write(&self.path, data).await.map_err(|e| {
            DomainError::PersistenceError(format!(
                "failed to write {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl RecordStore for JsonFileRecordStore {
    async fn add(
        &self,
        domain: &str,
        record_type: RecordType,
        value: &str,
        ttl: u32,
    ) -> Result<DnsRecord, DomainError> {
        let record = DnsRecord::new(domain, record_type, value, ttl)?;

        let mut records = self.records.write().await;
        let key = record.domain.clone();
        let previous = records.insert(key.clone(), record.clone());

        if let Err(e) = self.persist(&records).await {
            match previous {
                Some(previous) => {
                    records.insert(key, previous);
                }
                None => {
                    records.remove(&key);
                }
            }
            warn!(error = %e, domain = %record.domain, "Persist failed, add rolled back");
            return Err(e);
        }

        Ok(record)
    }

    async fn remove(&self, domain: &str) -> Result<DnsRecord, DomainError> {
        let key = normalize_domain(domain);

        let mut records = self.records.write().await;
        let removed = records
            .remove(&key)
            .ok_or_else(|| DomainError::NotFound(key.clone()))?;

        if let Err(e) = self.persist(&records).await {
            records.insert(key, removed);
            warn!(error = %e, domain = %domain, "Persist failed, remove rolled back");
            return Err(e);
        }

        Ok(removed)
    }

    async fn get(&self, domain: &str) -> Option<DnsRecord> {
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
