#![allow(dead_code)]
use stubzone_domain::{DnsRecord, DomainError, RecordType};

pub struct DnsRecordBuilder {
    domain: String,
    record_type: RecordType,
    value: String,
    ttl: u32,
}

impl DnsRecordBuilder {
    pub fn new() -> Self {
        Self {
            domain: "example.com".to_string(),
            record_type: RecordType::A,
            value: "192.0.2.1".to_string(),
            ttl: 300,
        }
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.domain = domain.to_string();
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn try_build(self) -> Result<DnsRecord, DomainError> {
        DnsRecord::new(&self.domain, self.record_type, &self.value, self.ttl)
    }

    pub fn build(self) -> DnsRecord {
        self.try_build().unwrap()
    }
}

impl Default for DnsRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
