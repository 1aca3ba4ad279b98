//! Stubzone Domain Layer
pub mod config;
pub mod dns_answer;
pub mod dns_query;
pub mod dns_record;
pub mod domain_name;
pub mod errors;

pub use config::{
    CliOverrides, Config, ConfigError, LogFormat, LoggingConfig, ServerConfig, StorageConfig,
};
pub use dns_answer::{AnswerData, DnsAnswer, Resolution};
pub use dns_query::DnsQuery;
pub use dns_record::{DnsRecord, RecordType};
pub use domain_name::{normalize_domain, wildcard_candidates};
pub use errors::DomainError;
