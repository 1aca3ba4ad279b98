use super::RecordType;
use crate::domain_name::normalize_domain;
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// Presentation-format limit, including the trailing root dot.
const MAX_DOMAIN_LEN: usize = 254;

/// A single stored record. The normalized domain is the unique key in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    pub domain: String,

    #[serde(rename = "type")]
    pub record_type: RecordType,

    pub value: String,

    pub ttl: u32,
}

impl DnsRecord {
    /// Builds a validated record: the domain is normalized and A values must be IP literals.
    ///
    /// CNAME values are kept as given; they are normalized at lookup time.
    pub fn new(
        domain: &str,
        record_type: RecordType,
        value: &str,
        ttl: u32,
    ) -> Result<Self, DomainError> {
        if domain.trim().trim_end_matches('.').is_empty() {
            return Err(DomainError::InvalidDomainName(
                "domain cannot be empty".to_string(),
            ));
        }

        let domain = normalize_domain(domain);
        if domain.len() > MAX_DOMAIN_LEN {
            return Err(DomainError::InvalidDomainName(domain));
        }

        let value = value.trim();

        match record_type {
            RecordType::A => {
                value
                    .parse::<IpAddr>()
                    .map_err(|_| DomainError::InvalidAddress(value.to_string()))?;
            }
            RecordType::CNAME => {
                if value.is_empty() {
                    return Err(DomainError::InvalidDomainName(
                        "CNAME target cannot be empty".to_string(),
                    ));
                }
            }
        }

        Ok(Self {
            domain,
            record_type,
            value: value.to_string(),
            ttl,
        })
    }

    /// IPv4 address of an A record. IPv6 literals are stored but never served.
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self.record_type {
            RecordType::A => self.value.parse().ok(),
            RecordType::CNAME => None,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.domain.starts_with("*.")
    }
}
