use std::net::Ipv4Addr;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerData {
    A(Ipv4Addr),
    Cname(Arc<str>),
}

/// A resource record destined for the answer section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsAnswer {
    /// Owner name, always normalized.
    pub name: Arc<str>,
    pub ttl: u32,
    pub data: AnswerData,
}

impl DnsAnswer {
    pub fn a(name: impl Into<Arc<str>>, ttl: u32, address: Ipv4Addr) -> Self {
        Self {
            name: name.into(),
            ttl,
            data: AnswerData::A(address),
        }
    }

    pub fn cname(name: impl Into<Arc<str>>, ttl: u32, target: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            ttl,
            data: AnswerData::Cname(target.into()),
        }
    }
}

/// Outcome of resolving a single question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub answers: Vec<DnsAnswer>,
    pub record_found: bool,
}

impl Resolution {
    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn found(answers: Vec<DnsAnswer>) -> Self {
        Self {
            answers,
            record_found: true,
        }
    }
}
