use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unsupported record type: {0}")]
    InvalidRecordType(String),

    #[error("Invalid IP address: {0}")]
    InvalidAddress(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Failed to save records: {0}")]
    PersistenceError(String),

    #[error("Failed to initialize storage: {0}")]
    StorageInitError(String),

    #[error("Failed to bind {addr}: {reason}")]
    BindError { addr: String, reason: String },

    #[error("Malformed DNS message: {0}")]
    DecodeError(String),

    #[error("DNS transport error: {0}")]
    TransportError(String),
}

impl DomainError {
    /// Errors an administrative caller can fix by changing its input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidRecordType(_)
                | DomainError::InvalidAddress(_)
                | DomainError::InvalidDomainName(_)
        )
    }
}
