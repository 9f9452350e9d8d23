use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid hostname: {0}")]
    InvalidHostname(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    #[error("Duplicate record: {0}")]
    DuplicateRecord(String),

    #[error("Conflicting record type: {0}")]
    ConflictingRecordType(String),

    #[error("Circular CNAME reference: {0}")]
    CircularReference(String),

    #[error("CNAME chain exceeds maximum length of {0}")]
    ChainTooLong(usize),

    #[error("Hostname not found: {0}")]
    HostNotFound(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
