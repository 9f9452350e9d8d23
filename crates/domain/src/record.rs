mod record_type;

pub use record_type::RecordType;

use crate::errors::DomainError;
use crate::hostname;
use serde::{Deserialize, Serialize};

/// A single authoritative record: a hostname mapped to an IPv4 address
/// (A) or to an alias target (CNAME).
///
/// Hostnames are stored lowercased; CNAME targets are lowercased too so
/// that the (hostname, type, value) identity is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    pub id: Option<i64>,
    pub hostname: String,
    pub record_type: RecordType,
    pub value: String,
}

impl DnsRecord {
    pub fn new(hostname: &str, record_type: RecordType, value: &str) -> Self {
        let value = match record_type {
            RecordType::A => value.trim().to_string(),
            RecordType::Cname => hostname::normalize(value),
        };
        Self {
            id: None,
            hostname: hostname::normalize(hostname),
            record_type,
            value,
        }
    }

    /// Syntax checks for the record's fields. Conflict rules against
    /// other stored records live in the application-layer validator.
    pub fn validate_syntax(&self) -> Result<(), DomainError> {
        hostname::validate_hostname(&self.hostname).map_err(DomainError::InvalidHostname)?;

        match self.record_type {
            RecordType::A => hostname::validate_ipv4(&self.value)
                .map_err(DomainError::InvalidIpAddress)?,
            RecordType::Cname => hostname::validate_hostname(&self.value)
                .map_err(|e| DomainError::InvalidHostname(format!("invalid CNAME target: {}", e)))?,
        }

        Ok(())
    }

    /// Identity for duplicate detection and exact-match deletion.
    pub fn same_tuple(&self, other: &DnsRecord) -> bool {
        self.hostname == other.hostname
            && self.record_type == other.record_type
            && self.value == other.value
    }
}
