use async_trait::async_trait;
use minidns_domain::{DnsRecord, DomainError, RecordType};

/// Keyed record storage. Implementations must preserve insertion order
/// when listing records for a hostname; resolution relies on it.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    async fn insert(&self, record: &DnsRecord) -> Result<DnsRecord, DomainError>;

    async fn find_by_hostname(&self, hostname: &str) -> Result<Vec<DnsRecord>, DomainError>;

    async fn find_by_hostname_and_type(
        &self,
        hostname: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, DomainError>;

    /// Delete the record matching the exact (hostname, type, value)
    /// tuple. Returns the number of rows removed.
    async fn delete_exact(
        &self,
        hostname: &str,
        record_type: RecordType,
        value: &str,
    ) -> Result<u64, DomainError>;
}
