#![allow(dead_code)]

use async_trait::async_trait;
use minidns_application::ports::RecordRepository;
use minidns_domain::{DnsRecord, DomainError, RecordType};
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

/// In-memory stand-in for the SQLite repository. Keeps records in
/// insertion order, like the real table ordered by id.
pub struct MockRecordRepository {
    records: RwLock<Vec<DnsRecord>>,
    next_id: AtomicI64,
    should_fail: RwLock<bool>,
}

impl MockRecordRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
            should_fail: RwLock::new(false),
        }
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    /// Insert bypassing all validation, for staging resolver scenarios
    /// the write path would refuse.
    pub async fn seed(&self, hostname: &str, record_type: RecordType, value: &str) {
        let mut record = DnsRecord::new(hostname, record_type, value);
        record.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.records.write().await.push(record);
    }

    async fn check_fail(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("mock repository failure".to_string()));
        }
        Ok(())
    }
}

impl Default for MockRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordRepository for MockRecordRepository {
    async fn insert(&self, record: &DnsRecord) -> Result<DnsRecord, DomainError> {
        self.check_fail().await?;
        let mut stored = record.clone();
        stored.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.records.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_hostname(&self, hostname: &str) -> Result<Vec<DnsRecord>, DomainError> {
        self.check_fail().await?;
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.hostname == hostname)
            .cloned()
            .collect())
    }

    async fn find_by_hostname_and_type(
        &self,
        hostname: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        self.check_fail().await?;
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.hostname == hostname && r.record_type == record_type)
            .cloned()
            .collect())
    }

    async fn delete_exact(
        &self,
        hostname: &str,
        record_type: RecordType,
        value: &str,
    ) -> Result<u64, DomainError> {
        self.check_fail().await?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| {
            !(r.hostname == hostname && r.record_type == record_type && r.value == value)
        });
        Ok((before - records.len()) as u64)
    }
}
