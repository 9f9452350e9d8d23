use minidns_domain::{DnsRecord, DomainError, RecordType};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::RecordRepository;
use crate::services::HostnameLocks;

pub struct DeleteRecordUseCase {
    repo: Arc<dyn RecordRepository>,
    locks: Arc<HostnameLocks>,
}

impl DeleteRecordUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>, locks: Arc<HostnameLocks>) -> Self {
        Self { repo, locks }
    }

    /// Exact-match delete of the (hostname, type, value) tuple.
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        hostname: String,
        record_type: String,
        value: String,
    ) -> Result<(), DomainError> {
        let record_type = record_type
            .parse::<RecordType>()
            .map_err(DomainError::InvalidRecordType)?;

        let target = DnsRecord::new(&hostname, record_type, &value);
        target.validate_syntax()?;

        let _guard = self.locks.acquire(&target.hostname).await;

        let deleted = self
            .repo
            .delete_exact(&target.hostname, target.record_type, &target.value)
            .await?;

        if deleted == 0 {
            return Err(DomainError::RecordNotFound(format!(
                "no {} record '{}' for '{}'",
                target.record_type, target.value, target.hostname
            )));
        }

        info!(
            hostname = %target.hostname,
            record_type = %target.record_type,
            value = %target.value,
            "DNS record deleted"
        );

        Ok(())
    }
}
