use minidns_domain::{DnsRecord, DomainError, RecordType};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::RecordRepository;
use crate::services::{HostnameLocks, RecordValidator};

pub struct CreateRecordUseCase {
    repo: Arc<dyn RecordRepository>,
    validator: RecordValidator,
    locks: Arc<HostnameLocks>,
}

impl CreateRecordUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>, locks: Arc<HostnameLocks>) -> Self {
        Self {
            validator: RecordValidator::new(repo.clone()),
            repo,
            locks,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        hostname: String,
        record_type: String,
        value: String,
    ) -> Result<DnsRecord, DomainError> {
        let record_type = record_type
            .parse::<RecordType>()
            .map_err(DomainError::InvalidRecordType)?;

        let candidate = DnsRecord::new(&hostname, record_type, &value);

        // Snapshot, validate and insert as one unit with respect to
        // other writers on this hostname.
        let _guard = self.locks.acquire(&candidate.hostname).await;

        let existing = self.repo.find_by_hostname(&candidate.hostname).await?;
        self.validator.validate(&candidate, &existing).await?;

        let created = self.repo.insert(&candidate).await?;

        info!(
            hostname = %created.hostname,
            record_type = %created.record_type,
            value = %created.value,
            "DNS record created"
        );

        Ok(created)
    }
}
