use minidns_domain::{hostname, DnsRecord, DomainError};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::RecordRepository;

pub struct GetRecordsUseCase {
    repo: Arc<dyn RecordRepository>,
}

impl GetRecordsUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    /// Records as stored, no resolution. An unknown hostname is an
    /// error so the boundary layer can answer 404.
    #[instrument(skip(self))]
    pub async fn execute(&self, hostname: &str) -> Result<Vec<DnsRecord>, DomainError> {
        let hostname = hostname::normalize(hostname);
        hostname::validate_hostname(&hostname).map_err(DomainError::InvalidHostname)?;

        let records = self.repo.find_by_hostname(&hostname).await?;

        if records.is_empty() {
            return Err(DomainError::HostNotFound(hostname));
        }

        Ok(records)
    }
}
