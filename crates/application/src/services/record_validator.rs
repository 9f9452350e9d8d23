use minidns_domain::{DnsRecord, DomainError, RecordType};
use std::collections::HashSet;
use std::sync::Arc;

use crate::ports::RecordRepository;

/// Write-path validation: decides whether a candidate record may join
/// the stored set for its hostname. Checks run in order and the first
/// failure wins; nothing here mutates storage.
pub struct RecordValidator {
    repo: Arc<dyn RecordRepository>,
}

impl RecordValidator {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    /// `existing` is the current record set for the candidate's
    /// hostname, fetched by the caller under the per-hostname lock.
    pub async fn validate(
        &self,
        candidate: &DnsRecord,
        existing: &[DnsRecord],
    ) -> Result<(), DomainError> {
        candidate.validate_syntax()?;

        if existing.iter().any(|r| r.same_tuple(candidate)) {
            return Err(DomainError::DuplicateRecord(format!(
                "{} {} {}",
                candidate.hostname, candidate.record_type, candidate.value
            )));
        }

        match candidate.record_type {
            RecordType::Cname => {
                if !existing.is_empty() {
                    return Err(DomainError::ConflictingRecordType(
                        "CNAME cannot coexist with other records".to_string(),
                    ));
                }
                if candidate.value == candidate.hostname {
                    return Err(DomainError::CircularReference(format!(
                        "CNAME for '{}' points to itself",
                        candidate.hostname
                    )));
                }
                self.check_chain(candidate).await?;
            }
            RecordType::A => {
                if existing.iter().any(|r| r.record_type == RecordType::Cname) {
                    return Err(DomainError::ConflictingRecordType(
                        "cannot add A record when a CNAME exists".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Simulate the insert and walk the CNAME chain from the candidate's
    /// target. Each hostname is visited at most once, so the walk always
    /// terminates; revisiting any of them proves a cycle.
    async fn check_chain(&self, candidate: &DnsRecord) -> Result<(), DomainError> {
        let mut visited = HashSet::new();
        visited.insert(candidate.hostname.clone());

        let mut current = candidate.value.clone();
        loop {
            if !visited.insert(current.clone()) {
                return Err(DomainError::CircularReference(format!(
                    "CNAME for '{}' would close a cycle at '{}'",
                    candidate.hostname, current
                )));
            }

            let cnames = self
                .repo
                .find_by_hostname_and_type(&current, RecordType::Cname)
                .await?;

            match cnames.first() {
                Some(link) => current = link.value.clone(),
                // terminal A records or an unresolved name both end the chain
                None => return Ok(()),
            }
        }
    }
}
