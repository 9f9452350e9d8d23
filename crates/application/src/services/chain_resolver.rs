use minidns_domain::{hostname, DomainError, RecordType};
use std::collections::HashSet;
use std::sync::Arc;

use crate::ports::RecordRepository;

/// Read-path resolution: follows CNAME links from a hostname to its
/// terminal A records. Iterative with an explicit visited set, so stack
/// usage stays constant however long the chain is.
pub struct ChainResolver {
    repo: Arc<dyn RecordRepository>,
    max_chain_length: usize,
}

impl ChainResolver {
    pub fn new(repo: Arc<dyn RecordRepository>, max_chain_length: usize) -> Self {
        Self {
            repo,
            max_chain_length,
        }
    }

    /// Returns the terminal A record values in storage order.
    ///
    /// A hop into an already-visited hostname is a `CircularReference`;
    /// exceeding the hop bound without repeating is `ChainTooLong`.
    pub async fn resolve(&self, hostname: &str) -> Result<Vec<String>, DomainError> {
        let start = hostname::normalize(hostname);

        let mut visited = HashSet::new();
        visited.insert(start.clone());

        let mut current = start;
        let mut hops = 0usize;

        loop {
            let records = self.repo.find_by_hostname(&current).await?;

            if records.is_empty() {
                return Err(DomainError::HostNotFound(current));
            }

            let addresses: Vec<String> = records
                .iter()
                .filter(|r| r.record_type == RecordType::A)
                .map(|r| r.value.clone())
                .collect();
            if !addresses.is_empty() {
                return Ok(addresses);
            }

            // The record-set invariant leaves exactly one CNAME here.
            let link = records
                .iter()
                .find(|r| r.record_type == RecordType::Cname)
                .ok_or_else(|| DomainError::HostNotFound(current.clone()))?;

            hops += 1;
            if hops > self.max_chain_length {
                return Err(DomainError::ChainTooLong(self.max_chain_length));
            }

            if !visited.insert(link.value.clone()) {
                return Err(DomainError::CircularReference(format!(
                    "resolution revisited '{}'",
                    link.value
                )));
            }

            current = link.value.clone();
        }
    }
}
