use minidns_domain::{hostname, DomainError};
use tracing::{debug, instrument};

use crate::services::ChainResolver;

pub struct ResolveHostnameUseCase {
    resolver: ChainResolver,
}

impl ResolveHostnameUseCase {
    pub fn new(resolver: ChainResolver) -> Self {
        Self { resolver }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, hostname: &str) -> Result<Vec<String>, DomainError> {
        hostname::validate_hostname(&hostname::normalize(hostname))
            .map_err(DomainError::InvalidHostname)?;

        let addresses = self.resolver.resolve(hostname).await?;

        debug!(hostname, count = addresses.len(), "hostname resolved");

        Ok(addresses)
    }
}
