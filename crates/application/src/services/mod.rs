mod chain_resolver;
mod hostname_locks;
mod record_validator;

pub use chain_resolver::ChainResolver;
pub use hostname_locks::HostnameLocks;
pub use record_validator::RecordValidator;
