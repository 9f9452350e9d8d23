//! Minidns Domain Layer
pub mod config;
pub mod errors;
pub mod hostname;
pub mod record;

pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use record::{DnsRecord, RecordType};
