//! Minidns Application Layer
//!
//! Use cases orchestrate the record repository behind the port traits;
//! the services module holds the write-path validator and the CNAME
//! chain resolver.
pub mod ports;
pub mod services;
pub mod use_cases;
