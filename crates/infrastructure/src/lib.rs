//! Minidns Infrastructure Layer
pub mod database;
pub mod repositories;
