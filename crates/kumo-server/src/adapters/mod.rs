//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod builtin;
pub mod postgres;

// Re-exports
pub use builtin::BuiltinFactRepository;
pub use postgres::{PgFactRepository, PgHistoryRepository};
