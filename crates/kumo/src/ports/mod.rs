//! Ports - Abstract Interfaces
//!
//! Traits implemented by infrastructure adapters (Postgres, builtin pool)
//! and external service clients (remote rewrite).

pub mod repositories;
pub mod services;

pub use repositories::{FactRepository, HistoryRepository};
pub use services::StyleRewriter;
