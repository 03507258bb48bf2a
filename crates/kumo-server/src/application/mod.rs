//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and the rewrite pipeline.

mod fact_service;

pub use fact_service::{FactService, EMPTY_STORE_MESSAGE};
