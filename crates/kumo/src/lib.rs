//! Kumo Domain Library
//!
//! Core domain types and interfaces for the Kumo (雲) witty cloud-facts
//! service.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Fact, RewriteState)
//!   - `value_objects/`: Immutable value types (Style, FactId)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use kumo::domain::{Fact, RewriteState, Style};
//! use kumo::ports::{FactRepository, StyleRewriter};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{DomainError, Fact, FactId, RewriteState, Style};
pub use ports::{FactRepository, HistoryRepository, StyleRewriter};
