//! Domain Layer
//!
//! Pure business entities and value types. No I/O happens here.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::{Fact, RewriteState};
pub use errors::DomainError;
pub use value_objects::{FactId, Style};
