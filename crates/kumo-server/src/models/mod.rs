//! Kumo Data Models
//!
//! Request/response DTOs for the HTTP surface.

mod error;
mod fact;

pub use error::*;
pub use fact::*;
