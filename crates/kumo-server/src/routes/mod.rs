//! Kumo API Routes
//!
//! - /kumo/fact - one witty cloud fact (the whole point)
//! - /kumo/facts - fact pool administration
//! - /health, /swagger-ui - operational endpoints wired in main

pub mod fact;
pub mod facts;
pub mod swagger;
