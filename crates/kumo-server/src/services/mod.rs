//! Pipeline Services
//!
//! The witty-rewrite pipeline: style selection, remote rewrite with local
//! fallback, and ASCII sanitization.

pub mod fallback;
pub mod rewrite;
pub mod sanitize;
pub mod style;
