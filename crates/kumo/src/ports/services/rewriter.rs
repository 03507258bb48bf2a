//! Style Rewriter Port
//!
//! Abstract interface for turning a plain fact into a stylized, witty one.
//! Implementations exist for the remote text-generation service and for
//! the local template transformer; the remote one recovers internally, so
//! the contract is infallible.

use async_trait::async_trait;

use crate::domain::Style;

/// Rewrite interface
///
/// `rewrite` never fails: any remote trouble must be absorbed by the
/// implementation (local fallback), so callers always get usable text.
#[async_trait]
pub trait StyleRewriter: Send + Sync {
    /// Rewrite `fact` in the given comedic style.
    async fn rewrite(&self, fact: &str, style: Style) -> String;
}
