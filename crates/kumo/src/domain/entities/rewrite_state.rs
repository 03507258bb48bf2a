//! RewriteState - Anti-repeat memory

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{FactId, Style};

/// Outcome of the previous request, consulted to avoid serving the same
/// tone twice in a row.
///
/// Read once at the start of a request, written once (best-effort) at the
/// end. A missing stored record is valid and means "no history".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteState {
    pub last_fact_id: Option<FactId>,
    pub last_style: Option<Style>,
}

impl RewriteState {
    pub fn new(last_fact_id: Option<FactId>, last_style: Option<Style>) -> Self {
        Self {
            last_fact_id,
            last_style,
        }
    }

    /// True when no previous request has been recorded.
    pub fn is_empty(&self) -> bool {
        self.last_fact_id.is_none() && self.last_style.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(RewriteState::default().is_empty());
    }

    #[test]
    fn test_style_only_history_is_not_empty() {
        let state = RewriteState::new(None, Some(Style::Dry));
        assert!(!state.is_empty());
    }
}
