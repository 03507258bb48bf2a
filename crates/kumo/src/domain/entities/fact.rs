//! Fact - A cloud-computing trivia item

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::FactId;

/// A short text item describing a cloud-computing trivia point.
///
/// Immutable once read; the pipeline only consumes `text`. The `id` is
/// storage identity, unrelated to the [`FactId`] fingerprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fact {
    pub id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Fact {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    /// Deterministic short fingerprint of the fact text, recomputed on
    /// demand. Used only for repeat-avoidance bookkeeping.
    pub fn fingerprint(&self) -> FactId {
        FactId::of(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_tracks_text_only() {
        let a = Fact::new("Servers love electricity.");
        let b = Fact::new("Servers love electricity.");
        assert_ne!(a.id, b.id);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }
}
