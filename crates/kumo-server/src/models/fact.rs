//! Fact DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use kumo::domain::Fact;

/// The one response body everybody comes for
#[derive(Debug, Serialize, ToSchema)]
pub struct WittyFactResponse {
    pub fact: String,
}

/// A stored fact, as listed by the administration endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct FactResponse {
    pub id: Uuid,
    pub text: String,
    /// Short SHA-1 fingerprint of the text (repeat-avoidance bookkeeping)
    pub fingerprint: String,
    pub created_at: DateTime<Utc>,
}

impl From<Fact> for FactResponse {
    fn from(fact: Fact) -> Self {
        let fingerprint = fact.fingerprint().to_string();
        Self {
            id: fact.id,
            text: fact.text,
            fingerprint,
            created_at: fact.created_at,
        }
    }
}

/// Add-fact request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFactRequest {
    pub text: String,
}
