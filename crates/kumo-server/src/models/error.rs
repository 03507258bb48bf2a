//! Wire error body and status mapping

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use kumo::domain::DomainError;

/// Error body returned on non-2xx responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable kind, e.g. "StoreUnavailable"
    pub error: String,
    /// Human-readable description
    pub message: String,
}

/// Map a domain error onto its wire representation.
///
/// Store failures are gateway-ish (the backing store is an upstream
/// dependency); everything else is the usual 4xx/5xx split.
pub fn error_response(err: &DomainError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        DomainError::StoreUnavailable(_) => StatusCode::BAD_GATEWAY,
        DomainError::InvalidItem(_) | DomainError::HistoryUnavailable(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) | DomainError::Unsupported(_) => StatusCode::BAD_REQUEST,
    };

    (
        status,
        Json(ErrorResponse {
            error: err.kind().to_string(),
            message: err.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_failure_is_bad_gateway() {
        let (status, body) =
            error_response(&DomainError::StoreUnavailable("connection refused".into()));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.0.error, "StoreUnavailable");
    }

    #[test]
    fn test_validation_is_bad_request() {
        let (status, body) = error_response(&DomainError::Validation("empty".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.error, "Validation");
    }
}
