//! Witty Fact Route

use axum::{extract::State, routing::get, Json, Router};

use crate::models::{error_response, ErrorResponse, WittyFactResponse};
use crate::AppState;

/// Serve one witty cloud-computing fact
#[utoipa::path(
    get,
    path = "/kumo/fact",
    responses(
        (status = 200, description = "A sanitized witty fact", body = WittyFactResponse),
        (status = 502, description = "Fact store unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Fact"
)]
pub async fn witty_fact(
    State(state): State<AppState>,
) -> Result<Json<WittyFactResponse>, (axum::http::StatusCode, Json<ErrorResponse>)> {
    let fact = state
        .fact_service
        .witty_fact()
        .await
        .map_err(|e| error_response(&e))?;

    Ok(Json(WittyFactResponse { fact }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/kumo/fact", get(witty_fact))
}
