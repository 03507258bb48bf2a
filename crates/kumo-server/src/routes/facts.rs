//! Fact Pool Administration Routes
//!
//! HTTP handlers that delegate to FactService for business logic.

use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use uuid::Uuid;

use crate::models::{error_response, CreateFactRequest, ErrorResponse, FactResponse};
use crate::AppState;

/// List the fact pool
#[utoipa::path(
    get,
    path = "/kumo/facts",
    responses(
        (status = 200, description = "All stored facts", body = Vec<FactResponse>),
        (status = 502, description = "Fact store unavailable", body = ErrorResponse)
    ),
    tag = "Facts"
)]
pub async fn list_facts(
    State(state): State<AppState>,
) -> Result<Json<Vec<FactResponse>>, (axum::http::StatusCode, Json<ErrorResponse>)> {
    let facts = state
        .fact_service
        .list_facts()
        .await
        .map_err(|e| error_response(&e))?;

    Ok(Json(facts.into_iter().map(Into::into).collect()))
}

/// Add a fact to the pool
#[utoipa::path(
    post,
    path = "/kumo/facts",
    request_body = CreateFactRequest,
    responses(
        (status = 200, description = "Fact stored", body = FactResponse),
        (status = 400, description = "Blank or duplicate text", body = ErrorResponse),
        (status = 502, description = "Fact store unavailable", body = ErrorResponse)
    ),
    tag = "Facts"
)]
pub async fn create_fact(
    State(state): State<AppState>,
    Json(payload): Json<CreateFactRequest>,
) -> Result<Json<FactResponse>, (axum::http::StatusCode, Json<ErrorResponse>)> {
    let fact = state
        .fact_service
        .add_fact(payload.text)
        .await
        .map_err(|e| error_response(&e))?;

    Ok(Json(fact.into()))
}

/// Remove a fact from the pool
#[utoipa::path(
    delete,
    path = "/kumo/facts/{id}",
    params(
        ("id" = Uuid, Path, description = "Fact storage id")
    ),
    responses(
        (status = 204, description = "Fact removed"),
        (status = 404, description = "No such fact", body = ErrorResponse),
        (status = 502, description = "Fact store unavailable", body = ErrorResponse)
    ),
    tag = "Facts"
)]
pub async fn delete_fact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<axum::http::StatusCode, (axum::http::StatusCode, Json<ErrorResponse>)> {
    state
        .fact_service
        .remove_fact(id)
        .await
        .map_err(|e| error_response(&e))?;

    Ok(axum::http::StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/kumo/facts", get(list_facts).post(create_fact))
        .route("/kumo/facts/:id", delete(delete_fact))
}
