use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod models;
mod routes;
mod services;

use kumo::ports::{FactRepository, HistoryRepository, StyleRewriter};

use adapters::{BuiltinFactRepository, PgFactRepository, PgHistoryRepository};
use application::FactService;
use services::fallback::TemplateRewriter;
use services::rewrite::RewriteAgent;
use services::sanitize::Sanitizer;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub fact_service: Arc<FactService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Kumo API is running - facts drift in from the cloud".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// A key is usable unless it is missing, blank, or the placeholder that
/// ships in deployment templates.
fn usable_api_key(secret: Option<String>) -> Option<String> {
    secret.filter(|key| !key.trim().is_empty() && !key.starts_with("PUT_"))
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("☁️  Kumo API initializing...");

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("✅ Database migrations completed");

    // Fact pool: Postgres by default, fixed builtin pool when requested
    let use_builtin = secrets
        .get("USE_BUILTIN_FACTS")
        .is_some_and(|v| v == "true");
    let facts: Arc<dyn FactRepository> = if use_builtin {
        tracing::info!("📦 Builtin fact pool enabled (read-only)");
        Arc::new(BuiltinFactRepository::new())
    } else {
        Arc::new(PgFactRepository::new(pool.clone()))
    };

    let history: Arc<dyn HistoryRepository> = Arc::new(PgHistoryRepository::new(pool.clone()));

    // Remote rewrite only with a usable credential; otherwise the local
    // template transformer serves every request.
    let rewriter: Arc<dyn StyleRewriter> = match usable_api_key(secrets.get("PERPLEXITY_API_KEY")) {
        Some(api_key) => {
            let mut agent = RewriteAgent::new(api_key);
            if let Some(model) = secrets.get("REWRITE_MODEL") {
                agent = agent.with_model(model);
            }
            tracing::info!("✨ Remote rewrite enabled");
            Arc::new(agent)
        }
        None => {
            tracing::warn!("⚠️  No PERPLEXITY_API_KEY set - remote rewrite disabled, using local templates");
            Arc::new(TemplateRewriter)
        }
    };

    let fact_service = Arc::new(FactService::new(facts, history, rewriter, Sanitizer::new()));

    let state = AppState { fact_service };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::fact::router())
        .merge(routes::facts::router())
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Kumo API ready - the cloud has jokes now");

    Ok(router.into())
}
