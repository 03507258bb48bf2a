//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{CreateFactRequest, ErrorResponse, FactResponse, WittyFactResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::fact::witty_fact,
        super::facts::list_facts,
        super::facts::create_fact,
        super::facts::delete_fact,
    ),
    info(
        title = "Kumo API",
        version = "0.1.0",
        description = "雲 (Kumo) - Witty cloud-computing facts, rewritten in a different comedic tone every time.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Fact", description = "Witty fact delivery"),
        (name = "Facts", description = "Fact pool administration"),
    ),
    components(
        schemas(
            WittyFactResponse,
            FactResponse,
            CreateFactRequest,
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;
