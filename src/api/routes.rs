//! API route definitions

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::handlers::{self, HealthResponse};
use crate::types::RandomCardResponse;
use crate::upstream::{CardSource, HttpCardSource};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "randomcard API",
        version = "0.1.0",
        description = "Returns the name of a random card from YGOPRODeck"
    ),
    tags(
        (name = "cards", description = "Card lookups"),
        (name = "health", description = "Health checks")
    ),
    paths(
        handlers::health,
        handlers::random_card,
    ),
    components(schemas(
        RandomCardResponse,
        HealthResponse,
    ))
)]
pub struct ApiDoc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn CardSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn CardSource>) -> Self {
        Self { source }
    }

    /// State backed by the real upstream at `url`
    pub fn with_upstream(url: impl Into<String>) -> Self {
        Self::new(Arc::new(HttpCardSource::new(url)))
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Cards
        .route("/RandomCard", post(handlers::random_card))

        // Health
        .route("/health", get(handlers::health))

        // OpenAPI spec
        .route("/api/openapi.json", get(handlers::openapi))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
