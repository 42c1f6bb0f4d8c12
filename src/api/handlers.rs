//! API request handlers

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use super::routes::AppState;
use crate::types::RandomCardResponse;
use crate::upstream::random_card_name;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
}

// Handlers

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// Fetch a random card and return its name.
///
/// The request body is ignored. Failures never change the status code; the
/// caller has to look for an `error` key in the body.
#[utoipa::path(
    post,
    path = "/RandomCard",
    responses(
        (status = 200, description = "Card name, or an error message", body = RandomCardResponse)
    ),
    tag = "cards"
)]
pub async fn random_card(State(state): State<AppState>) -> Json<RandomCardResponse> {
    let result = random_card_name(state.source.as_ref()).await;

    match &result {
        Ok(name) => tracing::debug!("Fetched random card {}", name),
        Err(e) => tracing::warn!("Random card lookup failed: {}", e),
    }

    Json(RandomCardResponse::from(result))
}

/// Serve the OpenAPI document
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    use utoipa::OpenApi;
    Json(super::routes::ApiDoc::openapi())
}
