//! HTTP API for the catalog engine
//!
//! The whole surface is read-only: the interaction layer sends its current
//! filter selections as query parameters and gets back the evaluated model
//! list; the detail view asks for a model's grouped profiles. The engine
//! itself lives in `bx-catalog`.

pub mod error;
pub mod routes;
pub mod state;
pub mod types;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/models", get(routes::list_models))
        .route("/api/models/{model_id}", get(routes::get_model))
        .route(
            "/api/models/{model_id}/profiles",
            get(routes::list_model_profiles),
        )
        .route("/api/facets", get(routes::get_facets))
        .route("/api/meta", get(routes::get_meta))
        .route("/api/openapi.json", get(routes::openapi_spec))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
