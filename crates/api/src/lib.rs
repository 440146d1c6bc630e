//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for the bookkeeping dashboard
//! - Error responses and extractors
//! - Response types

pub mod error;
pub mod extract;
pub mod routes;

use axum::Router;
use compta_core::service::SummaryService;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Summary service over the record source.
    pub service: Arc<SummaryService>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
