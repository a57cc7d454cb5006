//! API routes
//!
//! # Layout
//!
//! - [`health`] - liveness probe
//! - [`seed`] - reset the store to the sample roster
//! - [`employees`] - employee reads and mutations

pub mod employees;
pub mod health;
pub mod seed;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Full application router with state attached
pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(seed::router())
        .merge(employees::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
