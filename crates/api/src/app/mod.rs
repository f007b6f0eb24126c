//! HTTP API application wiring (Axum router + store wiring).
//!
//! This folder is structured like:
//! - `services.rs`: store wiring (Postgres or in-memory, selected at startup)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and JSON mapping
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use userd_infra::user_store::UserStore;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
///
/// The store handle is injected explicitly; there are no ambient globals.
pub fn build_app(store: Arc<dyn UserStore>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router().layer(Extension(store)))
        .layer(ServiceBuilder::new())
}
