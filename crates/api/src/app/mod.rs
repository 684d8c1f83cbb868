//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: composition root (repository → use cases → controller)
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: consistent error responses
//! - `docs.rs`: OpenAPI document + Swagger UI

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod docs;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(services: AppServices) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .merge(docs::swagger_ui())
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
