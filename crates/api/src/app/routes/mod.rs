use axum::Router;

pub mod products;
pub mod system;

/// Base path of the product resource.
pub const PRODUCT_BASE_PATH: &str = "/v1/product";

/// Router for all resource endpoints.
pub fn router() -> Router {
    Router::new().nest(PRODUCT_BASE_PATH, products::router())
}
