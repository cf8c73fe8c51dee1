use axum::{routing::get, Router};

pub mod config;
pub mod errors;
pub mod http;
pub mod logging;

/// Builds the application router. The greeting on `/` is the only
/// registered route; unmatched paths fall through to axum's default
/// not-found response.
pub fn build_app() -> Router {
    Router::new().route("/", get(http::handlers::greeting))
}
