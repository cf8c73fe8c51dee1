//! Axum HTTP handlers for the web server
//!
//! Provides the greeting endpoint served on the root path.

/// `GET /`. A `&'static str` body responds as `text/plain` with status 200.
pub async fn greeting() -> &'static str {
    "Hello World!"
}
