use std::path::PathBuf;

use axum::middleware;
use axum::Router;
use tower_http::services::ServeDir;

use crate::server::middleware::access_log;

/// Router serving the build output root as static files
///
/// Directories answer with their `index.html`, so `/<slug>/` serves a built
/// page.
pub fn create_app(destination: PathBuf) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(destination))
        .layer(middleware::from_fn(access_log))
}
