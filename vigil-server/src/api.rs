pub mod status;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::state::StatusHolder;
pub use status::{background_route, refreshing_route, status_response, status_route};

/// Mounts both status routes. Panics if the configured paths are rejected by
/// the router; call [`ServerConfig::validate`] first.
pub fn build_router(holder: StatusHolder, config: &ServerConfig) -> Router {
    Router::new()
        .route(&config.status_path, refreshing_route(holder.clone()))
        .route(&config.background_path, background_route(holder))
        .layer(TraceLayer::new_for_http())
}
