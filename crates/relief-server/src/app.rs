//! Router assembly

use axum::{routing::get, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::storage::Store;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, static_dir: &str) -> Router {
    let index_path = PathBuf::from(static_dir).join("index.html");

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // REST API routes
        .nest("/api", api_routes())
        // Landing page assets
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback_service(ServeFile::new(index_path))
        // Layers
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/alerts",
            get(handlers::alerts::list).post(handlers::alerts::create),
        )
        .route(
            "/helplines",
            get(handlers::helplines::list).post(handlers::helplines::create),
        )
        .route(
            "/safe-locations",
            get(handlers::safe_locations::list).post(handlers::safe_locations::create),
        )
        .route(
            "/volunteers",
            get(handlers::volunteers::list).post(handlers::volunteers::create),
        )
}
