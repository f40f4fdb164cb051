//! Application setup and server configuration.

use axum::{
    extract::Extension,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    delete_tukang_handler, get_tukang_handler, health_handler, list_tukang_handler,
    register_tukang_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub deps: ServerDeps,
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps) -> Router {
    let app_state = AxumAppState { deps };

    // CORS configuration - any origin, method and header
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_handler))
        .route(
            "/api/tukang",
            get(list_tukang_handler).post(register_tukang_handler),
        )
        .route(
            "/api/tukang/:tukang_id",
            get(get_tukang_handler).delete(delete_tukang_handler),
        )
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
