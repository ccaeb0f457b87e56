use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::trace::TraceLayer;

/// Build and configure the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Dashboard (login page when signed out)
        .route("/", get(handlers::dashboard))
        // OAuth callback and sign-out
        .route("/login", get(handlers::oauth_callback))
        .route("/logout", post(handlers::logout))
        // Middleware
        .layer(NormalizePathLayer::trim_trailing_slash())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
