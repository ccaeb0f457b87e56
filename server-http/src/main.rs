mod cookies;
mod handlers;
mod routes;
mod state;
mod views;

use orgboard::auth::SessionStore;
use orgboard::cache::ConditionalCache;
use orgboard::fetch::HttpFetcher;
use orgboard::github::GithubClient;
use orgboard::persistence::SledRecordStore;
use shared::config::Config;
use state::AppState;
use std::sync::Arc;
use tracing::{info, Level};

const USER_AGENT: &str = "orgboard";

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("Starting orgboard server...");

    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    let config = Config::from_env();

    // One record store and one HTTP client for the process lifetime
    let record_store = Arc::new(
        SledRecordStore::new(std::path::Path::new(&config.data_dir).join("records.sled"))
            .expect("Failed to open record store"),
    );
    let fetcher = Arc::new(HttpFetcher::new(USER_AGENT).expect("Failed to build HTTP client"));

    let cache = ConditionalCache::new(record_store, fetcher.clone());
    let github = Arc::new(GithubClient::new(
        cache,
        fetcher,
        config.github.clone(),
        config.external_url.clone(),
    ));
    let sessions = Arc::new(SessionStore::new(config.session_ttl));

    let state = AppState::new(github, sessions);
    let router = routes::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listener");

    info!("orgboard listening on http://{}", addr);
    info!("Sign in at {}/", config.external_url);

    // Graceful shutdown handler
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    info!("Server shutdown complete");
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }

    info!("Shutting down gracefully...");
}
