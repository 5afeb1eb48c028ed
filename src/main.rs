//! Sitecap Backend
//!
//! REST backend for editing a federated node's capability document: sites,
//! compute, storages, storage areas, services, and their scheduled downtimes.

mod api;
mod config;
mod engine;
mod errors;
mod models;
mod session;
mod submit;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use session::SessionStore;
use submit::Submitter;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub submitter: Arc<Submitter>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Sitecap Backend");
    tracing::info!("Bind address: {}", config.bind_addr);
    match &config.submit_url {
        Some(url) => tracing::info!("Default submission endpoint: {}", url),
        None => tracing::warn!(
            "No default submission endpoint configured (SITECAP_SUBMIT_URL); \
             submit requests must name one"
        ),
    }

    let submitter = Arc::new(Submitter::new(config.submit_timeout)?);

    // Create application state
    let state = AppState {
        sessions: Arc::new(SessionStore::new()),
        submitter,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Edit sessions
        .route("/sessions", post(api::open_session))
        .route("/sessions/{id}", get(api::get_session))
        .route("/sessions/{id}", delete(api::discard_session))
        // Downtimes
        .route("/sessions/{id}/downtimes", get(api::list_downtimes))
        .route("/sessions/{id}/downtimes", post(api::add_downtime))
        .route(
            "/sessions/{id}/downtimes/{downtime_id}",
            delete(api::remove_downtime),
        )
        // Dependent picklist
        .route("/sessions/{id}/options", get(api::resource_options))
        // Validation and submission
        .route("/sessions/{id}/validate", post(api::validate_session))
        .route("/sessions/{id}/submit", post(api::submit_session));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
