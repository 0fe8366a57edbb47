//! # Salon API
//!
//! The API crate provides the web server for the salon booking service. It exposes
//! endpoints for booking, listing, editing and cancelling appointments, lists the
//! haircut style catalog, and serves the booking frontend's static files.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into Appointment Store calls
//! - **Middleware**: Map domain errors onto HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework. Storage is reached only through the
//! [`AppointmentStore`] trait, so handlers can be exercised against a mock store.

/// Configuration module for API settings
pub mod config;
/// Extractors that report rejections as API errors
pub mod extract;
/// Request handlers that call into the Appointment Store
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    http::{header, Method, StatusCode},
    response::IntoResponse,
    Json, Router,
};
use eyre::Result;
use salon_core::store::AppointmentStore;
use serde_json::json;
use tokio::net::TcpListener;
use tower::{BoxError, ServiceBuilder};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```rust,ignore
/// let store = SqliteStore::new(db_pool);
/// let state = Arc::new(ApiState { store: Arc::new(store) });
/// let app = Router::new().with_state(state);
/// ```
pub struct ApiState {
    /// Appointment Store that owns all reads and writes
    pub store: Arc<dyn AppointmentStore>,
}

/// Builds the application router with every route and middleware layer applied
///
/// Kept separate from [`start_server`] so tests can drive the full stack
/// in-process.
///
/// # Arguments
///
/// * `state` - Shared state holding the Appointment Store
/// * `config` - API configuration (CORS origins, request timeout, static directory)
pub fn build_router(state: Arc<ApiState>, config: &config::ApiConfig) -> Router {
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Appointment endpoints
        .merge(routes::appointment::routes())
        // Style catalog endpoints
        .merge(routes::style::routes())
        // Attach shared state to all routes
        .with_state(state);

    // Everything else is looked up in the frontend directory
    let app = match &config.static_dir {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app,
    };

    app.layer(cors_layer(config.cors_origins.as_deref()))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout_error))
                .timeout(Duration::from_secs(config.request_timeout)),
        )
        .layer(TraceLayer::new_for_http())
}

/// Starts the API server with the provided configuration and Appointment Store
///
/// This function initializes logging, configures routes, and starts the HTTP server.
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and other settings
/// * `store` - Appointment Store backing every endpoint
///
/// # Returns
///
/// * `Result<()>` - Success or error result
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn AppointmentStore>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState { store });
    let app = build_router(state, &config);

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Restricts CORS to the configured origins, or allows any origin when none are set
fn cors_layer(origins: Option<&[String]>) -> CorsLayer {
    let Some(origins) = origins else {
        return CorsLayer::permissive();
    };

    let allowed = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(AllowOrigin::list(allowed))
}

async fn handle_timeout_error(err: BoxError) -> impl IntoResponse {
    if err.is::<tower::timeout::error::Elapsed>() {
        (
            StatusCode::REQUEST_TIMEOUT,
            Json(json!({ "error": "Request timed out" })),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": format!("Unhandled internal error: {}", err) })),
        )
    }
}
