//! Aura Web Server
//!
//! Axum-based HTTP front for the text analyzer.

pub mod config;
pub mod error;
pub mod routes;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub use config::WebConfig;
pub use error::ApiError;

/// Create the application router.
///
/// Fails when the configured origin is `*` or not a valid header value.
pub fn create_router(config: &WebConfig) -> Result<Router, ApiError> {
    let origin = HeaderValue::from_str(&config.allowed_origin)
        .ok()
        .filter(|origin| origin != "*")
        .ok_or_else(|| ApiError::InvalidOrigin(config.allowed_origin.clone()))?;

    // Credentialed CORS forbids wildcards, so methods and headers are mirrored.
    // A list (not `exact`) so only a matching `Origin` is echoed back.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Ok(Router::new()
        .route("/health", get(routes::health::health))
        .route("/process_text", post(routes::analysis::process_text))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

/// Run the web server.
pub async fn run_server(config: WebConfig) -> anyhow::Result<()> {
    let app = create_router(&config)?;

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(
        origin = %config.allowed_origin,
        "Web server listening on http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;
    Ok(())
}
