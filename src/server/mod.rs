//! HTTP API exposing the engine to external callers.

pub mod handlers;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tracing::info;

use state::AppState;

/// Builds the API router over shared application state.
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/status", get(handlers::status))
        .route("/pilots", get(handlers::pilots))
        .route("/pilots/available", get(handlers::available_pilots))
        .route("/drones", get(handlers::drones))
        .route("/drones/available", get(handlers::available_drones))
        .route("/missions", get(handlers::missions))
        .route("/missions/:mission_id/alternatives", get(handlers::alternatives))
        .route("/assign", post(handlers::assign))
        .route("/conflicts/check", get(handlers::conflicts))
        .with_state(state)
        .layer(ServiceBuilder::new().into_inner())
}

/// Binds the listener and serves the API until shutdown.
///
/// # Errors
///
/// Returns an error string when the port cannot be bound or the server
/// fails while running.
pub async fn serve(state: Arc<AppState>, port: u16) -> Result<(), String> {
    let app = router(state);
    let bind_addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("failed to bind {bind_addr}: {e}"))?;
    info!("skymatch API listening on {bind_addr}");
    axum::serve(listener, app).await.map_err(|e| format!("server error: {e}"))
}
