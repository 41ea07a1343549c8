use axum::routing::{get, post};
use axum::Router;
use evreg_core::storage::Storage;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::handlers::{health, home, register};
use crate::state::AppState;

/// Create the HTTP server router
pub fn create_server(storage: Arc<dyn Storage>) -> Router {
    let state = AppState { storage };

    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/api/register", post(register))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(storage: Arc<dyn Storage>, port: u16) -> anyhow::Result<()> {
    let app = create_server(storage);
    let addr = format!("0.0.0.0:{}", port);

    println!("🚀 HTTP server running on http://{}", addr);
    println!("💚 Health check: http://{}/health", addr);
    println!("📝 Register:     http://{}/api/register", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
