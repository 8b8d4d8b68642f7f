//! HTTP echo server
//!
//! One handler for every method and path; it logs the request and answers
//! `{"message":"Hello, World!"}`.

use axum::extract::Request;
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde::Serialize;

/// Response body
#[derive(Debug, Clone, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

pub const GREETING: Greeting = Greeting {
    message: "Hello, World!",
};

/// Build the router: a single fallback, no routes
pub fn router() -> Router {
    Router::new().fallback(hello)
}

async fn hello(req: Request) -> impl IntoResponse {
    tracing::info!(
        method = %req.method(),
        uri = %req.uri(),
        version = ?req.version(),
        headers = ?req.headers(),
        "request"
    );

    Json(GREETING)
}

/// Bind `addr` and serve until Ctrl+C
pub async fn serve(addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
