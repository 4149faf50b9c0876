//! HTTP surface of the relay.
//!
//! One business route, `GET /get-invoices`, plus a liveness probe. The
//! router is a standalone constructor so integration tests can run the
//! app against a mocked upstream.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use fullbay_client::FullbayClient;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::config::RelayConfig;
use crate::error::{RelayError, Result};

/// Query parameters for `/get-invoices`.
///
/// Both dates are deserialized as optional so the handler can report
/// exactly which one is missing; values are otherwise passed through to
/// Fullbay unvalidated (`YYYY-MM-DD` by convention).
#[derive(Debug, Deserialize)]
struct InvoiceWindow {
    start: Option<String>,
    end: Option<String>,
}

/// Builds the relay router over a shared client.
///
/// The client (and the API key inside it) is the only process-wide
/// state; handlers hold it read-only, so concurrent requests need no
/// coordination.
#[must_use]
pub fn router(client: Arc<FullbayClient>) -> Router {
    Router::new()
        .route("/get-invoices", get(get_invoices))
        .route("/health", get(health))
        .with_state(client)
}

/// Binds the configured address and serves until shutdown.
///
/// # Errors
///
/// Returns an error if the client cannot be constructed, the listener
/// cannot bind, or the server loop fails. Request-level failures never
/// reach this level.
pub async fn serve(config: RelayConfig) -> Result<()> {
    let client = Arc::new(FullbayClient::new(config.client)?);
    let app = router(client);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %config.bind, "Fullbay relay listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install ctrl-c handler: {e}");
        return std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// `GET /get-invoices?start=..&end=..`
///
/// Presence-checks both parameters before any outbound traffic, then
/// relays the upstream JSON document verbatim with status 200.
async fn get_invoices(
    State(client): State<Arc<FullbayClient>>,
    Query(window): Query<InvoiceWindow>,
) -> Result<Json<Value>> {
    let start = window.start.ok_or(RelayError::MissingParameter("start"))?;
    let end = window.end.ok_or(RelayError::MissingParameter("end"))?;

    let invoices = client.fetch_invoices(&start, &end).await?;
    Ok(Json(invoices))
}

/// `GET /health` — liveness probe, no outbound calls.
async fn health() -> Json<Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
