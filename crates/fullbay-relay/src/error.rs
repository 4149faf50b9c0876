//! Error types for the relay.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fullbay_client::ClientError;
use thiserror::Error;
use tracing::error;

/// Errors that can occur in the relay.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Inbound request lacks a required query parameter.
    #[error("missing required query parameter: {0}")]
    MissingParameter(&'static str),

    /// Failure from the outbound invoicing chain.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Configuration error at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error (binding or serving the listener).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`RelayError`].
pub type Result<T> = std::result::Result<T, RelayError>;

impl IntoResponse for RelayError {
    /// Maps errors onto the relay's HTTP surface.
    ///
    /// Missing parameters are the caller's fault (400); every internal
    /// failure surfaces as the same generic 500 with a
    /// `{"detail": "<message>"}` body. No failure-kind-specific status
    /// fan-out, and nothing here terminates the process.
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingParameter(_) => StatusCode::BAD_REQUEST,
            Self::Client(_) | Self::Config(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!("request failed: {self}");
        }

        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn missing_parameter_maps_to_400() {
        let response = RelayError::MissingParameter("start").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn client_errors_map_to_generic_500() {
        let upstream = RelayError::Client(ClientError::Upstream {
            status: 503,
            body: "down".to_string(),
        });
        assert_eq!(
            upstream.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let lookup = RelayError::Client(ClientError::IpLookup("empty".to_string()));
        assert_eq!(
            lookup.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn missing_parameter_message_names_the_parameter() {
        assert_eq!(
            RelayError::MissingParameter("end").to_string(),
            "missing required query parameter: end"
        );
    }
}
