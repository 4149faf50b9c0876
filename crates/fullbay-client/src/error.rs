//! Error types for the client library.

use thiserror::Error;

/// Errors that can occur when fetching invoices from Fullbay.
///
/// Covers transport failures on either outbound call, non-success
/// responses from the invoicing endpoint, and unparseable bodies.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Network or HTTP request failure.
    ///
    /// DNS resolution, connection failures, or a request exceeding the
    /// configured timeout, on either the IP lookup or the invoicing call.
    /// The originating URL is stripped before wrapping — the invoicing
    /// URL carries the API key as a query parameter, and `reqwest`'s
    /// error Display would otherwise echo it.
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    /// The IP-discovery service answered but the body was unusable.
    #[error("IP lookup returned malformed output: {0}")]
    IpLookup(String),

    /// The invoicing endpoint responded with a non-success status.
    ///
    /// Carries the upstream status code and response body so callers can
    /// surface what the provider actually said.
    #[error("Upstream error: HTTP {status}: {body}")]
    Upstream {
        /// HTTP status returned by the invoicing endpoint.
        status: u16,
        /// Raw response body, possibly empty.
        body: String,
    },

    /// The invoicing endpoint returned a 2xx but the body is not valid JSON.
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Client configuration issue.
    ///
    /// Invalid base URL or IP-lookup URL.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        // Request URLs carry the API key as a query parameter; drop the
        // URL so it can never reach logs or error bodies.
        Self::Network(err.without_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_includes_status_and_body() {
        let err = ClientError::Upstream {
            status: 503,
            body: "maintenance window".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("maintenance window"));
    }

    #[test]
    fn ip_lookup_error_display() {
        let err = ClientError::IpLookup("empty response body".to_string());
        assert!(err.to_string().contains("IP lookup"));
        assert!(err.to_string().contains("empty response body"));
    }

    #[test]
    fn malformed_response_wraps_serde_error() {
        let serde_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = ClientError::from(serde_err);
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }
}
