//! # fullbay-client
//!
//! Client library for the Fullbay invoicing API.
//!
//! Fullbay authenticates callers with a time-based token: the SHA-1 digest
//! of the API key, today's date, and the caller's public IP address. Each
//! [`FullbayClient::fetch_invoices`] call therefore performs two outbound
//! requests in sequence — a public-IP discovery lookup, then the
//! authenticated invoice query — and returns the provider's JSON document
//! untouched.
//!
//! ## Example
//!
//! ```no_run
//! use fullbay_client::{ClientConfig, FullbayClient};
//!
//! # async fn example() -> Result<(), fullbay_client::ClientError> {
//! let config = ClientConfig::new("fb-api-key").with_timeout(10);
//! let client = FullbayClient::new(config)?;
//!
//! let invoices = client.fetch_invoices("2024-01-01", "2024-01-31").await?;
//! println!("{invoices}");
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use chrono::{Local, Utc};
use log::{debug, error, warn};
use secrecy::ExposeSecret;
use serde_json::Value;

pub mod config;
pub mod error;
pub mod token;

pub use config::{ClientConfig, TokenTimezone};
pub use error::ClientError;

/// Client for the Fullbay invoicing endpoint.
///
/// Holds one `reqwest::Client` (connection pool plus the configured
/// timeout) and the immutable configuration. Cheap to share behind an
/// `Arc`; all methods take `&self` and concurrent calls are independent.
#[derive(Debug, Clone)]
pub struct FullbayClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl FullbayClient {
    /// Creates a client from the given configuration.
    ///
    /// Validates the endpoint URLs up front so malformed configuration
    /// fails at startup rather than on the first request.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if either URL does not
    /// parse, or [`ClientError::Network`] if the HTTP client cannot be
    /// built.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        for (name, value) in [
            ("base URL", &config.base_url),
            ("IP lookup URL", &config.ip_lookup_url),
        ] {
            url::Url::parse(value).map_err(|e| {
                ClientError::Configuration(format!("invalid {name} '{value}': {e}"))
            })?;
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { http, config })
    }

    /// Returns the client's configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Discovers the caller's current public IP address.
    ///
    /// Issues a GET to the configured lookup service and returns the
    /// trimmed plain-text body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Network`] if the service is unreachable or
    /// answers with a non-success status, and [`ClientError::IpLookup`]
    /// if the body is empty or not a textual address.
    pub async fn public_ip(&self) -> Result<String, ClientError> {
        let body = self
            .http
            .get(&self.config.ip_lookup_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let ip = body.trim();
        if ip.is_empty() {
            return Err(ClientError::IpLookup("empty response body".to_string()));
        }
        // Accepts dotted-quad IPv4 and textual IPv6.
        if !ip.chars().all(|c| c.is_ascii_hexdigit() || c == '.' || c == ':') {
            return Err(ClientError::IpLookup(format!("unexpected address {ip:?}")));
        }

        debug!("resolved public ip: {ip}");
        Ok(ip.to_string())
    }

    /// Fetches invoices for the given date window.
    ///
    /// Performs the full authentication chain: IP discovery, token
    /// computation for today's date in the configured timezone, then one
    /// GET to the invoicing endpoint with
    /// `{key, token, startDate, endDate}` query parameters. The response
    /// body is returned as an opaque JSON value — no retries, and neither
    /// the IP nor the token is cached across calls.
    ///
    /// `start` and `end` are passed through unvalidated; Fullbay expects
    /// `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Network`] for transport failures on either
    /// call, [`ClientError::Upstream`] when the endpoint answers with a
    /// non-success status, and [`ClientError::MalformedResponse`] when
    /// the body is not valid JSON.
    pub async fn fetch_invoices(&self, start: &str, end: &str) -> Result<Value, ClientError> {
        let ip = self.public_ip().await?;
        let date = self.today();
        let token = token::generate(self.config.api_key.expose_secret(), &date, &ip);

        debug!("fetching invoices for {start}..{end} (token date {date})");

        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("key", self.config.api_key.expose_secret()),
                ("token", token.as_str()),
                ("startDate", start),
                ("endDate", end),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(|e| {
                warn!("failed to read upstream error body: {e}");
                ClientError::from(e)
            })?;
            error!("upstream request failed with status {}", status.as_u16());
            return Err(ClientError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Today's date formatted `YYYY-MM-DD` in the configured timezone.
    fn today(&self) -> String {
        match self.config.token_timezone {
            TokenTimezone::Utc => Utc::now().format("%Y-%m-%d").to_string(),
            TokenTimezone::Local => Local::now().format("%Y-%m-%d").to_string(),
        }
    }
}
