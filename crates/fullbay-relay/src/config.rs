//! Relay configuration loaded from the environment.
//!
//! All settings come from environment variables; the API key is the only
//! required one and is checked at startup so a missing key fails fast
//! instead of failing every request downstream.
//!
//! | Variable                 | Default                    |
//! |--------------------------|----------------------------|
//! | `FULLBAY_API_KEY`        | required                   |
//! | `FULLBAY_BASE_URL`       | Fullbay invoicing endpoint |
//! | `FULLBAY_IP_LOOKUP_URL`  | `https://api.ipify.org`    |
//! | `FULLBAY_TIMEOUT_SECS`   | `30`                       |
//! | `FULLBAY_TOKEN_TIMEZONE` | `utc` (or `local`)         |
//! | `RELAY_BIND`             | `0.0.0.0:8000`             |

use std::net::SocketAddr;

use fullbay_client::{ClientConfig, TokenTimezone};

use crate::error::{RelayError, Result};

/// Default inbound bind address.
pub const DEFAULT_BIND: &str = "0.0.0.0:8000";

/// Relay configuration: where to listen and how to reach Fullbay.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Socket address the HTTP server binds to.
    pub bind: SocketAddr,
    /// Outbound client configuration, including the API key.
    pub client: ClientConfig,
}

impl RelayConfig {
    /// Loads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `FULLBAY_API_KEY` is missing or
    /// empty, or if any optional variable has an unparseable value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// `from_env` delegates here; tests supply a closure over a map so
    /// they never mutate real process environment.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("FULLBAY_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                RelayError::Config("FULLBAY_API_KEY must be set and non-empty".to_string())
            })?;

        let mut client = ClientConfig::new(api_key);

        if let Some(url) = lookup("FULLBAY_BASE_URL") {
            client = client.with_base_url(url);
        }
        if let Some(url) = lookup("FULLBAY_IP_LOOKUP_URL") {
            client = client.with_ip_lookup_url(url);
        }
        if let Some(raw) = lookup("FULLBAY_TIMEOUT_SECS") {
            let seconds = raw.parse::<u64>().map_err(|e| {
                RelayError::Config(format!("invalid FULLBAY_TIMEOUT_SECS '{raw}': {e}"))
            })?;
            client = client.with_timeout(seconds);
        }
        if let Some(raw) = lookup("FULLBAY_TOKEN_TIMEZONE") {
            let timezone = match raw.to_lowercase().as_str() {
                "utc" => TokenTimezone::Utc,
                "local" => TokenTimezone::Local,
                other => {
                    return Err(RelayError::Config(format!(
                        "invalid FULLBAY_TOKEN_TIMEZONE '{other}' (expected 'utc' or 'local')"
                    )));
                }
            };
            client = client.with_token_timezone(timezone);
        }

        let bind = lookup("RELAY_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind
            .parse::<SocketAddr>()
            .map_err(|e| RelayError::Config(format!("invalid RELAY_BIND '{bind}': {e}")))?;

        Ok(Self { bind, client })
    }
}
