//! Client configuration.
//!
//! The API key is stored with the `secrecy` crate so it cannot leak into
//! `Debug` output or log lines; accessing it requires an explicit
//! `expose_secret()` call at the single point where the outbound query is
//! assembled.

use secrecy::SecretString;

/// Default Fullbay invoicing endpoint.
pub const DEFAULT_BASE_URL: &str = "https://app.fullbay.com/services/getInvoices.php";

/// Default public-IP discovery service.
pub const DEFAULT_IP_LOOKUP_URL: &str = "https://api.ipify.org";

/// Default timeout applied to each outbound call, in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Timezone used when computing "today's date" for the token.
///
/// Fullbay validates the token against a calendar date, but does not
/// document which timezone it expects. The original deployments relied on
/// the host clock default; here the choice is explicit so a mismatch is a
/// configuration decision rather than an accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenTimezone {
    /// Use the UTC calendar date.
    #[default]
    Utc,
    /// Use the host's local calendar date.
    Local,
}

/// Configuration for a [`FullbayClient`](crate::FullbayClient).
///
/// # Examples
///
/// ```
/// use fullbay_client::ClientConfig;
///
/// let config = ClientConfig::new("fb-api-key")
///     .with_timeout(10);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Fullbay API key shared with the provider.
    pub api_key: SecretString,
    /// Invoicing endpoint URL.
    pub base_url: String,
    /// Public-IP discovery service URL.
    pub ip_lookup_url: String,
    /// Timeout in seconds for each outbound call.
    pub timeout_seconds: u64,
    /// Timezone used for the token's date component.
    pub token_timezone: TokenTimezone,
}

impl ClientConfig {
    /// Creates a configuration with the given API key and all defaults.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into().into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            ip_lookup_url: DEFAULT_IP_LOOKUP_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            token_timezone: TokenTimezone::default(),
        }
    }

    /// Sets a custom invoicing endpoint URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets a custom public-IP discovery URL.
    #[must_use]
    pub fn with_ip_lookup_url(mut self, ip_lookup_url: impl Into<String>) -> Self {
        self.ip_lookup_url = ip_lookup_url.into();
        self
    }

    /// Sets the outbound call timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Sets the timezone used for the token's date component.
    #[must_use]
    pub const fn with_token_timezone(mut self, token_timezone: TokenTimezone) -> Self {
        self.token_timezone = token_timezone;
        self
    }
}
