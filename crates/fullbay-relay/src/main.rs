//! Fullbay relay binary.
//!
//! Loads configuration from the environment, fails fast when the API key
//! is absent, and serves the relay until a shutdown signal arrives.

use tracing::{error, info};

use fullbay_relay::config::RelayConfig;
use fullbay_relay::error::Result;
use fullbay_relay::server;

/// Initializes structured logging with tracing.
///
/// Supports two output formats via the `RELAY_LOG_FORMAT` environment
/// variable:
/// - `json`: Machine-readable JSON logs (default for production)
/// - `pretty`: Human-readable formatted logs (default for development)
///
/// Log level is controlled via the `RUST_LOG` environment variable.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let format = std::env::var("RELAY_LOG_FORMAT")
        .unwrap_or_else(|_| "pretty".to_string())
        .to_lowercase();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fullbay_relay=info,fullbay_client=info"));

    match format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .init();
        }
        _ => {
            fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .init();
        }
    }
}

async fn run() -> Result<()> {
    let config = RelayConfig::from_env()?;
    info!("configuration loaded");
    server::serve(config).await
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        error!("fatal: {e}");
        std::process::exit(1);
    }
}
