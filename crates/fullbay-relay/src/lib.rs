//! # fullbay-relay
//!
//! HTTP relay in front of the Fullbay invoicing API.
//!
//! Exposes `GET /get-invoices?start=..&end=..`, drives the
//! [`fullbay_client`] authentication chain (public-IP discovery,
//! date-keyed token, authenticated query), and passes the provider's
//! JSON response back unmodified. Every internal failure surfaces to
//! the caller as a generic 500 with a `{"detail": ..}` body; the
//! process stays up regardless of any single request's outcome.

pub mod config;
pub mod error;
pub mod server;

pub use config::RelayConfig;
pub use error::RelayError;
