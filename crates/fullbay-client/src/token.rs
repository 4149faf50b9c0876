//! Time-based authentication token for the Fullbay API.
//!
//! Fullbay authenticates each request with a SHA-1 digest of the API key,
//! the current calendar date, and the caller's public IP address. The
//! digest inputs are concatenated with no separator, so the token is only
//! valid for the day and address it was computed for.

use sha1::{Digest, Sha1};

/// Computes the request token for the given key, date, and public IP.
///
/// The token is the lowercase hex SHA-1 digest of `secret + date + ip`
/// (UTF-8 bytes, no separators). `date` must already be formatted as
/// `YYYY-MM-DD`; this function performs no validation and cannot fail.
#[must_use]
pub fn generate(secret: &str, date: &str, ip: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(secret.as_bytes());
    hasher.update(date.as_bytes());
    hasher.update(ip.as_bytes());
    hex::encode(hasher.finalize())
}
