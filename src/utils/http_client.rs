// ABOUTME: Shared HTTP client utilities with connection pooling and timeouts
// ABOUTME: Provides configurable reqwest clients for upstream provider calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Connect timeout applied to every upstream client, in seconds
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Create a new HTTP client with a custom request timeout
///
/// Use this for upstream provider calls where the caller imposes the
/// timeout budget.
///
/// # Arguments
/// * `timeout_secs` - Request timeout in seconds
///
/// # Returns
/// A new `reqwest::Client`, falling back to defaults if construction fails
#[must_use]
pub fn create_client_with_timeout(timeout_secs: u64) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|_| Client::new())
}
