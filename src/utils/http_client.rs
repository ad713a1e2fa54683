// ABOUTME: Shared HTTP client utilities with connection pooling and timeout configuration
// ABOUTME: Provides the shared client plus timeout-specific clients for upstream services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Lens Contributors

use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::warn;

/// Global shared HTTP client with default configuration
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or create the shared HTTP client with default settings
///
/// 30s request timeout, 10s connect timeout. Used for short lookups such as
/// the illustrative image search.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| build_or_default(ClientBuilder::new(), 30, 10))
}

/// Create a new HTTP client with custom timeout settings
///
/// Timeouts are how upstream "no response" turns into a resolution failure;
/// nothing above the transport retries or cancels.
#[must_use]
pub fn create_client_with_timeout(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    build_or_default(ClientBuilder::new(), timeout_secs, connect_timeout_secs)
}

fn build_or_default(builder: ClientBuilder, timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    builder
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .build()
        .unwrap_or_else(|e| {
            warn!(error = %e, "Falling back to default HTTP client");
            Client::new()
        })
}
