//! HTTP client creation and configuration utilities

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;

/// Creates the HTTP client used for all outbound calls.
///
/// Every request is bounded by the given wall-clock timeout; on expiry
/// reqwest aborts the in-flight request and its timer, and the error maps to
/// `AppError::NetworkTimeout` in the fetch layer. Browser-like default
/// headers are attached because the public API rejects anonymous clients;
/// they are harmless on the backend.
///
/// # Returns
/// * `Result<Client, reqwest::Error>` - A configured reqwest HTTP client or error
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(crate::constants::PUBLIC_API_USER_AGENT),
    );
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(crate::constants::PUBLIC_API_ACCEPT),
    );

    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .default_headers(headers)
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}
