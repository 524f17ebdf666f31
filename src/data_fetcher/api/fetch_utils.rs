//! Generic HTTP fetching utilities with error mapping, source fallback and
//! the bounded retry loop used by the standings resource.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::constants::{PUBLIC_API_BASE, PUBLIC_API_REFERER};
use crate::error::{AppError, body_excerpt};

/// Generic fetch function with comprehensive error handling.
///
/// This function:
/// - Sends a referer header on public-API calls (the upstream 403s without
///   browser-like headers)
/// - Maps timeouts and connection failures to their own error variants so
///   callers can present "timed out" separately from "upstream rejected"
/// - Carries a truncated body excerpt inside non-2xx errors for diagnostics
/// - Distinguishes malformed JSON from a valid document of the wrong shape
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch data from
///
/// # Returns
/// * `Result<T, AppError>` - Parsed response data or error
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let mut request = client.get(url);
    if url.starts_with(PUBLIC_API_BASE) {
        request = request.header(reqwest::header::REFERER, PUBLIC_API_REFERER);
    }

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    if !status.is_success() {
        let status_code = status.as_u16();
        let excerpt = body_excerpt(&response_text);

        error!("HTTP {} (URL: {})", status_code, url);

        // Return specific error types based on HTTP status code
        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(excerpt, url),
            400..=499 => AppError::api_client_error(status_code, excerpt, url),
            502 | 503 => AppError::api_service_unavailable(status_code, excerpt, url),
            _ => AppError::api_server_error(status_code, excerpt, url),
        });
    }

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);

            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                // Valid JSON but unexpected structure
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

/// Fetches a raw JSON document for the normalizer paths, where the shape is
/// uncertain by design
pub(super) async fn fetch_value(client: &Client, url: &str) -> Result<Value, AppError> {
    fetch::<Value>(client, url).await
}

/// Fetches a raw JSON document with the standings retry policy: a fixed
/// number of sequential attempts with a fixed delay between them. Any
/// failure is retried; the last attempt's error propagates.
pub(super) async fn fetch_value_with_retry(
    client: &Client,
    url: &str,
    attempts: u32,
    delay: Duration,
) -> Result<Value, AppError> {
    let mut last_error = None;

    for attempt in 1..=attempts {
        match fetch_value(client, url).await {
            Ok(value) => return Ok(value),
            Err(e) => {
                if attempt < attempts {
                    warn!(
                        "Attempt {}/{} failed for {}: {}. Retrying in {:?}",
                        attempt, attempts, url, e, delay
                    );
                    tokio::time::sleep(delay).await;
                }
                last_error = Some(e);
            }
        }
    }

    // attempts >= 1, so last_error is always set by the loop
    Err(last_error.unwrap_or_else(|| AppError::api_no_data("no fetch attempts made", url)))
}

/// Runs the primary source when one is configured, falling back to the
/// secondary on any failure. The secondary's error propagates if both fail.
pub(super) async fn with_fallback<T, FutA, FutB>(
    primary: Option<FutA>,
    fallback: FutB,
) -> Result<T, AppError>
where
    FutA: Future<Output = Result<T, AppError>>,
    FutB: Future<Output = Result<T, AppError>>,
{
    if let Some(primary) = primary {
        match primary.await {
            Ok(value) => return Ok(value),
            Err(e) => {
                warn!("Primary source failed, falling back to public API: {e}");
            }
        }
    }
    fallback.await
}
