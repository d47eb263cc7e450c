//! HTTP client wrapper - fetches a number set and classifies failures

use std::time::Instant;

use crate::messages::NetworkResponse;
use crate::models::NumberSet;

/// Why a fetch did not produce a number set
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The endpoint answered with a non-2xx status
    #[error("Failed to fetch lottery numbers.")]
    Status(reqwest::StatusCode),
    /// Connection, TLS, or body read failure
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// The body was not the expected JSON payload
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

/// GET the endpoint and decode the payload
pub async fn fetch_numbers(client: &reqwest::Client, url: &str) -> Result<NumberSet, FetchError> {
    let resp = client.get(url).send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let body = resp.text().await?;
    let numbers = serde_json::from_str(&body)?;
    Ok(numbers)
}

/// Execute a fetch and wrap the outcome for the App layer
pub async fn execute_fetch(client: &reqwest::Client, url: &str, request_id: u64) -> NetworkResponse {
    let start = Instant::now();
    let result = fetch_numbers(client, url).await;
    let time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(numbers) => NetworkResponse::Numbers {
            id: request_id,
            numbers,
            time_ms,
        },
        Err(e) => {
            if let FetchError::Status(status) = &e {
                tracing::error!(id = request_id, %status, "Fetch error: {}", e);
            } else {
                tracing::error!(id = request_id, error = ?e, "Fetch error: {}", e);
            }
            NetworkResponse::Failed {
                id: request_id,
                message: e.to_string(),
                time_ms,
            }
        }
    }
}

/// Create an HTTP client with default configuration
///
/// No request timeout is set; a fetch runs until it completes or fails.
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!("euromillions-tui/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
