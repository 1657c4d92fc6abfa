//! HTTP client creation and request handling for the NewsData API.

use anyhow::{anyhow, Result};
use reqwest::{header, StatusCode};
use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, warn};

use super::types::{RetryPolicy, BASE_URL, REQUEST_TIMEOUT};
use crate::TARGET_WEB_REQUEST;

/// Create the client used for every NewsData request
pub fn create_http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .gzip(true)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))
}

/// GET the `latest` endpoint, retrying with exponential backoff.
///
/// Rate limiting (HTTP 429), other error statuses, transport failures and
/// undecodable bodies are all retried. Once the retry budget is spent the last
/// error is returned.
///
/// # Arguments
/// * `client` - HTTP client
/// * `params` - Query parameters, including the API key
/// * `policy` - Retry count and initial delay
///
/// # Returns
/// * `Ok(Value)` - The decoded JSON body
/// * `Err` - The last failure after all attempts
pub async fn request_with_backoff(
    client: &reqwest::Client,
    params: &[(&str, String)],
    policy: RetryPolicy,
) -> Result<Value> {
    let mut delays = policy.delays().into_iter();
    let mut attempt = 0;

    loop {
        attempt += 1;
        let error = match send_once(client, params).await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        match delays.next() {
            Some(delay) => {
                warn!(
                    target: TARGET_WEB_REQUEST,
                    "Attempt {} failed: {}, retrying in {:?}", attempt, error, delay
                );
                sleep(delay).await;
            }
            None => return Err(error.context(format!("Giving up after {} attempts", attempt))),
        }
    }
}

async fn send_once(client: &reqwest::Client, params: &[(&str, String)]) -> Result<Value> {
    debug!(target: TARGET_WEB_REQUEST, "Requesting {}", BASE_URL);

    let response = client
        .get(BASE_URL)
        .header(header::ACCEPT, "application/json")
        .query(params)
        .send()
        .await
        .map_err(|e| anyhow!("Request failed: {}", e.without_url()))?;

    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(anyhow!("Rate limited by {}", BASE_URL));
    }
    if !status.is_success() {
        return Err(anyhow!("Non-success status {} from {}", status, BASE_URL));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| anyhow!("Failed to decode response body: {}", e.without_url()))
}
