//! Paginated fetching of the latest headlines.

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use tracing::{debug, info};

use super::client::{create_http_client, request_with_backoff};
use super::types::{Page, RetryPolicy, MAX_PAGE_CALLS};
use crate::environment::NewsConfig;
use crate::types::NewsItem;
use crate::TARGET_WEB_REQUEST;

/// Query parameters for one page request
pub fn build_query(
    api_key: &str,
    language: &str,
    category: Option<&str>,
    page: Option<&str>,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("apikey", api_key.to_string()),
        ("language", language.to_string()),
    ];
    if let Some(category) = category {
        params.push(("category", category.to_string()));
    }
    if let Some(page) = page {
        params.push(("page", page.to_string()));
    }
    params
}

/// Extracts the records and the next page token from a response body.
///
/// # Returns
/// * `Ok(Page)` - Records (empty if `results` is missing or null) and the next token
/// * `Err` - If the API reported anything other than `"success"`
pub fn parse_page(body: Value) -> Result<Page> {
    let status = body.get("status").and_then(Value::as_str).unwrap_or("");
    if status != "success" {
        return Err(anyhow!("NewsData request was not successful: {}", body));
    }

    let items = match body.get("results") {
        Some(Value::Null) | None => Vec::new(),
        Some(results) => serde_json::from_value::<Vec<NewsItem>>(results.clone())
            .context("Failed to parse NewsData results")?,
    };
    let next_page = body
        .get("nextPage")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .map(str::to_string);

    Ok(Page { items, next_page })
}

/// Fetches up to `config.count` of the latest headlines.
///
/// Follows `nextPage` tokens for at most four calls, stopping early once
/// enough records are collected or the API has no further pages.
pub async fn fetch_top_n(config: &NewsConfig) -> Result<Vec<NewsItem>> {
    let client = create_http_client()?;
    let mut items: Vec<NewsItem> = Vec::new();
    let mut page_token: Option<String> = None;

    for call in 1..=MAX_PAGE_CALLS {
        let params = build_query(
            &config.api_key,
            &config.language,
            config.category.as_deref(),
            page_token.as_deref(),
        );

        let body = request_with_backoff(&client, &params, RetryPolicy::default()).await?;
        let page = parse_page(body)?;
        debug!(
            target: TARGET_WEB_REQUEST,
            "Page {} returned {} results", call, page.items.len()
        );
        items.extend(page.items);

        if items.len() >= config.count {
            break;
        }
        match page.next_page {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    items.truncate(config.count);
    info!(
        target: TARGET_WEB_REQUEST,
        "Fetched {} headlines (language: {}, category: {})",
        items.len(),
        config.language,
        config.category.as_deref().unwrap_or("(all)")
    );
    Ok(items)
}
