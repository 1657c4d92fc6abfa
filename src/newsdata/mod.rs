//! NewsData.io headline fetching.
//!
//! Pages through the `latest` endpoint with retry and exponential backoff and
//! hands the collected records to the caller as [`NewsItem`](crate::types::NewsItem)s.

mod client;
mod fetcher;
mod types;

pub use self::client::{create_http_client, request_with_backoff};
pub use self::fetcher::{build_query, fetch_top_n, parse_page};
pub use self::types::*;
