//! Type definitions for the NewsData module.

use std::time::Duration;

use crate::types::NewsItem;

pub const BASE_URL: &str = "https://newsdata.io/api/1/latest";

// Constants
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const INITIAL_RETRY_DELAY: Duration = Duration::from_secs(1);
pub const MAX_RETRIES: usize = 2;
pub const MAX_PAGE_CALLS: usize = 4;

/// Retry budget for one request
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Attempts after the first one
    pub max_retries: usize,
    /// Delay before the first retry, doubled after every failed attempt
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            initial_delay: INITIAL_RETRY_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Delays slept between attempts, in order
    pub fn delays(&self) -> Vec<Duration> {
        (0..self.max_retries)
            .map(|i| self.initial_delay * 2u32.pow(i as u32))
            .collect()
    }
}

/// One page of results from the `latest` endpoint
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub items: Vec<NewsItem>,
    pub next_page: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays_double() {
        let policy = RetryPolicy::default();
        assert_eq!(
            policy.delays(),
            vec![Duration::from_secs(1), Duration::from_secs(2)]
        );

        let policy = RetryPolicy {
            max_retries: 0,
            ..RetryPolicy::default()
        };
        assert!(policy.delays().is_empty());
    }
}
