use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_COUNT: usize = 60;
pub const MIN_COUNT: usize = 20;
pub const MAX_COUNT: usize = 100;
pub const DEFAULT_OUTPUT_PATH: &str = "data/top_news.json";
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Settings for one fetch-and-summarize run
#[derive(Debug, Clone, PartialEq)]
pub struct NewsConfig {
    pub api_key: String,
    pub language: String,
    pub category: Option<String>,
    pub count: usize,
    pub output_path: PathBuf,
}

impl NewsConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Returns
    /// * `Ok(NewsConfig)` - With defaults applied to every optional variable
    /// * `Err` - If `NEWSDATA_API_KEY` is missing or blank
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds the configuration from any variable lookup, so it can be tested
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("NEWSDATA_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| anyhow!("Missing NEWSDATA_API_KEY environment variable"))?;

        let language = parse_language(lookup("NEWS_LANGUAGE").as_deref());
        let category = parse_category(lookup("NEWS_CATEGORY").as_deref());
        let count = parse_count(lookup("NEWS_N").as_deref());
        let output_path = lookup("NEWS_OUTPUT")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string())
            .into();

        Ok(Self {
            api_key,
            language,
            category,
            count,
            output_path,
        })
    }
}

/// Blank or missing language falls back to English
pub fn parse_language(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(lang) if !lang.is_empty() => lang.to_string(),
        _ => DEFAULT_LANGUAGE.to_string(),
    }
}

/// Blank and "(all)" both mean no category filter
pub fn parse_category(raw: Option<&str>) -> Option<String> {
    match raw.map(str::trim) {
        Some(category) if !category.is_empty() && category != "(all)" => {
            Some(category.to_string())
        }
        _ => None,
    }
}

/// Parses the requested batch size and clamps it to the supported range.
pub fn parse_count(raw: Option<&str>) -> usize {
    let count = match raw {
        Some(value) => value.trim().parse::<i64>().unwrap_or_else(|_| {
            warn!("Invalid NEWS_N value '{}', using {}", value, DEFAULT_COUNT);
            DEFAULT_COUNT as i64
        }),
        None => DEFAULT_COUNT as i64,
    };
    count.clamp(MIN_COUNT as i64, MAX_COUNT as i64) as usize
}

/// Retrieves an environment variable, falling back to a default when unset or blank.
///
/// # Arguments
/// - `var`: The name of the environment variable.
/// - `default`: Value used when the variable is missing.
///
/// # Returns
/// - `String`
pub fn get_env_var_or(var: &str, default: &str) -> String {
    env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = NewsConfig::from_lookup(lookup(&[("NEWSDATA_API_KEY", " abc ")])).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.language, "en");
        assert_eq!(config.category, None);
        assert_eq!(config.count, 60);
        assert_eq!(config.output_path, PathBuf::from("data/top_news.json"));
    }

    #[test]
    fn test_missing_api_key() {
        assert!(NewsConfig::from_lookup(lookup(&[])).is_err());
        assert!(NewsConfig::from_lookup(lookup(&[("NEWSDATA_API_KEY", "  ")])).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = NewsConfig::from_lookup(lookup(&[
            ("NEWSDATA_API_KEY", "abc"),
            ("NEWS_LANGUAGE", "fr"),
            ("NEWS_CATEGORY", "politics"),
            ("NEWS_N", "35"),
            ("NEWS_OUTPUT", "out/news.json"),
        ]))
        .unwrap();
        assert_eq!(config.language, "fr");
        assert_eq!(config.category.as_deref(), Some("politics"));
        assert_eq!(config.count, 35);
        assert_eq!(config.output_path, PathBuf::from("out/news.json"));
    }

    #[test]
    fn test_category_all_means_none() {
        assert_eq!(parse_category(Some("(all)")), None);
        assert_eq!(parse_category(Some("  ")), None);
        assert_eq!(parse_category(Some("science")), Some("science".to_string()));
    }

    #[test]
    fn test_count_clamped() {
        assert_eq!(parse_count(Some("5")), 20);
        assert_eq!(parse_count(Some("500")), 100);
        assert_eq!(parse_count(Some("-3")), 20);
        assert_eq!(parse_count(Some("lots")), 60);
        assert_eq!(parse_count(None), 60);
    }

    #[test]
    fn test_blank_language() {
        assert_eq!(parse_language(Some(" ")), "en");
        assert_eq!(parse_language(None), "en");
    }
}
