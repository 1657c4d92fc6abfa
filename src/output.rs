use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::digest::build_digest;
use crate::types::{ArticleEntry, NewsItem};

/// JSON document consumed by the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopNewsPayload {
    pub generated_at_utc: String,
    pub language: String,
    pub category: String,
    pub summary: String,
    pub articles: Vec<ArticleEntry>,
}

impl TopNewsPayload {
    /// Summarizes the batch and stamps it with the current UTC time.
    pub fn build(items: &[NewsItem], language: &str, category: Option<&str>) -> Self {
        let digest = build_digest(items);
        Self {
            generated_at_utc: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false),
            language: language.to_string(),
            category: category.unwrap_or("(all)").to_string(),
            summary: digest.summary,
            articles: digest.articles,
        }
    }
}

/// Writes the summary payload as pretty-printed JSON.
///
/// # Arguments
/// * `items` - The fetched batch
/// * `language` - Language the batch was requested in
/// * `category` - Category filter, `None` for all
/// * `path` - Destination file, parent directories are created
///
/// # Returns
/// * `Ok(TopNewsPayload)` - The payload that was written
/// * `Err` - If the directory or file could not be written
pub fn write_top_news_json(
    items: &[NewsItem],
    language: &str,
    category: Option<&str>,
    path: &Path,
) -> Result<TopNewsPayload> {
    let payload = TopNewsPayload::build(items, language, category);
    write_json(&payload, path)?;
    info!(
        "Wrote {} with {} articles",
        path.display(),
        payload.articles.len()
    );
    Ok(payload)
}

/// Serializes any value as pretty JSON to `path`, creating parent directories.
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Reads a batch from disk: either a bare array of records or a NewsData
/// response object with a `results` array.
pub fn read_items(path: &Path) -> Result<Vec<NewsItem>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_items(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn parse_items(raw: &str) -> Result<Vec<NewsItem>> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let records = match value.get("results") {
        Some(results) => results.clone(),
        None => value,
    };
    Ok(serde_json::from_value(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("newsdigest-{}-{}", name, std::process::id()))
            .join("nested")
            .join("top_news.json")
    }

    #[test]
    fn test_payload_fields() {
        let payload = TopNewsPayload::build(&[], "en", None);
        assert_eq!(payload.category, "(all)");
        assert_eq!(payload.language, "en");
        assert_eq!(payload.summary, "No headlines were available to summarize.");
        assert!(DateTime::parse_from_rfc3339(&payload.generated_at_utc).is_ok());
    }

    #[test]
    fn test_write_creates_directories() {
        let path = temp_path("write");
        let items = vec![NewsItem::with_title("Flood warning issued")];
        let written = write_top_news_json(&items, "en", Some("top"), &path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let read_back: TopNewsPayload = serde_json::from_str(&raw).unwrap();
        assert_eq!(read_back.summary, written.summary);
        assert_eq!(read_back.category, "top");
        assert_eq!(read_back.articles.len(), 1);

        let _ = fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
    }

    #[test]
    fn test_parse_items_shapes() {
        let bare = r#"[{"title": "One"}, {"title": "Two"}]"#;
        assert_eq!(parse_items(bare).unwrap().len(), 2);

        let wrapped = r#"{"status": "success", "results": [{"title": "One"}]}"#;
        let items = parse_items(wrapped).unwrap();
        assert_eq!(items[0].title.as_deref(), Some("One"));

        assert!(parse_items("{\"status\": \"success\"}").is_err());
    }
}
