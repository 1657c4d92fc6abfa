use serde::{Deserialize, Serialize};

/// A single headline record as delivered by the NewsData.io `latest` endpoint.
///
/// Every field is optional. Missing values are treated as empty strings by the
/// clustering engine and defaulted when building the article list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "source_id")]
    pub source: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, rename = "pubDate", alias = "published_at")]
    pub pub_date: Option<String>,
}

impl NewsItem {
    /// Convenience constructor used by tests and the offline summarize command.
    pub fn with_title(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Self::default()
        }
    }

    pub fn title_str(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn description_str(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Entry in the article list written next to the summary paragraph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleEntry {
    pub title: String,
    pub link: String,
    pub source: String,
    #[serde(rename = "pubDate")]
    pub pub_date: String,
}

impl From<&NewsItem> for ArticleEntry {
    fn from(item: &NewsItem) -> Self {
        let title = match item.title.as_deref() {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => "Untitled".to_string(),
        };

        Self {
            title,
            link: item.link.clone().unwrap_or_default(),
            source: item.source.clone().unwrap_or_default(),
            pub_date: item.pub_date.clone().unwrap_or_default(),
        }
    }
}

/// Summary paragraph plus the leading articles of the batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Digest {
    pub summary: String,
    pub articles: Vec<ArticleEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_newsdata_record() {
        let raw = r#"{
            "title": "Storm hits coast",
            "description": null,
            "link": "https://example.com/a",
            "source_id": "example",
            "pubDate": "2024-05-01 10:00:00",
            "keywords": ["weather"]
        }"#;
        let item: NewsItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.title.as_deref(), Some("Storm hits coast"));
        assert_eq!(item.description, None);
        assert_eq!(item.source.as_deref(), Some("example"));
        assert_eq!(item.pub_date.as_deref(), Some("2024-05-01 10:00:00"));
    }

    #[test]
    fn test_deserialize_alternate_field_names() {
        let raw = r#"{"title": "x", "source": "wire", "published_at": "yesterday"}"#;
        let item: NewsItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.source.as_deref(), Some("wire"));
        assert_eq!(item.pub_date.as_deref(), Some("yesterday"));
        assert_eq!(item.link, None);
    }

    #[test]
    fn test_article_entry_defaults() {
        let entry = ArticleEntry::from(&NewsItem::default());
        assert_eq!(entry.title, "Untitled");
        assert_eq!(entry.link, "");
        assert_eq!(entry.source, "");
        assert_eq!(entry.pub_date, "");

        let entry = ArticleEntry::from(&NewsItem::with_title(""));
        assert_eq!(entry.title, "Untitled");
    }

    #[test]
    fn test_article_entry_serializes_pub_date_key() {
        let entry = ArticleEntry::from(&NewsItem::with_title("Hello"));
        let value = serde_json::to_value(&entry).unwrap();
        assert!(value.get("pubDate").is_some());
        assert!(value.get("pub_date").is_none());
    }
}
