use tracing::info;

use crate::clustering::build_clean_paragraph;
use crate::types::{ArticleEntry, Digest, NewsItem};
use crate::TARGET_CLUSTERING;

/// Number of articles listed beneath the summary
pub const MAX_ARTICLES: usize = 10;

/// Builds the summary paragraph and article list for one batch.
///
/// The article list is the first [`MAX_ARTICLES`] input items in their
/// original order, with missing fields defaulted. It is taken from the full
/// batch, not the filtered clustering corpus.
pub fn build_digest(items: &[NewsItem]) -> Digest {
    let summary = build_clean_paragraph(items);
    let articles: Vec<ArticleEntry> = items
        .iter()
        .take(MAX_ARTICLES)
        .map(ArticleEntry::from)
        .collect();

    info!(
        target: TARGET_CLUSTERING,
        "Built digest from {} items with {} articles",
        items.len(),
        articles.len()
    );

    Digest { summary, articles }
}
