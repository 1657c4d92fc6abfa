use std::collections::HashSet;
use tracing::debug;

use super::lexicon::{FINANCE_TICKER, LIFESTYLE_LOCAL, SPORTS};
use super::normalizer::tokenize;
use crate::types::NewsItem;
use crate::TARGET_CLUSTERING;

/// Distinct sports words needed to flag an item
const SPORTS_THRESHOLD: usize = 2;
/// Distinct lifestyle/local words needed to flag an item
const LIFESTYLE_THRESHOLD: usize = 2;
/// Distinct finance-ticker words needed to flag an item
const FINANCE_THRESHOLD: usize = 3;

/// Smallest filtered corpus that is used instead of the full batch
pub const MIN_FILTERED_CORPUS: usize = 40;

/// Returns true when the title and description lean heavily on a noise lexicon
/// (sports, lifestyle/local or finance-ticker chatter).
pub fn is_low_signal(title: &str, description: &str) -> bool {
    let tokens = tokenize(&format!("{} {}", title, description));
    let words: HashSet<&str> = tokens.iter().map(String::as_str).collect();

    let overlap = |lexicon: &HashSet<&'static str>| {
        lexicon.iter().filter(|w| words.contains(**w)).count()
    };

    overlap(&*SPORTS) >= SPORTS_THRESHOLD
        || overlap(&*LIFESTYLE_LOCAL) >= LIFESTYLE_THRESHOLD
        || overlap(&*FINANCE_TICKER) >= FINANCE_THRESHOLD
}

/// Picks the items to cluster.
///
/// Low-signal items are dropped when at least [`MIN_FILTERED_CORPUS`] items
/// remain afterwards; smaller batches are clustered unfiltered.
///
/// # Arguments
/// * `items` - The full batch, in arrival order
///
/// # Returns
/// * The corpus as borrowed items, order preserved
pub fn select_corpus(items: &[NewsItem]) -> Vec<&NewsItem> {
    let filtered: Vec<&NewsItem> = items
        .iter()
        .filter(|item| !is_low_signal(item.title_str(), item.description_str()))
        .collect();

    if filtered.len() >= MIN_FILTERED_CORPUS {
        debug!(
            target: TARGET_CLUSTERING,
            "Dropped {} low-signal items, clustering {}",
            items.len() - filtered.len(),
            filtered.len()
        );
        filtered
    } else {
        debug!(
            target: TARGET_CLUSTERING,
            "Filtered corpus too small ({} items), clustering all {}",
            filtered.len(),
            items.len()
        );
        items.iter().collect()
    }
}
