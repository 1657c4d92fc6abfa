use std::collections::HashSet;
use tracing::{debug, info};

use super::assignment::cluster_titles;
use super::labeling::label_clusters;
use super::representative::representative_title;
use super::types::StoryCluster;
use super::MAX_STORYLINES;
use crate::text::select_corpus;
use crate::types::NewsItem;
use crate::TARGET_CLUSTERING;

pub const NO_HEADLINES: &str = "No headlines were available to summarize.";
pub const INSUFFICIENT_SIGNAL: &str = "Insufficient signal to produce a coherent summary.";
pub const FILLER_LINE: &str = "Other: Additional headlines are mixed and do not cluster cleanly.";

const OPENING: &str = "The current headlines point to several parallel developments.";
const CLOSING: &str = "Taken together, the feed reflects a dispersed news cycle rather than a single dominant global event.";

/// Builds the summary paragraph for a batch of headlines.
///
/// This function:
/// 1. Selects the clustering corpus, dropping low-signal items in large batches
/// 2. Clusters titles into storylines
/// 3. Labels each storyline with a topic
/// 4. Renders up to three storylines into a fixed template
///
/// # Arguments
/// * `items` - The batch, in arrival order
///
/// # Returns
/// * The paragraph, or a fixed fallback sentence for empty or signal-free batches
pub fn build_clean_paragraph(items: &[NewsItem]) -> String {
    if items.is_empty() {
        return NO_HEADLINES.to_string();
    }

    let corpus = select_corpus(items);
    let mut clusters = cluster_titles(corpus);
    if clusters.is_empty() {
        info!(target: TARGET_CLUSTERING, "No clusterable titles among {} items", items.len());
        return INSUFFICIENT_SIGNAL.to_string();
    }

    label_clusters(&mut clusters);
    compose_paragraph(&clusters)
}

/// Chooses up to three storylines, preferring distinct topics.
///
/// When the clusters carry fewer than three distinct topics the three largest
/// clusters are used instead, repeats allowed.
pub fn choose_storylines<'c, 'a>(clusters: &'c [StoryCluster<'a>]) -> Vec<&'c StoryCluster<'a>> {
    let mut chosen = Vec::new();
    let mut seen = HashSet::new();
    for cluster in clusters {
        if seen.insert(cluster.topic_name()) {
            chosen.push(cluster);
        }
        if chosen.len() == MAX_STORYLINES {
            break;
        }
    }

    if chosen.len() < MAX_STORYLINES {
        chosen = clusters.iter().take(MAX_STORYLINES).collect();
    }
    chosen
}

/// Renders labeled clusters into the summary paragraph.
pub fn compose_paragraph(clusters: &[StoryCluster<'_>]) -> String {
    let mut lines: Vec<String> = choose_storylines(clusters)
        .into_iter()
        .filter_map(|cluster| {
            let title = representative_title(cluster);
            (!title.is_empty()).then(|| format!("{}: {}", cluster.topic_name(), title))
        })
        .collect();

    while lines.len() < MAX_STORYLINES {
        lines.push(FILLER_LINE.to_string());
    }

    debug!(target: TARGET_CLUSTERING, "Storylines: {:?}", lines);

    format!(
        "{} {}. {}. {}. {}",
        OPENING, lines[0], lines[1], lines[2], CLOSING
    )
}
