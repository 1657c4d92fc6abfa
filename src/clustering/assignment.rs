use std::collections::HashSet;
use tracing::{debug, trace};

use super::types::StoryCluster;
use super::{CENTROID_SIZE, MIN_CLUSTER_SIMILARITY};
use crate::text::tokenize;
use crate::types::NewsItem;
use crate::TARGET_CLUSTERING;

/// Tunables for the greedy clustering pass
#[derive(Debug, Clone, Copy)]
pub struct ClusterOptions {
    /// Minimum Jaccard similarity for joining an existing cluster
    pub similarity_threshold: f64,
    /// Number of top tokens that make up a cluster centroid
    pub centroid_size: usize,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            similarity_threshold: MIN_CLUSTER_SIMILARITY,
            centroid_size: CENTROID_SIZE,
        }
    }
}

/// Jaccard similarity of two token lists, compared as sets.
///
/// Returns 0.0 when either side is empty.
pub fn jaccard<A: AsRef<str>, B: AsRef<str>>(a: &[A], b: &[B]) -> f64 {
    let a: HashSet<&str> = a.iter().map(AsRef::as_ref).collect();
    let b: HashSet<&str> = b.iter().map(AsRef::as_ref).collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(&b).count();
    let union = a.union(&b).count();
    intersection as f64 / union as f64
}

/// Groups items into storyline clusters with the default options.
pub fn cluster_titles<'a, I>(items: I) -> Vec<StoryCluster<'a>>
where
    I: IntoIterator<Item = &'a NewsItem>,
{
    cluster_titles_with(items, ClusterOptions::default())
}

/// Greedy single-pass clustering over item titles.
///
/// This function:
/// 1. Skips items whose title is blank or tokenizes to nothing
/// 2. Compares the title tokens with every cluster centroid
/// 3. Joins the most similar cluster if it clears the threshold
/// 4. Otherwise starts a new cluster
///
/// Items are processed in order and the first cluster wins ties, so the result
/// depends on arrival order. Clusters come back sorted by size, largest first,
/// with equal sizes kept in creation order.
///
/// # Arguments
/// * `items` - Items to cluster, in arrival order
/// * `options` - Similarity threshold and centroid size
///
/// # Returns
/// * The clusters, topics not yet assigned
pub fn cluster_titles_with<'a, I>(items: I, options: ClusterOptions) -> Vec<StoryCluster<'a>>
where
    I: IntoIterator<Item = &'a NewsItem>,
{
    let mut clusters: Vec<StoryCluster<'a>> = Vec::new();

    for item in items {
        let title = item.title_str().trim();
        if title.is_empty() {
            continue;
        }
        let tokens = tokenize(title);
        if tokens.is_empty() {
            trace!(target: TARGET_CLUSTERING, "No usable tokens in title: {}", title);
            continue;
        }

        let mut best: Option<usize> = None;
        let mut best_similarity = 0.0;
        for (index, cluster) in clusters.iter().enumerate() {
            let similarity = jaccard(&tokens, &cluster.centroid(options.centroid_size));
            if similarity > best_similarity {
                best_similarity = similarity;
                best = Some(index);
            }
        }

        match best {
            Some(index) if best_similarity >= options.similarity_threshold => {
                trace!(
                    target: TARGET_CLUSTERING,
                    "Assigning '{}' to cluster {} (similarity {:.3})",
                    title,
                    index,
                    best_similarity
                );
                clusters[index].add(item, &tokens);
            }
            _ => clusters.push(StoryCluster::seed(item, &tokens)),
        }
    }

    clusters.sort_by(|a, b| b.len().cmp(&a.len()));

    debug!(
        target: TARGET_CLUSTERING,
        "Formed {} clusters, largest has {} items",
        clusters.len(),
        clusters.first().map_or(0, StoryCluster::len)
    );

    clusters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jaccard_is_set_based() {
        assert_eq!(jaccard(&["storm", "storm", "coast"], &["storm", "coast"]), 1.0);
        assert_eq!(jaccard(&["storm", "coast"], &["storm", "inland"]), 1.0 / 3.0);
    }

    #[test]
    fn test_jaccard_empty_side() {
        let empty: [&str; 0] = [];
        assert_eq!(jaccard(&empty, &["storm"]), 0.0);
        assert_eq!(jaccard(&["storm"], &empty), 0.0);
        assert_eq!(jaccard(&empty, &empty), 0.0);
    }
}
