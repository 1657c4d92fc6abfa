use super::types::{StoryCluster, TokenCounts};
use crate::text::lexicon::{OTHER_TOPIC, TOPIC_LEXICON};

/// Picks the topic whose marker words occur most often in the token counts.
///
/// Topics are scanned in lexicon order and only a strictly higher score
/// replaces the current best, so earlier topics win ties. A table with no
/// marker words at all is labeled "Other".
pub fn label_tokens(counts: &TokenCounts) -> &'static str {
    let mut best_topic = OTHER_TOPIC;
    let mut best_score = 0;

    for &(topic, markers) in TOPIC_LEXICON {
        let score = counts.score(markers);
        if score > best_score {
            best_score = score;
            best_topic = topic;
        }
    }

    best_topic
}

pub fn label_cluster(cluster: &StoryCluster<'_>) -> &'static str {
    label_tokens(&cluster.token_counts)
}

/// Assigns a topic to every cluster in place
pub fn label_clusters(clusters: &mut [StoryCluster<'_>]) {
    for cluster in clusters.iter_mut() {
        cluster.topic = Some(label_cluster(cluster));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(tokens: &[&str]) -> TokenCounts {
        let mut counts = TokenCounts::new();
        counts.update(tokens);
        counts
    }

    #[test]
    fn test_highest_score_wins() {
        let table = counts(&["police", "arrest", "court"]);
        assert_eq!(label_tokens(&table), "Public safety & crime");
    }

    #[test]
    fn test_tie_goes_to_earlier_topic() {
        let table = counts(&["court", "border"]);
        assert_eq!(label_tokens(&table), "Geopolitics & security");
    }

    #[test]
    fn test_repeats_add_weight() {
        let table = counts(&["border", "storm", "storm"]);
        assert_eq!(label_tokens(&table), "Climate & disasters");
    }

    #[test]
    fn test_no_markers_is_other() {
        let table = counts(&["bakery", "award"]);
        assert_eq!(label_tokens(&table), "Other");
        assert_eq!(label_tokens(&TokenCounts::new()), "Other");
    }
}
