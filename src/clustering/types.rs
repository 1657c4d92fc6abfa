use std::collections::HashMap;

use crate::types::NewsItem;

/// Token frequency table that remembers the order tokens were first seen.
///
/// Ranking by count is a stable sort over first-insertion order, so equal
/// counts always come back in the order the tokens entered the table.
#[derive(Debug, Clone, Default)]
pub struct TokenCounts {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl TokenCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence for every token, repeats included.
    pub fn update<S: AsRef<str>>(&mut self, tokens: &[S]) {
        for token in tokens {
            let token = token.as_ref();
            match self.counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    self.order.push(token.to_string());
                    self.counts.insert(token.to_string(), 1);
                }
            }
        }
    }

    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The `n` most frequent tokens, highest count first.
    pub fn most_common(&self, n: usize) -> Vec<&str> {
        let mut ranked: Vec<&String> = self.order.iter().collect();
        ranked.sort_by(|a, b| self.get(b).cmp(&self.get(a)));
        ranked.into_iter().take(n).map(String::as_str).collect()
    }

    /// Sum of counts over the given tokens, missing tokens count as zero
    pub fn score<S: AsRef<str>>(&self, tokens: &[S]) -> usize {
        tokens.iter().map(|t| self.get(t.as_ref())).sum()
    }
}

/// A storyline: items grouped by overlapping title vocabulary
#[derive(Debug, Clone)]
pub struct StoryCluster<'a> {
    /// Members in arrival order
    pub members: Vec<&'a NewsItem>,
    /// Token counts accumulated over every member title
    pub token_counts: TokenCounts,
    /// Assigned after clustering by the topic labeler
    pub topic: Option<&'static str>,
}

impl<'a> StoryCluster<'a> {
    /// Starts a singleton cluster from an item and its title tokens
    pub fn seed(item: &'a NewsItem, tokens: &[String]) -> Self {
        let mut token_counts = TokenCounts::new();
        token_counts.update(tokens);
        Self {
            members: vec![item],
            token_counts,
            topic: None,
        }
    }

    pub fn add(&mut self, item: &'a NewsItem, tokens: &[String]) {
        self.members.push(item);
        self.token_counts.update(tokens);
    }

    /// Top-`size` tokens by frequency, used as the comparison target for new items
    pub fn centroid(&self, size: usize) -> Vec<&str> {
        self.token_counts.most_common(size)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn topic_name(&self) -> &'static str {
        self.topic.unwrap_or(crate::text::lexicon::OTHER_TOPIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_common_ties_keep_insertion_order() {
        let mut counts = TokenCounts::new();
        counts.update(&["delta", "alpha", "charlie", "alpha"]);
        counts.update(&["charlie", "bravo"]);
        assert_eq!(
            counts.most_common(10),
            vec!["alpha", "charlie", "delta", "bravo"]
        );
        assert_eq!(counts.most_common(2), vec!["alpha", "charlie"]);
    }

    #[test]
    fn test_score_counts_repeats() {
        let mut counts = TokenCounts::new();
        counts.update(&["storm", "storm", "coast"]);
        assert_eq!(counts.score(&["storm", "coast", "storm", "inland"]), 5);
        assert_eq!(counts.get("inland"), 0);
        assert_eq!(counts.len(), 2);
    }
}
