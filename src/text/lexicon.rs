//! Fixed word lists used by the tokenizer, the low-signal filter and the topic labeler.

use lazy_static::lazy_static;
use std::collections::HashSet;

/// Function words dropped by the tokenizer
pub const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "then", "than", "so", "to", "of", "in", "on",
    "for", "with", "from", "by", "at", "as", "is", "are", "was", "were", "be", "been", "being",
    "this", "that", "these", "those", "it", "its", "into", "over", "under", "about", "across",
    "after", "before", "during", "between", "also", "not", "no", "can", "could", "would",
    "should", "may", "might", "will", "just", "more", "most", "much", "very", "per", "via",
];

pub const SPORTS_WORDS: &[&str] = &[
    "nba", "nfl", "nhl", "mlb", "match", "game", "games", "season", "playoff", "all-star",
    "dunk", "overtime", "quarter", "finals", "championship", "wrestle", "wrestling", "division",
    "scoreboard", "wildcats", "lakers", "nascar", "daytona",
];

pub const LIFESTYLE_LOCAL_WORDS: &[&str] = &[
    "wedding", "weddings", "horoscope", "crossword", "recipe", "recipes", "dining", "travel",
    "scenic", "waterfall", "park", "town", "county", "local", "citizen", "newsletter",
    "obituaries", "health", "scores",
];

pub const FINANCE_TICKER_WORDS: &[&str] = &[
    "nyse", "nasdaq", "etf", "stock", "stocks", "shares", "bond", "bonds", "yield", "earnings",
    "ticker", "short", "interest", "price", "target",
];

/// Topic names and their marker words, in the order the labeler scans them.
pub const TOPIC_LEXICON: &[(&str, &[&str])] = &[
    (
        "Geopolitics & security",
        &["war", "military", "nuclear", "sanctions", "border", "defense", "attack", "navy"],
    ),
    (
        "Elections & governance",
        &["election", "vote", "parliament", "government", "president", "minister", "court", "policy"],
    ),
    (
        "Economy & markets",
        &["inflation", "gdp", "economy", "bank", "interest", "rate", "currency", "trade", "jobs", "markets"],
    ),
    (
        "Tech & AI",
        &["ai", "artificial", "chip", "cyber", "data", "software", "platform"],
    ),
    (
        "Climate & disasters",
        &["climate", "flood", "storm", "drought", "wildfire", "earthquake"],
    ),
    (
        "Public safety & crime",
        &["police", "arrest", "trial", "fraud", "shooting", "crime"],
    ),
];

/// Label given to clusters that share no marker word with any topic
pub const OTHER_TOPIC: &str = "Other";

lazy_static! {
    pub static ref STOPWORD_SET: HashSet<&'static str> = STOPWORDS.iter().copied().collect();
    pub static ref SPORTS: HashSet<&'static str> = SPORTS_WORDS.iter().copied().collect();
    pub static ref LIFESTYLE_LOCAL: HashSet<&'static str> =
        LIFESTYLE_LOCAL_WORDS.iter().copied().collect();
    pub static ref FINANCE_TICKER: HashSet<&'static str> =
        FINANCE_TICKER_WORDS.iter().copied().collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_lexicon_order() {
        let names: Vec<&str> = TOPIC_LEXICON.iter().map(|(name, _)| *name).collect();
        assert_eq!(names[0], "Geopolitics & security");
        assert_eq!(names[5], "Public safety & crime");
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_sets_match_lists() {
        assert_eq!(STOPWORD_SET.len(), STOPWORDS.len());
        assert!(SPORTS.contains("all-star"));
        assert!(LIFESTYLE_LOCAL.contains("county"));
        assert!(FINANCE_TICKER.contains("nasdaq"));
    }
}
