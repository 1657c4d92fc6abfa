use once_cell::sync::Lazy;
use regex::Regex;

use super::lexicon::STOPWORD_SET;

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());
static PAREN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)").unwrap());
static DISALLOWED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Lowercase free text and strip URLs, parenthetical asides and punctuation.
///
/// Hyphens and digits survive; every other non-alphanumeric character becomes a
/// space and whitespace runs collapse to a single space.
pub fn normalize(text: &str) -> String {
    let text = text.to_lowercase();
    let text = URL_RE.replace_all(&text, " ");
    let text = PAREN_RE.replace_all(&text, " ");
    let text = DISALLOWED_RE.replace_all(&text, " ");
    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}

/// Split text into content words, preserving order and repeats.
///
/// Drops stopwords, words of two characters or fewer, and all-digit tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|w| is_content_word(w))
        .map(str::to_string)
        .collect()
}

fn is_content_word(word: &str) -> bool {
    !STOPWORD_SET.contains(word)
        && word.chars().count() > 2
        && !word.chars().all(|c| c.is_ascii_digit())
}
