//! Text preparation for headline clustering.
//!
//! Normalization, tokenization and the noise filter that decides which items
//! make it into the clustering corpus. Everything here is pure and works on
//! borrowed strings.

pub mod filter;
pub mod lexicon;
pub mod normalizer;

pub use filter::{is_low_signal, select_corpus, MIN_FILTERED_CORPUS};
pub use normalizer::{normalize, tokenize};
