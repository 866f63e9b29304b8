//! Frequency-based keyword extraction
//!
//! Keywords are lowercase tokens made of `[a-z0-9+#.]` so that terms such as
//! `c++`, `c#` and `node.js` survive normalization. Tokens shorter than the
//! configured minimum length or listed as stop words are dropped, the rest are
//! ranked by frequency with ties broken by first occurrence.
//!
//! Only the top [`MAX_KEYWORDS`] entries of a ranking are kept. Long job
//! postings with more qualifying terms than that lose their tail, which caps
//! the achievable match percentage for them; this truncation is intentional
//! noise reduction and callers should not rely on terms past the cut.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Minimum token length, in characters, for a keyword
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Number of ranked keywords kept per text
pub const MAX_KEYWORDS: usize = 50;

/// Common English function words plus filler that appears in nearly every job
/// posting and carries no signal.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
    "of", "with", "by", "from", "up", "about", "as", "is", "are", "be",
    "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "can", "this", "that",
    "these", "those", "i", "you", "he", "she", "it", "we", "they", "your",
    "our", "their", "what", "which", "who", "when", "where", "why", "how",
    "all", "each", "every", "both", "few", "more", "most", "other", "some",
    "any", "much", "many", "only", "own", "same", "so", "than", "too",
    "very", "just", "such", "no", "not", "nor", "also", "if", "because",
    "while", "although", "after", "before", "during", "through",
    "between", "within", "without",
    // Job posting filler
    "job", "position", "role", "experience", "looking",
];

static DEFAULT_STOP_WORDS: Lazy<HashSet<String>> =
    Lazy::new(|| STOP_WORDS.iter().map(|&s| s.to_string()).collect());

static NON_KEYWORD_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s+#.]").expect("Invalid keyword character regex"));

static DEFAULT_EXTRACTOR: Lazy<KeywordExtractor> = Lazy::new(KeywordExtractor::new);

/// A keyword together with the number of times it occurs in the source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordFrequency {
    pub keyword: String,
    pub count: usize,
}

/// Stateless keyword extractor; safe to share between threads
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    min_length: usize,
    stop_words: HashSet<String>,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            stop_words: (*DEFAULT_STOP_WORDS).clone(),
        }
    }

    /// Create an extractor with a custom length threshold and additional stop
    /// words. Extra stop words are lowercased before being added.
    pub fn with_options<I, S>(min_length: usize, extra_stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stop_words = (*DEFAULT_STOP_WORDS).clone();
        stop_words.extend(
            extra_stop_words
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .filter(|word| !word.is_empty()),
        );

        Self {
            min_length,
            stop_words,
        }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Exact, case-sensitive membership test against the stop-word set
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Rank keywords by descending frequency, ties by first occurrence
    pub fn rank(&self, text: &str) -> Vec<KeywordFrequency> {
        let lowered = text.to_lowercase();
        let cleaned = NON_KEYWORD_CHARS.replace_all(&lowered, " ");

        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut ranking: Vec<(&str, usize)> = Vec::new();

        for token in cleaned.split_whitespace() {
            if token.chars().count() < self.min_length || self.stop_words.contains(token) {
                continue;
            }

            match positions.get(token) {
                Some(&index) => ranking[index].1 += 1,
                None => {
                    positions.insert(token, ranking.len());
                    ranking.push((token, 1));
                }
            }
        }

        // Stable sort keeps first-seen order among equal counts
        ranking.sort_by(|a, b| b.1.cmp(&a.1));
        ranking.truncate(MAX_KEYWORDS);

        debug!(
            "Ranked {} keywords from {} characters of text",
            ranking.len(),
            text.len()
        );

        ranking
            .into_iter()
            .map(|(keyword, count)| KeywordFrequency {
                keyword: keyword.to_string(),
                count,
            })
            .collect()
    }

    /// Extract the ranked keywords without their counts
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.rank(text)
            .into_iter()
            .map(|entry| entry.keyword)
            .collect()
    }
}

/// Extract keywords using the default stop-word set
pub fn extract_keywords(text: &str, min_length: usize) -> Vec<String> {
    if min_length == DEFAULT_MIN_LENGTH {
        DEFAULT_EXTRACTOR.extract(text)
    } else {
        KeywordExtractor::with_options(min_length, std::iter::empty::<&str>()).extract(text)
    }
}
