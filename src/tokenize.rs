// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization: the foundation every similarity signal stands on.
//!
//! Any drift here silently moves every score. The rules are fixed:
//!
//! 1. Lowercase
//! 2. Replace every character outside `[a-z0-9]` with a space
//! 3. Split on whitespace
//! 4. Drop tokens shorter than `min_token_len` and stop words
//!
//! Accented letters are not folded: `"café"` becomes `"caf"`. The stop-word
//! set is a value handed to the [`Tokenizer`], never a global, so deployments
//! and tests can swap it.

use std::collections::HashSet;

/// Tokens shorter than this are dropped (so length <= 2 never survives).
pub const DEFAULT_MIN_TOKEN_LEN: usize = 3;

/// Common English function words.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "couldn", "did", "didn", "do", "does", "doesn", "doing",
    "don", "down", "during", "each", "few", "for", "from", "further", "had", "hadn", "has",
    "hasn", "have", "haven", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "if", "in", "into", "is", "isn", "it", "its", "itself", "just",
    "ll", "ma", "me", "mightn", "more", "most", "mustn", "my", "myself", "needn", "no", "nor",
    "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours",
    "ourselves", "out", "over", "own", "re", "same", "shan", "she", "should", "shouldn", "so",
    "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "ve", "very", "was", "wasn", "we", "were", "weren", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "won", "wouldn", "you", "your", "yours",
    "yourself", "yourselves",
];

/// A set of words removed during normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The default English list.
    pub fn english() -> Self {
        Self::from_words(ENGLISH_STOP_WORDS.iter().copied())
    }

    /// No stop words at all.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Build a set from arbitrary words. Entries are lowercased so they match
    /// normalized tokens.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}

/// Normalizes text into the token stream every signal consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    stop_words: StopWords,
    min_token_len: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(StopWords::english())
    }
}

impl Tokenizer {
    pub fn new(stop_words: StopWords) -> Self {
        Self {
            stop_words,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
        }
    }

    pub fn with_min_token_len(mut self, min_token_len: usize) -> Self {
        self.min_token_len = min_token_len;
        self
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn min_token_len(&self) -> usize {
        self.min_token_len
    }

    /// Lowercase, strip to `[a-z0-9]`, split, and filter.
    ///
    /// Empty input yields an empty vector.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_lowercase() || c.is_ascii_digit() {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        cleaned
            .split_whitespace()
            .filter(|token| token.len() >= self.min_token_len && !self.stop_words.contains(token))
            .map(str::to_string)
            .collect()
    }
}

/// Normalize with the default English tokenizer.
pub fn normalize(text: &str) -> Vec<String> {
    Tokenizer::default().normalize(text)
}

/// Join tokens back into text, one space apart.
pub fn tokens_to_text(tokens: &[String]) -> String {
    tokens.join(" ")
}
