// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TF-IDF cosine over a two-document corpus.
//!
//! The corpus is exactly the candidate and the query, so IDF can only take two
//! values: terms in both documents get `ln(3/3) + 1 = 1.0`, terms in one get
//! `ln(3/2) + 1 ≈ 1.405`. Shared vocabulary is down-weighted relative to what
//! makes each side distinctive, and the cosine measures how much of the
//! weighted mass still lines up.
//!
//! # Algorithm
//!
//! 1. Terms are unigrams plus bigrams of consecutive normalized tokens
//! 2. Keep the `max_features` most frequent terms across both documents.
//!    Equal counts go to the term that appears earliest in either document,
//!    then to the lexicographically smaller term
//! 3. tf = raw count, idf = `ln((1 + N) / (1 + df)) + 1` with N = 2
//! 4. cosine = `a·b / (‖a‖‖b‖)`, clamped to `[0, 1]`
//!
//! Neither the cap nor the summation depends on which side is the candidate:
//! kept terms are laid out in lexicographic order before summing, so swapping
//! the arguments produces bit-identical results.

use std::collections::HashMap;

use crate::error::ValidationError;
use crate::tokenize::Tokenizer;

/// Default vocabulary cap.
pub const DEFAULT_MAX_FEATURES: usize = 1000;

/// Number of documents in the corpus: the candidate and the query.
const CORPUS_SIZE: f64 = 2.0;

#[derive(Debug, Clone, Copy)]
struct TermStat {
    count: u32,
    /// Rank among this document's distinct terms, unigrams before bigrams.
    first_seen: usize,
}

/// Term counts for one document.
struct TermCounts {
    terms: HashMap<String, TermStat>,
}

impl TermCounts {
    fn from_tokens(tokens: &[String]) -> Self {
        let mut terms: HashMap<String, TermStat> = HashMap::new();

        let unigrams = tokens.iter().cloned();
        let bigrams = tokens.windows(2).map(|pair| format!("{} {}", pair[0], pair[1]));

        for term in unigrams.chain(bigrams) {
            let first_seen = terms.len();
            terms
                .entry(term)
                .or_insert(TermStat {
                    count: 0,
                    first_seen,
                })
                .count += 1;
        }

        Self { terms }
    }

    #[inline]
    fn count(&self, term: &str) -> u32 {
        self.terms.get(term).map_or(0, |stat| stat.count)
    }
}

/// Smoothed inverse document frequency.
#[inline]
pub fn smoothed_idf(df: u32) -> f64 {
    ((1.0 + CORPUS_SIZE) / (1.0 + f64::from(df))).ln() + 1.0
}

/// Builds TF-IDF vectors for a candidate/query pair and compares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TfidfVectorizer {
    max_features: usize,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
        }
    }
}

impl TfidfVectorizer {
    pub fn new(max_features: usize) -> Result<Self, ValidationError> {
        if max_features == 0 {
            return Err(ValidationError::InvalidMaxFeatures);
        }
        Ok(Self { max_features })
    }

    pub fn max_features(&self) -> usize {
        self.max_features
    }

    /// Cosine similarity between two normalized token streams.
    ///
    /// Returns `0.0` if either stream is empty.
    pub fn cosine(&self, doc_tokens: &[String], query_tokens: &[String]) -> f64 {
        if doc_tokens.is_empty() || query_tokens.is_empty() {
            return 0.0;
        }

        let doc = TermCounts::from_tokens(doc_tokens);
        let query = TermCounts::from_tokens(query_tokens);
        let vocabulary = self.vocabulary(&doc, &query);

        let mut dot = 0.0;
        let mut doc_norm_sq = 0.0;
        let mut query_norm_sq = 0.0;

        for term in &vocabulary {
            let doc_tf = doc.count(term);
            let query_tf = query.count(term);
            let df = u32::from(doc_tf > 0) + u32::from(query_tf > 0);
            let idf = smoothed_idf(df);

            let a = f64::from(doc_tf) * idf;
            let b = f64::from(query_tf) * idf;
            dot += a * b;
            doc_norm_sq += a * a;
            query_norm_sq += b * b;
        }

        if doc_norm_sq == 0.0 || query_norm_sq == 0.0 {
            return 0.0;
        }

        let similarity = dot / (doc_norm_sq.sqrt() * query_norm_sq.sqrt());
        similarity.clamp(0.0, 1.0)
    }

    /// Select the vocabulary: top `max_features` terms by combined count,
    /// returned in lexicographic order.
    ///
    /// Count ties go to the term seen earliest in either document, then to the
    /// smaller term. Both keys treat the two documents alike, so the selection
    /// is the same whichever side is passed first, and a long candidate cannot
    /// crowd the query's own terms out just by being listed first.
    fn vocabulary<'a>(&self, doc: &'a TermCounts, query: &'a TermCounts) -> Vec<&'a str> {
        // (term, corpus frequency, earliest first-seen rank)
        let mut candidates: Vec<(&str, u32, usize)> =
            Vec::with_capacity(doc.terms.len() + query.terms.len());
        for (term, stat) in &doc.terms {
            let (count, first_seen) = match query.terms.get(term) {
                Some(other) => (stat.count + other.count, stat.first_seen.min(other.first_seen)),
                None => (stat.count, stat.first_seen),
            };
            candidates.push((term.as_str(), count, first_seen));
        }
        for (term, stat) in &query.terms {
            if !doc.terms.contains_key(term) {
                candidates.push((term.as_str(), stat.count, stat.first_seen));
            }
        }

        if candidates.len() > self.max_features {
            candidates.sort_unstable_by(|a, b| {
                b.1.cmp(&a.1).then(a.2.cmp(&b.2)).then(a.0.cmp(b.0))
            });
            candidates.truncate(self.max_features);
        }

        let mut terms: Vec<&str> = candidates.into_iter().map(|(term, ..)| term).collect();
        terms.sort_unstable();
        terms
    }
}

/// TF-IDF cosine between raw texts using the default tokenizer and vocabulary cap.
pub fn tfidf_cosine(doc_text: &str, query_text: &str) -> f64 {
    let tokenizer = Tokenizer::default();
    TfidfVectorizer::default().cosine(&tokenizer.normalize(doc_text), &tokenizer.normalize(query_text))
}
