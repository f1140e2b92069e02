// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Score fusion: three lexical signals, one composite number.
//!
//! The composite is a plain weighted sum. Nothing is renormalized: if the
//! weights sum to 1 and every signal is in `[0, 1]`, the composite is in
//! `[0, 1]`. Weights that sum to something else are accepted as given and
//! the composite scales with them.
//!
//! # Default weights
//!
//! | Signal  | Weight | What it rewards                                  |
//! |---------|--------|--------------------------------------------------|
//! | tfidf   | 0.4    | Shared vocabulary and phrasing, frequency-aware  |
//! | jaccard | 0.3    | Breadth of overlap, ignoring frequency           |
//! | keyword | 0.3    | Explicit must-have phrases from the job posting  |

use serde::{Deserialize, Serialize};

use super::jaccard::jaccard_tokens;
use super::keyword::keyword_coverage;
use super::tfidf::TfidfVectorizer;
use crate::contracts::check_breakdown_in_range;
use crate::error::ValidationError;
use crate::tokenize::Tokenizer;
use crate::types::{Document, Query, ScoreBreakdown};

// =============================================================================
// DEFAULTS
// =============================================================================

/// Default weight of the TF-IDF cosine signal.
pub const DEFAULT_TFIDF_WEIGHT: f64 = 0.4;

/// Default weight of the Jaccard signal.
pub const DEFAULT_JACCARD_WEIGHT: f64 = 0.3;

/// Default weight of the keyword coverage signal.
pub const DEFAULT_KEYWORD_WEIGHT: f64 = 0.3;

/// Default qualification threshold.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Relative weight of each signal in the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub tfidf: f64,
    pub jaccard: f64,
    pub keyword: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            tfidf: DEFAULT_TFIDF_WEIGHT,
            jaccard: DEFAULT_JACCARD_WEIGHT,
            keyword: DEFAULT_KEYWORD_WEIGHT,
        }
    }
}

impl Weights {
    pub fn new(tfidf: f64, jaccard: f64, keyword: f64) -> Self {
        Self {
            tfidf,
            jaccard,
            keyword,
        }
    }

    pub fn sum(&self) -> f64 {
        self.tfidf + self.jaccard + self.keyword
    }

    /// Every weight must be finite and non-negative. The sum is not checked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, value) in [
            ("tfidf", self.tfidf),
            ("jaccard", self.jaccard),
            ("keyword", self.keyword),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }

    /// Weighted sum of the three signals, returned with the signals themselves.
    #[inline]
    pub fn fuse(&self, tfidf: f64, jaccard: f64, keyword: f64) -> ScoreBreakdown {
        ScoreBreakdown {
            tfidf,
            jaccard,
            keyword,
            composite: self.tfidf * tfidf + self.jaccard * jaccard + self.keyword * keyword,
        }
    }
}

/// A query whose description has already been normalized.
///
/// Ranking scores many documents against one query, so the query side is
/// tokenized once up front.
#[derive(Debug, Clone)]
pub struct PreparedQuery<'q> {
    pub query: &'q Query,
    pub tokens: Vec<String>,
}

/// Scores documents against a query.
///
/// Holds no mutable state; share it by reference across threads.
#[derive(Debug, Clone, Default)]
pub struct SimilarityEngine {
    tokenizer: Tokenizer,
    vectorizer: TfidfVectorizer,
    weights: Weights,
}

impl SimilarityEngine {
    pub fn new(tokenizer: Tokenizer, vectorizer: TfidfVectorizer, weights: Weights) -> Self {
        Self {
            tokenizer,
            vectorizer,
            weights,
        }
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn prepare<'q>(&self, query: &'q Query) -> PreparedQuery<'q> {
        PreparedQuery {
            query,
            tokens: self.tokenizer.normalize(&query.description),
        }
    }

    /// Score one document against one query.
    pub fn score(&self, doc: &Document, query: &Query) -> ScoreBreakdown {
        self.score_prepared(doc, &self.prepare(query))
    }

    /// Score one document against an already-normalized query.
    ///
    /// A document with no text skips all three signals and scores zero.
    pub fn score_prepared(&self, doc: &Document, query: &PreparedQuery<'_>) -> ScoreBreakdown {
        if doc.raw_text.is_empty() {
            return ScoreBreakdown::zero();
        }

        let doc_tokens = self.tokenizer.normalize(&doc.raw_text);
        let tfidf = self.vectorizer.cosine(&doc_tokens, &query.tokens);
        let jaccard = jaccard_tokens(&doc_tokens, &query.tokens);
        let keyword = keyword_coverage(&doc.raw_text, &query.query.keywords);

        let breakdown = self.weights.fuse(tfidf, jaccard, keyword);
        check_breakdown_in_range(&breakdown, &self.weights);
        breakdown
    }
}

/// Score one document with the default tokenizer and vocabulary cap.
pub fn composite(doc: &Document, query: &Query, weights: Weights) -> ScoreBreakdown {
    SimilarityEngine::default()
        .with_weights(weights)
        .score(doc, query)
}
