// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking: score every document, sort, qualify, summarize.
//!
//! Sort order is composite score descending and nothing else. Ties keep the
//! order the documents came in, so two runs over the same input are
//! byte-identical. There is no secondary key: input order is the tiebreaker.
//!
//! Validation happens before any scoring. A bad query or an empty batch is an
//! error, never a partial report.

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::core::{SimilarityEngine, Weights};
use crate::contracts::check_report_well_formed;
use crate::error::ValidationError;
use crate::types::{
    Document, FailedDocument, MatchReport, Query, RankedResult, ScoreBreakdown, ScoreStatistics,
};

/// Compare two results for ranking: higher composite first.
///
/// Uses `total_cmp`, so a NaN can never panic the sort.
#[inline]
pub fn compare_results(a: &RankedResult, b: &RankedResult) -> Ordering {
    b.scores.composite.total_cmp(&a.scores.composite)
}

/// Stable sort by [`compare_results`]. Equal scores keep their relative order.
pub fn sort_results(results: &mut [RankedResult]) {
    results.sort_by(compare_results);
}

impl ScoreStatistics {
    /// Max, min, mean and median of the nonzero scores.
    ///
    /// The median is the element at index `(n - 1) / 2` of the ascending list:
    /// the lower of the two middle values on even counts, never an average.
    /// Returns `None` when no score is above zero.
    pub fn from_scores(scores: &[f64]) -> Option<Self> {
        let mut nonzero: Vec<f64> = scores.iter().copied().filter(|s| *s > 0.0).collect();
        if nonzero.is_empty() {
            return None;
        }
        nonzero.sort_by(f64::total_cmp);

        let n = nonzero.len();
        let sum: f64 = nonzero.iter().sum();
        Some(Self {
            max: nonzero[n - 1],
            min: nonzero[0],
            mean: sum / n as f64,
            median: nonzero[(n - 1) / 2],
        })
    }
}

fn validate(documents: &[Document], query: &Query, threshold: f64) -> Result<(), ValidationError> {
    if documents.is_empty() {
        return Err(ValidationError::EmptyDocuments);
    }
    if query.description.trim().is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    if !(0.0..=1.0).contains(&threshold) {
        return Err(ValidationError::ThresholdOutOfRange(threshold));
    }
    Ok(())
}

impl SimilarityEngine {
    /// Rank `documents` against `query`.
    ///
    /// Documents that failed extraction are counted and listed in
    /// `failures` but never scored.
    pub fn rank(
        &self,
        documents: &[Document],
        query: &Query,
        threshold: f64,
    ) -> Result<MatchReport, ValidationError> {
        validate(documents, query, threshold)?;
        self.weights().validate()?;

        let (valid, invalid): (Vec<&Document>, Vec<&Document>) =
            documents.iter().partition(|doc| doc.parse_succeeded);

        let prepared = self.prepare(query);
        // collect() preserves input order in both branches
        #[cfg(feature = "parallel")]
        let scores: Vec<ScoreBreakdown> = valid
            .par_iter()
            .map(|doc| self.score_prepared(doc, &prepared))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let scores: Vec<ScoreBreakdown> = valid
            .iter()
            .map(|doc| self.score_prepared(doc, &prepared))
            .collect();

        let mut ranked: Vec<RankedResult> = valid
            .iter()
            .zip(scores)
            .map(|(doc, scores)| RankedResult {
                document: (*doc).clone(),
                scores,
            })
            .collect();
        sort_results(&mut ranked);

        let qualified = ranked.iter().filter(|r| r.qualifies(threshold)).count();
        let composites: Vec<f64> = ranked.iter().map(|r| r.scores.composite).collect();
        let statistics = ScoreStatistics::from_scores(&composites);

        let failures = invalid
            .iter()
            .map(|doc| FailedDocument {
                id: doc.id.clone(),
                error: doc
                    .error
                    .clone()
                    .unwrap_or_else(|| "extraction failed".to_string()),
            })
            .collect();

        let report = MatchReport {
            query: query.clone(),
            total: documents.len(),
            valid: valid.len(),
            failed: invalid.len(),
            qualified,
            threshold,
            ranked,
            failures,
            statistics,
        };
        check_report_well_formed(&report);
        Ok(report)
    }
}

/// Rank with the default tokenizer and vocabulary cap and the given weights.
pub fn rank(
    documents: &[Document],
    query: &Query,
    threshold: f64,
    weights: Weights,
) -> Result<MatchReport, ValidationError> {
    SimilarityEngine::default()
        .with_weights(weights)
        .rank(documents, query, threshold)
}
