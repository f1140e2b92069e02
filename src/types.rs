// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The values that flow through a ranking run.
//!
//! Every type here is a plain value: built once, never mutated by the engine,
//! and owned by the run that produced it. Nothing is shared across calls.
//!
//! | Type              | Built by                 | Purpose                               |
//! |-------------------|--------------------------|---------------------------------------|
//! | `Document`        | text-extraction caller   | One candidate resume                  |
//! | `Query`           | query-loading caller     | The job description being matched     |
//! | `ScoreBreakdown`  | `SimilarityEngine`       | Three signals plus the fused score    |
//! | `RankedResult`    | `rank`                   | Document paired with its scores       |
//! | `MatchReport`     | `rank`                   | Sorted results, counts and statistics |
//!
//! # Invariants
//!
//! - **MatchReport**: `valid + failed == total`. Every input document is either
//!   scored or reported as a failure, never both and never dropped.
//!
//! - **MatchReport**: `ranked` is sorted descending by composite score. Equal
//!   scores keep their input order, so two identical runs give identical output.
//!
//! - **MatchReport**: `qualified` counts results passing [`RankedResult::qualifies`].
//!   It is a predicate count, not a truncation point.
//!
//! - **ScoreStatistics**: computed over nonzero composite scores only, and
//!   absent when there are none.
//!
//! `contracts::check_report_well_formed` asserts all of the above in debug builds.

use serde::{Deserialize, Serialize};

/// How many qualified results `MatchReport::top_candidates` returns.
pub const TOP_CANDIDATES: usize = 10;

/// Title used when a query arrives without one.
pub const DEFAULT_QUERY_TITLE: &str = "Unknown Position";

/// Fields pulled out of the resume text for display.
///
/// Scoring never looks at these. They ride along so reports can show contact
/// details and skills next to the score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFields {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// A candidate document, usually one resume file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Filename or other caller-chosen identifier.
    pub id: String,
    /// Best-effort UTF-8 text. May be empty.
    #[serde(default)]
    pub raw_text: String,
    #[serde(default)]
    pub fields: ExtractedFields,
    pub parse_succeeded: bool,
    /// Why extraction failed, when `parse_succeeded` is false.
    #[serde(default)]
    pub error: Option<String>,
}

impl Document {
    /// A successfully extracted document with no display fields.
    pub fn parsed(id: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            raw_text: raw_text.into(),
            fields: ExtractedFields::default(),
            parse_succeeded: true,
            error: None,
        }
    }

    /// A document whose text could not be extracted.
    pub fn failed(id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            raw_text: String::new(),
            fields: ExtractedFields::default(),
            parse_succeeded: false,
            error: Some(error.into()),
        }
    }

    pub fn with_fields(mut self, fields: ExtractedFields) -> Self {
        self.fields = fields;
        self
    }
}

fn default_title() -> String {
    DEFAULT_QUERY_TITLE.to_string()
}

/// The job description every document is ranked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    #[serde(default = "default_title")]
    pub title: String,
    /// Must be non-empty; `rank` rejects the query otherwise.
    pub description: String,
    /// Phrases checked by keyword coverage, in caller order.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Query {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            keywords: Vec::new(),
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// Per-signal scores for one (document, query) pair.
///
/// Each signal lies in `[0, 1]`. `composite` is their weighted sum, which stays
/// in `[0, 1]` only when the weights sum to 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub tfidf: f64,
    pub jaccard: f64,
    pub keyword: f64,
    pub composite: f64,
}

impl ScoreBreakdown {
    pub const fn zero() -> Self {
        Self {
            tfidf: 0.0,
            jaccard: 0.0,
            keyword: 0.0,
            composite: 0.0,
        }
    }

    /// Reaches `threshold` with a nonzero composite.
    ///
    /// A document sharing nothing with the query never qualifies, even at a
    /// threshold of zero.
    #[inline]
    pub fn qualifies(&self, threshold: f64) -> bool {
        self.composite > 0.0 && self.composite >= threshold
    }
}

/// A scored document. Its rank is its position in `MatchReport::ranked`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult {
    #[serde(flatten)]
    pub document: Document,
    pub scores: ScoreBreakdown,
}

impl RankedResult {
    /// See [`ScoreBreakdown::qualifies`].
    #[inline]
    pub fn qualifies(&self, threshold: f64) -> bool {
        self.scores.qualifies(threshold)
    }
}

/// A document that was excluded from ranking because extraction failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedDocument {
    pub id: String,
    pub error: String,
}

/// Summary of the nonzero composite scores in a report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreStatistics {
    pub max: f64,
    pub min: f64,
    pub mean: f64,
    /// Lower-middle element of the ascending scores, not an average.
    pub median: f64,
}

/// Everything one ranking run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub query: Query,
    pub total: usize,
    pub valid: usize,
    pub failed: usize,
    pub qualified: usize,
    pub threshold: f64,
    pub ranked: Vec<RankedResult>,
    #[serde(default)]
    pub failures: Vec<FailedDocument>,
    #[serde(default)]
    pub statistics: Option<ScoreStatistics>,
}

impl MatchReport {
    /// Ranked results that pass the threshold, in rank order.
    pub fn qualified_results(&self) -> impl Iterator<Item = &RankedResult> {
        let threshold = self.threshold;
        self.ranked.iter().filter(move |r| r.qualifies(threshold))
    }

    /// The first [`TOP_CANDIDATES`] qualified results.
    pub fn top_candidates(&self) -> Vec<&RankedResult> {
        self.qualified_results().take(TOP_CANDIDATES).collect()
    }
}
