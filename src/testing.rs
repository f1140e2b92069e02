//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::scoring::ranking::sort_results;
use crate::types::{Document, MatchReport, Query, RankedResult, ScoreBreakdown, ScoreStatistics};

/// The job description used throughout the test suites.
pub fn make_query() -> Query {
    Query::new(
        "Python Developer",
        "Looking for a Python developer with Django experience",
    )
    .with_keywords(["Python", "Django"])
}

/// A successfully parsed document with no display fields.
pub fn make_doc(id: &str, text: &str) -> Document {
    Document::parsed(id, text)
}

/// Documents `doc0`, `doc1`, ... with the given texts, in order.
pub fn make_docs(texts: &[&str]) -> Vec<Document> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| make_doc(&format!("doc{i}"), text))
        .collect()
}

/// Wrap a document with a composite score and zeroed signals.
pub fn scored(document: Document, composite: f64) -> RankedResult {
    RankedResult {
        document,
        scores: ScoreBreakdown {
            composite,
            ..ScoreBreakdown::zero()
        },
    }
}

/// A consistent report over already-scored results against [`make_query`].
pub fn make_report(mut ranked: Vec<RankedResult>, threshold: f64) -> MatchReport {
    sort_results(&mut ranked);
    let composites: Vec<f64> = ranked.iter().map(|r| r.scores.composite).collect();
    let qualified = ranked.iter().filter(|r| r.qualifies(threshold)).count();
    MatchReport {
        query: make_query(),
        total: ranked.len(),
        valid: ranked.len(),
        failed: 0,
        qualified,
        threshold,
        statistics: ScoreStatistics::from_scores(&composites),
        ranked,
        failures: Vec::new(),
    }
}
