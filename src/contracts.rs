// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for scores and reports.
//!
//! Debug-mode assertions that check the invariants documented in `types`.
//! They compile to nothing in release builds, and they fire the moment a
//! regression produces an out-of-range score or a misordered report instead
//! of three layers later in a CSV.
//!
//! | Contract                     | Invariant                                             |
//! |------------------------------|-------------------------------------------------------|
//! | `check_breakdown_in_range`   | each signal in `[0, 1]`; composite in `[0, Σw]`       |
//! | `check_ranked_sorted`        | composite descending                                  |
//! | `check_report_well_formed`   | counts add up, qualified matches predicate, stats     |

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

/// Default weights sum to 1, so default composites stay in `[0, 1]`.
const _: () = {
    use crate::scoring::{DEFAULT_JACCARD_WEIGHT, DEFAULT_KEYWORD_WEIGHT, DEFAULT_TFIDF_WEIGHT};
    const SUM: f64 = DEFAULT_TFIDF_WEIGHT + DEFAULT_JACCARD_WEIGHT + DEFAULT_KEYWORD_WEIGHT;
    assert!(SUM > 1.0 - 1e-9 && SUM < 1.0 + 1e-9);
};

use crate::scoring::Weights;
use crate::types::{MatchReport, RankedResult, ScoreBreakdown};

/// Tolerance for floating-point comparisons in contracts.
const EPSILON: f64 = 1e-9;

#[inline]
fn in_unit_range(value: f64) -> bool {
    (0.0..=1.0 + EPSILON).contains(&value)
}

// ============================================================================
// SCORE CONTRACTS
// ============================================================================

/// Check that every signal lies in `[0, 1]` and the composite in `[0, sum(weights)]`.
#[inline]
pub fn check_breakdown_in_range(breakdown: &ScoreBreakdown, weights: &Weights) {
    debug_assert!(
        in_unit_range(breakdown.tfidf),
        "Contract violation: tfidf {} outside [0, 1]",
        breakdown.tfidf
    );
    debug_assert!(
        in_unit_range(breakdown.jaccard),
        "Contract violation: jaccard {} outside [0, 1]",
        breakdown.jaccard
    );
    debug_assert!(
        in_unit_range(breakdown.keyword),
        "Contract violation: keyword {} outside [0, 1]",
        breakdown.keyword
    );
    debug_assert!(
        breakdown.composite >= 0.0 && breakdown.composite <= weights.sum() + EPSILON,
        "Contract violation: composite {} outside [0, {}]",
        breakdown.composite,
        weights.sum()
    );
}

// ============================================================================
// REPORT CONTRACTS
// ============================================================================

/// Check that results are sorted by composite score, descending.
#[inline]
pub fn check_ranked_sorted(ranked: &[RankedResult]) {
    for (i, pair) in ranked.windows(2).enumerate() {
        debug_assert!(
            pair[0].scores.composite >= pair[1].scores.composite,
            "Contract violation: ranked[{}] composite {} < ranked[{}] composite {}",
            i,
            pair[0].scores.composite,
            i + 1,
            pair[1].scores.composite
        );
    }
}

/// Check the structural invariants of a finished report.
#[inline]
pub fn check_report_well_formed(report: &MatchReport) {
    debug_assert_eq!(
        report.valid + report.failed,
        report.total,
        "Contract violation: valid {} + failed {} != total {}",
        report.valid,
        report.failed,
        report.total
    );
    debug_assert_eq!(
        report.ranked.len(),
        report.valid,
        "Contract violation: ranked.len() {} != valid {}",
        report.ranked.len(),
        report.valid
    );
    debug_assert_eq!(
        report.failures.len(),
        report.failed,
        "Contract violation: failures.len() {} != failed {}",
        report.failures.len(),
        report.failed
    );
    debug_assert_eq!(
        report.qualified,
        report.qualified_results().count(),
        "Contract violation: qualified count does not match threshold predicate"
    );
    debug_assert_eq!(
        report.statistics.is_some(),
        report.ranked.iter().any(|r| r.scores.composite > 0.0),
        "Contract violation: statistics present iff some composite > 0"
    );
    check_ranked_sorted(&report.ranked);
}
