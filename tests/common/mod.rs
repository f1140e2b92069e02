//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use std::fs;
use std::path::Path;

use proptest::prelude::*;
use resmatch::MatchReport;

// Re-export canonical test utilities from resmatch::testing
pub use resmatch::testing::{make_doc, make_docs, make_query, make_report, scored};

/// Tolerance for float comparisons.
pub const EPS: f64 = 1e-9;

// ============================================================================
// FIXTURES
// ============================================================================

/// Resume text from the first end-to-end example.
pub const PYTHON_RESUME: &str = "This is a test resume with python and django experience.";

/// Job description from the first end-to-end example.
pub const PYTHON_JOB: &str = "Looking for a Python developer with django experience.";

/// Write `files` (name, contents) into `dir`.
pub fn write_files(dir: &Path, files: &[(&str, &str)]) {
    for (name, contents) in files {
        fs::write(dir.join(name), contents).expect("write fixture");
    }
}

// ============================================================================
// ASSERTIONS
// ============================================================================

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

/// Assert the structural invariants every report must satisfy.
pub fn assert_report_well_formed(report: &MatchReport) {
    assert_eq!(report.valid + report.failed, report.total);
    assert_eq!(report.ranked.len(), report.valid);
    assert_eq!(report.failures.len(), report.failed);
    for pair in report.ranked.windows(2) {
        assert!(pair[0].scores.composite >= pair[1].scores.composite);
    }
    assert_eq!(
        report.qualified,
        report
            .ranked
            .iter()
            .filter(|r| r.qualifies(report.threshold))
            .count()
    );
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Word-like tokens that survive normalization.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9]{2,7}").unwrap()
}

/// Document text built from a small vocabulary so overlap is likely.
pub fn overlapping_text_strategy() -> impl Strategy<Value = String> {
    let vocab = vec![
        "python", "django", "rust", "tokio", "developer", "engineer", "senior", "backend",
        "kubernetes", "docker", "experience", "leadership",
    ];
    prop::collection::vec(prop::sample::select(vocab), 0..12).prop_map(|words| words.join(" "))
}

/// Arbitrary text: words, punctuation, casing, unicode.
pub fn messy_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9 ,.;:!?()'\"\\-éü漢\n\t]{0,80}").unwrap()
}
