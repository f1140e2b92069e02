// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword coverage: what fraction of the query's keywords appear in the resume.
//!
//! Matching is case-insensitive substring containment on the raw text, not on
//! tokens. `"java"` is found inside `"javascript"`, and multi-word phrases like
//! `"machine learning"` match as written. That is the lexical "does this phrase
//! appear anywhere" check, nothing smarter.

/// Fraction of `keywords` found in `raw_text`.
///
/// Returns `0.0` when either input is empty.
pub fn keyword_coverage<S: AsRef<str>>(raw_text: &str, keywords: &[S]) -> f64 {
    if keywords.is_empty() || raw_text.is_empty() {
        return 0.0;
    }

    let haystack = raw_text.to_lowercase();
    let found = keywords
        .iter()
        .filter(|keyword| haystack.contains(&keyword.as_ref().to_lowercase()))
        .count();

    found as f64 / keywords.len() as f64
}
