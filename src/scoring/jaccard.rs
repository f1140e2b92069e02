// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Jaccard similarity over normalized token sets.

use std::collections::HashSet;

use crate::tokenize::Tokenizer;

/// `|A ∩ B| / |A ∪ B|` over the distinct tokens of each side.
///
/// Returns `0.0` if either side has no tokens. When both are non-empty the
/// union is too, so there is no division by zero.
pub fn jaccard_tokens(doc_tokens: &[String], query_tokens: &[String]) -> f64 {
    let doc: HashSet<&str> = doc_tokens.iter().map(String::as_str).collect();
    let query: HashSet<&str> = query_tokens.iter().map(String::as_str).collect();

    if doc.is_empty() || query.is_empty() {
        return 0.0;
    }

    let intersection = doc.intersection(&query).count();
    let union = doc.len() + query.len() - intersection;
    intersection as f64 / union as f64
}

/// Jaccard between raw texts using the default tokenizer.
pub fn jaccard(doc_text: &str, query_text: &str) -> f64 {
    let tokenizer = Tokenizer::default();
    jaccard_tokens(&tokenizer.normalize(doc_text), &tokenizer.normalize(query_text))
}
