// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for report accounting.
//!
//! Whatever the batch looks like, every document ends up ranked or listed as
//! a failure, the ranking is sorted, and the qualified count matches the
//! threshold predicate.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use resmatch::{rank, Document, Query, Weights};

#[derive(Arbitrary, Debug)]
struct Input {
    docs: Vec<(String, bool)>,
    description: String,
    keywords: Vec<String>,
    threshold: u8,
}

fuzz_target!(|input: Input| {
    let docs: Vec<Document> = input
        .docs
        .into_iter()
        .take(64)
        .enumerate()
        .map(|(i, (text, ok))| {
            if ok {
                Document::parsed(format!("doc{i}"), text)
            } else {
                Document::failed(format!("doc{i}"), "fuzz failure")
            }
        })
        .collect();
    let query = Query::new("fuzz", input.description).with_keywords(input.keywords);
    let threshold = f64::from(input.threshold) / 255.0;

    let Ok(report) = rank(&docs, &query, threshold, Weights::default()) else {
        // Only structural problems are rejected.
        assert!(docs.is_empty() || query.description.trim().is_empty());
        return;
    };

    assert_eq!(report.valid + report.failed, docs.len());
    assert_eq!(report.ranked.len(), report.valid);
    for pair in report.ranked.windows(2) {
        assert!(pair[0].scores.composite >= pair[1].scores.composite);
    }
    let qualified = report
        .ranked
        .iter()
        .filter(|r| r.scores.composite > 0.0 && r.scores.composite >= threshold)
        .count();
    assert_eq!(report.qualified, qualified);
});
