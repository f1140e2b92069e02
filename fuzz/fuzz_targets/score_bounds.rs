// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for signal ranges.
//!
//! Every signal must be finite and inside [0, 1] for any pair of texts and
//! any keyword list, and scoring the same pair twice must agree exactly.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use resmatch::{composite, Document, Query, Weights};

#[derive(Arbitrary, Debug)]
struct Input {
    doc: String,
    query: String,
    keywords: Vec<String>,
}

fuzz_target!(|input: Input| {
    let doc = Document::parsed("fuzz", input.doc);
    let query = Query::new("fuzz", input.query).with_keywords(input.keywords);

    let first = composite(&doc, &query, Weights::default());
    let second = composite(&doc, &query, Weights::default());
    assert_eq!(first, second);

    for value in [first.tfidf, first.jaccard, first.keyword] {
        assert!(value.is_finite());
        assert!((0.0..=1.0).contains(&value), "signal {value} out of range");
    }
    assert!(first.composite >= 0.0 && first.composite <= 1.0 + 1e-9);
});
