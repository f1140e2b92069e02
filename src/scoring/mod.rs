// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how a resume gets its number.
//!
//! Three independent signals, each in `[0, 1]`, each degrading to `0.0` on
//! empty input instead of failing:
//!
//! - `tfidf`: cosine of TF-IDF vectors over unigrams and bigrams
//! - `jaccard`: overlap of distinct tokens
//! - `keyword`: fraction of the query's keywords present in the raw text
//!
//! `core` fuses them with [`Weights`]; `ranking` applies that to a batch and
//! sorts. Nothing in here does I/O or logs.

mod core;
pub mod jaccard;
pub mod keyword;
pub mod ranking;
pub mod tfidf;

pub use self::core::*;
