// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Two layers. [`ValidationError`] is the only thing the ranking engine can
//! return: a structural problem with the input that must be fixed before
//! retrying. [`Error`] wraps it together with the I/O, config and JSON
//! failures that only the loaders and the CLI can hit.
//!
//! Similarity signals never error. Empty or malformed text scores `0.0`.

use std::path::PathBuf;

use thiserror::Error;

/// Input rejected before any scoring work.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("no documents provided")]
    EmptyDocuments,
    #[error("query description is empty")]
    EmptyDescription,
    #[error("threshold {0} is outside [0, 1]")]
    ThresholdOutOfRange(f64),
    #[error("weight `{name}` must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },
    #[error("vocabulary size must be at least 1")]
    InvalidMaxFeatures,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config error: {0}")]
    Config(String),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
