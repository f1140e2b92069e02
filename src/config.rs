// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Configuration: TOML file, then environment overrides, then validation.
//!
//! Every section is optional. A missing file means defaults.
//!
//! ```toml
//! threshold = 0.3
//! top_n = 10
//!
//! [weights]
//! tfidf = 0.4
//! jaccard = 0.3
//! keyword = 0.3
//!
//! [tokenizer]
//! min_token_len = 3
//! extra_stop_words = ["resume", "curriculum"]
//!
//! [vectorizer]
//! max_features = 1000
//!
//! [skills]
//! keywords = ["rust", "kubernetes"]
//! ```
//!
//! Environment: `RESMATCH_CONFIG` (file path), `RESMATCH_THRESHOLD`,
//! `RESMATCH_MAX_FEATURES`, `RESMATCH_SKILLS` (comma-separated).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result, ValidationError};
use crate::extract::FieldExtractor;
use crate::scoring::tfidf::{TfidfVectorizer, DEFAULT_MAX_FEATURES};
use crate::scoring::{SimilarityEngine, Weights, DEFAULT_THRESHOLD};
use crate::tokenize::{StopWords, Tokenizer, DEFAULT_MIN_TOKEN_LEN};
use crate::types::TOP_CANDIDATES;

/// Skills looked for when no list is configured.
pub const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "django",
    "flask",
    "machine learning",
    "data science",
    "sql",
    "aws",
    "docker",
    "git",
    "agile",
    "scrum",
    "project management",
    "leadership",
];

pub const CONFIG_ENV: &str = "RESMATCH_CONFIG";
pub const THRESHOLD_ENV: &str = "RESMATCH_THRESHOLD";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub threshold: f64,
    /// How many top candidates the CLI lists.
    pub top_n: usize,
    pub weights: Weights,
    pub tokenizer: TokenizerConfig,
    pub vectorizer: VectorizerConfig,
    pub skills: SkillsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            top_n: TOP_CANDIDATES,
            weights: Weights::default(),
            tokenizer: TokenizerConfig::default(),
            vectorizer: VectorizerConfig::default(),
            skills: SkillsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    pub min_token_len: usize,
    /// Replaces the built-in English list when set.
    pub stop_words: Option<Vec<String>>,
    /// Added on top of whichever list is in effect.
    pub extra_stop_words: Vec<String>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            stop_words: None,
            extra_stop_words: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    pub max_features: usize,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    pub keywords: Vec<String>,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load from `explicit_path`, else `RESMATCH_CONFIG`, else defaults.
    /// Environment overrides are applied last, then the result is validated.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        Self::load_with_threshold(explicit_path, None)
    }

    /// Like [`Config::load`], but `threshold` (from the command line) wins over
    /// both the file and `RESMATCH_THRESHOLD`, which is then not read at all.
    pub fn load_with_threshold(explicit_path: Option<&Path>, threshold: Option<f64>) -> Result<Self> {
        Self::resolve(explicit_path, threshold, |key| std::env::var(key).ok())
    }

    fn resolve<F>(explicit_path: Option<&Path>, threshold: Option<f64>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = explicit_path
            .map(PathBuf::from)
            .or_else(|| lookup(CONFIG_ENV).map(PathBuf::from));

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| {
            if threshold.is_some() && key == THRESHOLD_ENV {
                return None;
            }
            lookup(key)
        })?;
        if let Some(t) = threshold {
            config.threshold = t;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
        debug!(path = %path.display(), "loaded config");
        Self::from_toml_str(&raw)
            .map_err(|err| Error::Config(format!("parse config {}: {err}", path.display())))
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|err| Error::Config(err.to_string()))
    }

    /// Apply `RESMATCH_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(THRESHOLD_ENV) {
            self.threshold = parse_env(THRESHOLD_ENV, &value)?;
        }
        if let Some(value) = lookup("RESMATCH_MAX_FEATURES") {
            self.vectorizer.max_features = parse_env("RESMATCH_MAX_FEATURES", &value)?;
        }
        if let Some(value) = lookup("RESMATCH_SKILLS") {
            self.skills.keywords = split_list(&value);
        }
        Ok(())
    }

    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ValidationError::ThresholdOutOfRange(self.threshold));
        }
        self.weights.validate()?;
        if self.vectorizer.max_features == 0 {
            return Err(ValidationError::InvalidMaxFeatures);
        }
        Ok(())
    }

    pub fn tokenizer(&self) -> Tokenizer {
        let mut stop_words = match &self.tokenizer.stop_words {
            Some(words) => StopWords::from_words(words),
            None => StopWords::english(),
        };
        stop_words.extend(&self.tokenizer.extra_stop_words);
        Tokenizer::new(stop_words).with_min_token_len(self.tokenizer.min_token_len)
    }

    /// Build the scoring engine described by this config.
    pub fn engine(&self) -> std::result::Result<SimilarityEngine, ValidationError> {
        self.weights.validate()?;
        let vectorizer = TfidfVectorizer::new(self.vectorizer.max_features)?;
        Ok(SimilarityEngine::new(self.tokenizer(), vectorizer, self.weights))
    }

    pub fn field_extractor(&self) -> FieldExtractor {
        FieldExtractor::new(self.skills.keywords.clone())
    }
}

fn parse_env<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|err| Error::Config(format!("invalid {key} value {value}: {err}")))
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
