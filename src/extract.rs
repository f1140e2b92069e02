// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Display fields pulled from resume text: email, phone, skills.
//!
//! None of this feeds the score. It fills [`ExtractedFields`] so the report
//! can show who a candidate is next to how well they matched.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::config::DEFAULT_SKILLS;
use crate::types::ExtractedFields;

static EMAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"));

// Tried in order; the first pattern with any match wins.
static PHONES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b",
        r"\(\d{3}\)\s*\d{3}[-.]?\d{4}\b",
        r"\+\d{1,3}\s*\d{3,4}\s*\d{3,4}\s*\d{3,4}",
    ]
    .into_iter()
    .filter_map(compile)
    .collect()
});

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            warn!(pattern, %err, "skipping field pattern");
            None
        }
    }
}

/// Pulls contact details and known skills out of raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldExtractor {
    skills: Vec<String>,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect())
    }
}

impl FieldExtractor {
    pub fn new(skills: Vec<String>) -> Self {
        Self { skills }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn extract(&self, text: &str) -> ExtractedFields {
        ExtractedFields {
            email: extract_email(text),
            phone: extract_phone(text),
            skills: self.extract_skills(text),
        }
    }

    /// Configured skills found in `text`, case-insensitively, as substrings.
    ///
    /// Returned in configuration order, each skill at most once.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        let haystack = text.to_lowercase();
        let mut found: Vec<String> = Vec::new();
        for skill in &self.skills {
            let needle = skill.to_lowercase();
            if needle.is_empty() || found.iter().any(|f| f.to_lowercase() == needle) {
                continue;
            }
            if haystack.contains(&needle) {
                found.push(skill.clone());
            }
        }
        found
    }
}

/// First email address in `text`.
pub fn extract_email(text: &str) -> Option<String> {
    let re = EMAIL.as_ref()?;
    re.find(text).map(|m| m.as_str().to_string())
}

/// First phone number in `text`.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONES
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().to_string())
}
