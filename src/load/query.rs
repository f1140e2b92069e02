// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result, ValidationError};
use crate::types::Query;

/// Load a job description.
///
/// A `.json` file must carry `description`; `title` and `keywords` are
/// optional. Any other file is plain text: the whole (trimmed) content is the
/// description and the title comes from the file name, so
/// `senior_rust_engineer.txt` becomes "Senior Rust Engineer".
pub fn load_query(path: &Path) -> Result<Query> {
    let raw = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let query = if is_json {
        serde_json::from_str::<Query>(&raw)?
    } else {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Query::new(title_from_stem(&stem), raw.trim())
    };

    if query.description.trim().is_empty() {
        return Err(ValidationError::EmptyDescription.into());
    }
    debug!(
        path = %path.display(),
        title = %query.title,
        keywords = query.keywords.len(),
        "loaded job description"
    );
    Ok(query)
}

fn title_from_stem(stem: &str) -> String {
    stem.replace('_', " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
