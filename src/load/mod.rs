// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading resumes and job descriptions from disk.
//!
//! Resumes are plain-text files in one directory. Each file becomes exactly
//! one [`Document`]; a file that can't be read or holds no text becomes a
//! failed document instead of aborting the batch, so the report can say which
//! files were skipped and why. Only a missing or unreadable directory is an
//! error.
//!
//! Files are read in parallel with rayon when the `parallel` feature is on.
//! The result is always in file-name order, whatever order the threads
//! finish in.

mod query;

pub use query::load_query;

use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::extract::FieldExtractor;
use crate::types::Document;

/// File extensions treated as resumes.
pub const RESUME_EXTENSIONS: &[&str] = &["txt", "md"];

fn is_resume_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                RESUME_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
}

/// Resume files in `dir`, sorted by file name.
pub fn list_resume_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|err| Error::io(dir, err))?;
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|err| Error::io(dir, err))?.path();
        if is_resume_file(&path) {
            paths.push(path);
        } else {
            debug!(path = %path.display(), "skipping non-resume entry");
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

fn document_id(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read one resume file.
///
/// Never fails: problems are recorded on the returned document.
pub fn load_document(path: &Path, extractor: &FieldExtractor) -> Document {
    let id = document_id(path);

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to read resume");
            return Document::failed(id, format!("failed to read file: {err}"));
        }
    };
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(_) => {
            warn!(path = %path.display(), "resume is not valid UTF-8");
            return Document::failed(id, "file is not valid UTF-8");
        }
    };

    let text = text.trim();
    if text.is_empty() {
        warn!(path = %path.display(), "resume has no text");
        return Document::failed(id, "no text extracted");
    }

    let fields = extractor.extract(text);
    Document::parsed(id, text).with_fields(fields)
}

/// Load every resume in `dir`.
pub fn load_documents(dir: &Path, extractor: &FieldExtractor) -> Result<Vec<Document>> {
    let paths = list_resume_files(dir)?;

    #[cfg(feature = "parallel")]
    let docs: Vec<Document> = paths
        .par_iter()
        .map(|path| load_document(path, extractor))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let docs: Vec<Document> = paths
        .iter()
        .map(|path| load_document(path, extractor))
        .collect();

    log_summary(dir, &docs);
    Ok(docs)
}

/// Load every resume in `dir`, advancing `progress` once per file.
#[cfg(feature = "parallel")]
pub fn load_documents_with_progress(
    dir: &Path,
    extractor: &FieldExtractor,
    progress: &ProgressBar,
) -> Result<Vec<Document>> {
    let paths = list_resume_files(dir)?;
    let total = paths.len();
    progress.set_length(total as u64);

    let counter = AtomicUsize::new(0);
    let docs: Vec<Document> = paths
        .par_iter()
        .map(|path| {
            let doc = load_document(path, extractor);
            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{count}/{total}"));
            }
            doc
        })
        .collect();

    log_summary(dir, &docs);
    Ok(docs)
}

/// Bar style for the loading progress bar.
#[cfg(feature = "parallel")]
pub fn progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .map(|style| style.progress_chars("━━╸"))
    .unwrap_or_else(|_| ProgressStyle::default_bar())
}

fn log_summary(dir: &Path, docs: &[Document]) {
    let failed = docs.iter().filter(|doc| !doc.parse_succeeded).count();
    info!(
        dir = %dir.display(),
        loaded = docs.len() - failed,
        failed,
        "loaded resumes"
    );
}
