//! Lexical resume-to-job ranking.
//!
//! Scores every candidate document against one job description with three
//! independent signals, fuses them into a composite, and returns a stably
//! ordered ranking with per-signal breakdowns and summary statistics.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │ tokenize.rs │────▶│ scoring/tfidf.rs │     │ scoring/         │
//! │ (Tokenizer, │     │ scoring/jaccard  │────▶│   core.rs        │
//! │  StopWords) │     │ scoring/keyword  │     │ (SimilarityEngine│
//! └─────────────┘     └──────────────────┘     │  Weights)        │
//!                                              └────────┬─────────┘
//!                                                       ▼
//! ┌─────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │  load/      │────▶│   types.rs       │────▶│ scoring/         │
//! │  extract.rs │     │ (Document, Query,│     │   ranking.rs     │
//! │  config.rs  │     │  MatchReport)    │     │ (rank, stats)    │
//! └─────────────┘     └──────────────────┘     └────────┬─────────┘
//!                                                       ▼
//!                     ┌─────────────────────────────────────────┐
//!                     │  contracts.rs (debug-build invariants)  │
//!                     │  report.rs    (buckets, text report)    │
//!                     └─────────────────────────────────────────┘
//! ```
//!
//! The engine (`tokenize`, `scoring`, `types`, `contracts`) is pure: no I/O,
//! no logging, no shared state. `config`, `extract`, `load`, `report` and
//! `cli` sit around it and are what the `resmatch` binary uses.
//!
//! # Signals
//!
//! | Signal    | Module              | Default weight |
//! |-----------|---------------------|----------------|
//! | `tfidf`   | `scoring::tfidf`    | 0.4            |
//! | `jaccard` | `scoring::jaccard`  | 0.3            |
//! | `keyword` | `scoring::keyword`  | 0.3            |
//!
//! # Usage
//!
//! ```
//! use resmatch::{rank, Document, Query, Weights};
//!
//! let docs = vec![
//!     Document::parsed("a.txt", "Senior Python developer, Django and AWS"),
//!     Document::parsed("b.txt", "Java engineer"),
//! ];
//! let query = Query::new("Backend", "Python developer with Django experience")
//!     .with_keywords(["Python", "AWS"]);
//!
//! let report = rank(&docs, &query, 0.3, Weights::default()).unwrap();
//! assert_eq!(report.ranked[0].document.id, "a.txt");
//! ```

pub mod cli;
pub mod config;
pub mod contracts;
pub mod error;
pub mod extract;
pub mod load;
pub mod report;
pub mod scoring;
pub mod testing;
pub mod tokenize;
mod types;

pub use config::Config;
pub use error::{Error, Result, ValidationError};
pub use extract::FieldExtractor;
pub use scoring::jaccard::{jaccard, jaccard_tokens};
pub use scoring::keyword::keyword_coverage;
pub use scoring::ranking::{compare_results, rank, sort_results};
pub use scoring::tfidf::{tfidf_cosine, TfidfVectorizer};
pub use scoring::{composite, PreparedQuery, SimilarityEngine, Weights};
pub use tokenize::{normalize, tokens_to_text, StopWords, Tokenizer};
pub use types::{
    Document, ExtractedFields, FailedDocument, MatchReport, Query, RankedResult, ScoreBreakdown,
    ScoreStatistics, DEFAULT_QUERY_TITLE, TOP_CANDIDATES,
};
