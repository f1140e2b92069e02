//! Custom weights and engine configuration.

use resmatch::scoring::tfidf::TfidfVectorizer;
use resmatch::{composite, Document, Query, SimilarityEngine, StopWords, Tokenizer, Weights};

use crate::common::{assert_close, PYTHON_JOB, PYTHON_RESUME};

#[test]
fn test_single_signal_weights_isolate_that_signal() {
    let doc = Document::parsed("cv", PYTHON_RESUME);
    let query = Query::new("Dev", PYTHON_JOB).with_keywords(["python", "aws"]);
    let all = composite(&doc, &query, Weights::default());

    assert_close(composite(&doc, &query, Weights::new(1.0, 0.0, 0.0)).composite, all.tfidf);
    assert_close(composite(&doc, &query, Weights::new(0.0, 1.0, 0.0)).composite, all.jaccard);
    assert_close(composite(&doc, &query, Weights::new(0.0, 0.0, 1.0)).composite, all.keyword);
}

#[test]
fn test_weights_are_not_renormalized() {
    let doc = Document::parsed("cv", "python developer");
    let query = Query::new("Dev", "python developer").with_keywords(["python"]);
    let scores = composite(&doc, &query, Weights::new(2.0, 2.0, 2.0));
    assert_close(scores.composite, 6.0);
}

#[test]
fn test_injected_stop_words_change_scores() {
    let doc = Document::parsed("cv", "python developer");
    let query = Query::new("Dev", "python engineer");

    let default_engine = SimilarityEngine::default();
    let no_python = SimilarityEngine::new(
        Tokenizer::new(StopWords::from_words(["python"])),
        TfidfVectorizer::default(),
        Weights::default(),
    );
    assert!(default_engine.score(&doc, &query).jaccard > 0.0);
    assert_eq!(no_python.score(&doc, &query).jaccard, 0.0);
}

#[test]
fn test_zero_max_features_rejected() {
    assert!(TfidfVectorizer::new(0).is_err());
    assert!(TfidfVectorizer::new(1).is_ok());
}
