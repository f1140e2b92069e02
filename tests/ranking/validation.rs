//! Input validation and failure passthrough.

use resmatch::{rank, Document, Query, SimilarityEngine, ValidationError, Weights};

use crate::common::{make_query, PYTHON_RESUME};

#[test]
fn test_empty_batch_rejected() {
    assert_eq!(
        rank(&[], &make_query(), 0.3, Weights::default()),
        Err(ValidationError::EmptyDocuments)
    );
}

#[test]
fn test_blank_description_rejected() {
    let docs = vec![Document::parsed("a", PYTHON_RESUME)];
    for description in ["", "   ", "\n\t"] {
        assert_eq!(
            rank(&docs, &Query::new("Dev", description), 0.3, Weights::default()),
            Err(ValidationError::EmptyDescription)
        );
    }
}

#[test]
fn test_threshold_bounds() {
    let docs = vec![Document::parsed("a", PYTHON_RESUME)];
    let query = make_query();
    assert!(rank(&docs, &query, 0.0, Weights::default()).is_ok());
    assert!(rank(&docs, &query, 1.0, Weights::default()).is_ok());
    assert_eq!(
        rank(&docs, &query, -0.1, Weights::default()),
        Err(ValidationError::ThresholdOutOfRange(-0.1))
    );
    assert!(matches!(
        rank(&docs, &query, f64::NAN, Weights::default()),
        Err(ValidationError::ThresholdOutOfRange(_))
    ));
}

#[test]
fn test_failures_are_reported_in_input_order() {
    let docs = vec![
        Document::failed("b.txt", "not valid UTF-8"),
        Document::parsed("a.txt", PYTHON_RESUME),
        Document::failed("c.txt", "no text extracted"),
    ];
    let report = SimilarityEngine::default()
        .rank(&docs, &make_query(), 0.3)
        .unwrap();
    assert_eq!(report.total, 3);
    assert_eq!(report.valid, 1);
    assert_eq!(report.failed, 2);
    let failed: Vec<&str> = report.failures.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(failed, ["b.txt", "c.txt"]);
    assert_eq!(report.failures[0].error, "not valid UTF-8");
}

#[test]
fn test_failed_document_without_reason_gets_default() {
    let mut doc = Document::failed("x.txt", "ignored");
    doc.error = None;
    let report = rank(&[doc], &make_query(), 0.3, Weights::default()).unwrap();
    assert_eq!(report.failures[0].error, "extraction failed");
}
