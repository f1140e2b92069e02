//! Worked examples with hand-checked numbers.

use resmatch::{
    composite, jaccard, keyword_coverage, normalize, rank, sort_results, tfidf_cosine,
    Document, Query, ScoreStatistics, Weights,
};

use crate::common::{
    assert_close, assert_report_well_formed, make_doc, make_docs, scored, PYTHON_JOB,
    PYTHON_RESUME,
};

#[test]
fn test_shared_terms_give_positive_score() {
    let docs = vec![Document::parsed("resume.txt", PYTHON_RESUME)];
    let query = Query::new("Python Developer", PYTHON_JOB);

    let doc_tokens = normalize(PYTHON_RESUME);
    for shared in ["python", "django", "experience"] {
        assert!(doc_tokens.iter().any(|t| t == shared));
    }

    let report = rank(&docs, &query, 0.2, Weights::default()).unwrap();
    let scores = report.ranked[0].scores;
    assert!(scores.composite > 0.0);
    assert_eq!(report.qualified, 1);
    assert_report_well_formed(&report);
}

#[test]
fn test_shared_terms_breakdown_values() {
    // 3 shared of 7 distinct tokens; 4 shared of 9 tf-idf terms per side,
    // unshared terms weighted by idf u = 1 + ln(1.5)
    let u = 1.0 + 1.5f64.ln();
    let expected_tfidf = 4.0 / (4.0 + 5.0 * u * u);

    let scores = composite(
        &Document::parsed("resume.txt", PYTHON_RESUME),
        &Query::new("Python Developer", PYTHON_JOB),
        Weights::default(),
    );
    assert_close(scores.jaccard, 3.0 / 7.0);
    assert_close(scores.tfidf, expected_tfidf);
    assert_eq!(scores.keyword, 0.0);
    assert_close(scores.composite, 0.4 * expected_tfidf + 0.3 * 3.0 / 7.0);
}

#[test]
fn test_empty_document_never_qualifies() {
    let docs = vec![Document::parsed("blank.txt", "")];
    let query = Query::new("Dev", PYTHON_JOB).with_keywords(["python"]);

    let report = rank(&docs, &query, 0.0, Weights::default()).unwrap();
    assert_eq!(report.ranked[0].scores.composite, 0.0);
    assert_eq!(report.qualified, 0);
    assert!(report.statistics.is_none());
}

#[test]
fn test_keyword_coverage_half() {
    let text = "Senior Python engineer, ten years of backend work";
    assert_eq!(keyword_coverage(text, &["Python", "AWS"]), 0.5);

    let query = Query::new("Dev", "backend engineer").with_keywords(["Python", "AWS"]);
    let scores = composite(&Document::parsed("cv", text), &query, Weights::default());
    assert_eq!(scores.keyword, 0.5);
}

#[test]
fn test_ties_keep_input_order() {
    let mut results = vec![
        scored(make_doc("doc0", "a"), 0.9),
        scored(make_doc("doc1", "b"), 0.5),
        scored(make_doc("doc2", "c"), 0.9),
    ];
    sort_results(&mut results);
    let ids: Vec<&str> = results.iter().map(|r| r.document.id.as_str()).collect();
    assert_eq!(ids, ["doc0", "doc2", "doc1"]);
}

#[test]
fn test_identical_documents_keep_input_order_through_rank() {
    let docs = make_docs(&[
        "python django developer",
        "java spring developer",
        "python django developer",
    ]);
    let query = Query::new("Dev", "python django developer");
    let report = rank(&docs, &query, 0.3, Weights::default()).unwrap();
    let ids: Vec<&str> = report.ranked.iter().map(|r| r.document.id.as_str()).collect();
    assert_eq!(ids, ["doc0", "doc2", "doc1"]);
}

#[test]
fn test_statistics_example() {
    let stats = ScoreStatistics::from_scores(&[0.2, 0.4, 0.6, 0.8]).unwrap();
    assert_eq!(stats.median, 0.4);
    assert_close(stats.mean, 0.5);
    assert_eq!(stats.max, 0.8);
    assert_eq!(stats.min, 0.2);
}

#[test]
fn test_disjoint_texts_score_zero() {
    assert_eq!(tfidf_cosine("rust tokio async", "python django flask"), 0.0);
    assert_eq!(jaccard("rust tokio async", "python django flask"), 0.0);
}

#[test]
fn test_stop_words_alone_score_zero() {
    let docs = vec![Document::parsed("stop.txt", "the and of with is a")];
    let report = rank(&docs, &Query::new("Dev", "python"), 0.0, Weights::default()).unwrap();
    assert_eq!(report.ranked[0].scores.composite, 0.0);
}

#[test]
fn test_more_overlap_ranks_higher() {
    let docs = make_docs(&[
        "java developer",
        "python django developer with aws experience",
        "python developer",
    ]);
    let query = Query::new("Dev", "python django developer aws experience")
        .with_keywords(["python", "aws"]);
    let report = rank(&docs, &query, 0.3, Weights::default()).unwrap();
    let ids: Vec<&str> = report.ranked.iter().map(|r| r.document.id.as_str()).collect();
    assert_eq!(ids, ["doc1", "doc2", "doc0"]);
    assert_report_well_formed(&report);
}
