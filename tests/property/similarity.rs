//! Signal properties: range, symmetry, empty input.

use proptest::prelude::*;
use resmatch::{
    composite, jaccard, keyword_coverage, normalize, tfidf_cosine, Document, Query, TfidfVectorizer,
    Weights,
};

use crate::common::{messy_text_strategy, overlapping_text_strategy, EPS};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_jaccard_symmetric(a in overlapping_text_strategy(), b in overlapping_text_strategy()) {
        prop_assert_eq!(jaccard(&a, &b), jaccard(&b, &a));
    }

    #[test]
    fn prop_tfidf_symmetric(a in overlapping_text_strategy(), b in overlapping_text_strategy()) {
        let ab = tfidf_cosine(&a, &b);
        let ba = tfidf_cosine(&b, &a);
        prop_assert!((ab - ba).abs() < EPS, "{} vs {}", ab, ba);
    }

    /// Symmetry holds when the vocabulary cap binds and most counts tie.
    #[test]
    fn prop_tfidf_symmetric_under_small_cap(
        a in overlapping_text_strategy(),
        b in overlapping_text_strategy(),
        cap in 1usize..8,
    ) {
        let v = TfidfVectorizer::new(cap).unwrap();
        let (a, b) = (normalize(&a), normalize(&b));
        prop_assert_eq!(v.cosine(&a, &b), v.cosine(&b, &a));
    }

    #[test]
    fn prop_signals_in_unit_range(
        doc in messy_text_strategy(),
        query in messy_text_strategy(),
        keywords in prop::collection::vec("[a-zA-Z ]{0,8}", 0..5),
    ) {
        let t = tfidf_cosine(&doc, &query);
        let j = jaccard(&doc, &query);
        let k = keyword_coverage(&doc, &keywords);
        for value in [t, j, k] {
            prop_assert!((0.0..=1.0).contains(&value), "out of range: {}", value);
        }
    }

    #[test]
    fn prop_composite_in_unit_range_with_default_weights(
        doc in overlapping_text_strategy(),
        query in overlapping_text_strategy(),
        keywords in prop::collection::vec(overlapping_text_strategy(), 0..4),
    ) {
        let query = Query::new("Job", query).with_keywords(keywords);
        let scores = composite(&Document::parsed("d", doc), &query, Weights::default());
        prop_assert!(scores.composite >= 0.0);
        prop_assert!(scores.composite <= 1.0 + EPS);
    }

    /// A document compared with itself is a perfect lexical match.
    #[test]
    fn prop_self_similarity_is_one(text in overlapping_text_strategy()) {
        let t = tfidf_cosine(&text, &text);
        let j = jaccard(&text, &text);
        if normalize(&text).is_empty() {
            prop_assert_eq!(t, 0.0);
            prop_assert_eq!(j, 0.0);
        } else {
            prop_assert!((t - 1.0).abs() < 1e-9, "tfidf self = {}", t);
            prop_assert_eq!(j, 1.0);
        }
    }

    /// Empty text on either side zeroes every text signal.
    #[test]
    fn prop_empty_side_scores_zero(text in messy_text_strategy()) {
        prop_assert_eq!(tfidf_cosine("", &text), 0.0);
        prop_assert_eq!(tfidf_cosine(&text, ""), 0.0);
        prop_assert_eq!(jaccard("", &text), 0.0);
        prop_assert_eq!(jaccard(&text, ""), 0.0);
        prop_assert_eq!(keyword_coverage("", &["python"]), 0.0);
    }

    /// An empty document scores exactly zero on every signal.
    #[test]
    fn prop_empty_document_zero_breakdown(
        query in overlapping_text_strategy(),
        keywords in prop::collection::vec("[a-z]{1,8}", 0..4),
    ) {
        let query = Query::new("Job", query).with_keywords(keywords);
        let scores = composite(&Document::parsed("empty", ""), &query, Weights::default());
        prop_assert_eq!(scores, resmatch::ScoreBreakdown::zero());
    }
}

/// A resume and job description that together exceed the default cap of
/// 1000 terms, with every distinct term counted once or twice.
#[test]
fn tfidf_symmetric_past_default_vocabulary_cap() {
    let shared: Vec<String> = (0..60).map(|i| format!("shared{i}")).collect();
    let mut resume: Vec<String> = (0..640).map(|i| format!("resume{i}")).collect();
    let mut job: Vec<String> = (0..340).map(|i| format!("job{i}")).collect();
    resume.extend(shared.iter().cloned());
    job.extend(shared.iter().cloned());
    let (resume, job) = (resume.join(" "), job.join(" "));

    let ab = tfidf_cosine(&resume, &job);
    let ba = tfidf_cosine(&job, &resume);
    assert_eq!(ab, ba);
    assert!(ab > 0.0);
}
