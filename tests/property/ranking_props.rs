//! Ranking properties: determinism, ordering, accounting.

use proptest::prelude::*;
use resmatch::{rank, sort_results, Document, Query, ScoreStatistics, Weights};

use crate::common::{assert_report_well_formed, make_doc, overlapping_text_strategy, scored};

fn documents_strategy() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec((overlapping_text_strategy(), any::<bool>()), 1..12).prop_map(|docs| {
        docs.into_iter()
            .enumerate()
            .map(|(i, (text, ok))| {
                if ok {
                    Document::parsed(format!("doc{i}"), text)
                } else {
                    Document::failed(format!("doc{i}"), "unreadable")
                }
            })
            .collect()
    })
}

fn query_strategy() -> impl Strategy<Value = Query> {
    (
        overlapping_text_strategy().prop_filter("non-empty", |d| !d.trim().is_empty()),
        prop::collection::vec("[a-z]{3,8}", 0..4),
    )
        .prop_map(|(description, keywords)| Query::new("Job", description).with_keywords(keywords))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Same input, same report, down to the order of ties.
    #[test]
    fn prop_rank_deterministic(
        docs in documents_strategy(),
        query in query_strategy(),
        threshold in 0.0f64..=1.0,
    ) {
        let first = rank(&docs, &query, threshold, Weights::default()).unwrap();
        let second = rank(&docs, &query, threshold, Weights::default()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_report_well_formed(
        docs in documents_strategy(),
        query in query_strategy(),
        threshold in 0.0f64..=1.0,
    ) {
        let report = rank(&docs, &query, threshold, Weights::default()).unwrap();
        assert_report_well_formed(&report);
        for result in &report.ranked {
            prop_assert!(result.document.parse_succeeded);
        }
    }

    /// Equal scores keep their input order.
    #[test]
    fn prop_sort_is_stable(scores in prop::collection::vec(0u8..4, 0..20)) {
        let mut results: Vec<_> = scores
            .iter()
            .enumerate()
            .map(|(i, s)| scored(make_doc(&format!("{i:02}"), "x"), f64::from(*s) / 4.0))
            .collect();
        sort_results(&mut results);
        for pair in results.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.scores.composite >= b.scores.composite);
            if a.scores.composite == b.scores.composite {
                prop_assert!(a.document.id < b.document.id);
            }
        }
    }

    /// Statistics ignore zeros and respect min <= median <= max.
    #[test]
    fn prop_statistics_bounds(scores in prop::collection::vec(0.0f64..=1.0, 0..20)) {
        match ScoreStatistics::from_scores(&scores) {
            None => prop_assert!(scores.iter().all(|s| *s <= 0.0)),
            Some(stats) => {
                prop_assert!(stats.min > 0.0);
                prop_assert!(stats.min <= stats.median && stats.median <= stats.max);
                prop_assert!(stats.min <= stats.mean + 1e-12 && stats.mean <= stats.max + 1e-12);
            }
        }
    }
}
