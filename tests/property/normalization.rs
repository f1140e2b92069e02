//! Normalization properties.

use proptest::prelude::*;
use resmatch::{normalize, tokens_to_text, StopWords, Tokenizer};

use crate::common::messy_text_strategy;

proptest! {
    /// Normalizing already-normalized text changes nothing.
    #[test]
    fn prop_normalize_idempotent(text in messy_text_strategy()) {
        let once = normalize(&text);
        let twice = normalize(&tokens_to_text(&once));
        prop_assert_eq!(once, twice);
    }

    /// Every surviving token is lowercase ASCII alphanumeric and long enough.
    #[test]
    fn prop_tokens_are_clean(text in messy_text_strategy()) {
        for token in normalize(&text) {
            prop_assert!(token.len() >= 3, "short token {:?}", token);
            prop_assert!(
                token.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                "unclean token {:?}",
                token
            );
        }
    }

    /// Case never matters.
    #[test]
    fn prop_normalize_case_insensitive(text in messy_text_strategy()) {
        prop_assert_eq!(normalize(&text.to_uppercase()), normalize(&text.to_lowercase()));
    }

    /// Injected stop words are always removed.
    #[test]
    fn prop_custom_stop_words_removed(
        words in prop::collection::vec("[a-z]{3,6}", 1..10),
        banned_idx in 0usize..10,
    ) {
        let banned = words[banned_idx % words.len()].clone();
        let tokenizer = Tokenizer::new(StopWords::from_words([banned.as_str()]));
        let tokens = tokenizer.normalize(&words.join(" "));
        prop_assert!(!tokens.contains(&banned));
    }
}
