// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for text normalization.
//!
//! Arbitrary bytes in, clean tokens out: lowercase ASCII alphanumerics, at
//! least three characters, no stop words, and a fixed point under a second
//! pass.

#![no_main]

use libfuzzer_sys::fuzz_target;
use resmatch::{tokens_to_text, Tokenizer};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let tokenizer = Tokenizer::default();

    let tokens = tokenizer.normalize(&text);
    for token in &tokens {
        assert!(token.len() >= tokenizer.min_token_len());
        assert!(token
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
        assert!(!tokenizer.stop_words().contains(token));
    }

    assert_eq!(tokenizer.normalize(&tokens_to_text(&tokens)), tokens);
});
