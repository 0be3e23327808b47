// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for vocabulary construction.
//!
//! Throws arbitrary (word, weight) sequences at both engine constructors to
//! verify they never panic, accept exactly the valid inputs, and agree on
//! what they built. NaN weights, empty words, megabyte words, duplicate
//! words with wildly different weights - construction has to survive all
//! of it or reject it cleanly.

#![no_main]

use libfuzzer_sys::fuzz_target;
use typeahead::{Autocomplete, SortedArrayIndex, TrieIndex};

fuzz_target!(|input: Vec<(String, f64)>| {
    // Cap total input so the fuzzer spends time on shapes, not on size.
    let input: Vec<(String, f64)> = input
        .into_iter()
        .take(64)
        .map(|(word, weight)| {
            let word: String = word.chars().take(32).collect();
            (word, weight)
        })
        .collect();

    let words: Vec<String> = input.iter().map(|(w, _)| w.clone()).collect();
    let weights: Vec<f64> = input.iter().map(|(_, wt)| *wt).collect();
    let all_valid = weights.iter().all(|w| w.is_finite() && *w >= 0.0);

    // INVARIANT 1: construction never panics, and fails exactly on bad input
    let array = SortedArrayIndex::new(words.clone(), weights.clone());
    let trie = TrieIndex::new(words, weights);
    assert_eq!(array.is_ok(), all_valid);
    assert_eq!(trie.is_ok(), all_valid);

    let (Ok(array), Ok(trie)) = (array, trie) else {
        return;
    };

    // INVARIANT 2: both engines hold the same number of distinct words
    assert_eq!(
        array.len(),
        trie.len(),
        "engines disagree on vocabulary size"
    );

    // INVARIANT 3: every loaded word is findable through both engines
    for term in array.terms() {
        let word = term.word();
        assert!(array.top_match(word).is_some(), "array lost word {:?}", word);
        assert!(trie.top_match(word).is_some(), "trie lost word {:?}", word);
    }

    // INVARIANT 4: querying never panics, even on odd prefixes
    for prefix in ["", "a", "\u{0}", "é"] {
        let _ = array.top_k_matches(prefix, 8);
        let _ = trie.top_k_matches(prefix, 8);
    }
});
