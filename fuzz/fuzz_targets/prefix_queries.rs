// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Builds both engines from arbitrary valid vocabularies and throws
//! arbitrary prefixes at them, checking the contract invariants on every
//! answer. If the two engines ever disagree on a result list, the fuzzer
//! has found a search bug one of them is hiding.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::HashMap;
use typeahead::{Autocomplete, SortedArrayIndex, TrieIndex};

fuzz_target!(|input: (Vec<(String, u32)>, String, u8)| {
    let (pairs, prefix, k) = input;
    let k = k as usize;

    // u32 weights are always finite and non-negative, so construction
    // must succeed; size caps keep iterations fast.
    let pairs: Vec<(String, f64)> = pairs
        .into_iter()
        .take(48)
        .map(|(word, weight)| {
            let word: String = word.chars().take(16).collect();
            (word, f64::from(weight))
        })
        .collect();
    let prefix: String = prefix.chars().take(16).collect();

    let words: Vec<String> = pairs.iter().map(|(w, _)| w.clone()).collect();
    let weights: Vec<f64> = pairs.iter().map(|(_, wt)| *wt).collect();

    let array = SortedArrayIndex::new(words.clone(), weights.clone())
        .expect("valid weights must build");
    let trie = TrieIndex::new(words, weights).expect("valid weights must build");

    // Last weight wins for duplicate words.
    let mut vocabulary: HashMap<&str, f64> = HashMap::new();
    for (word, weight) in &pairs {
        vocabulary.insert(word, *weight);
    }

    // INVARIANT 1: queries never panic
    let array_results = array.top_k_matches(&prefix, k);
    let trie_results = trie.top_k_matches(&prefix, k);

    // INVARIANT 2: results are bounded by k and by the matching words
    let matching = vocabulary.keys().filter(|w| w.starts_with(&prefix)).count();
    assert!(array_results.len() <= k);
    assert!(trie_results.len() <= k);
    assert!(array_results.len() <= matching);
    assert!(trie_results.len() <= matching);
    assert_eq!(array_results.len(), trie_results.len());

    // INVARIANT 3: every result matches the prefix, no duplicates
    for results in [&array_results, &trie_results] {
        let mut seen = std::collections::HashSet::new();
        for word in *results {
            assert!(word.starts_with(&prefix), "{:?} lacks prefix {:?}", word, prefix);
            assert!(seen.insert(*word), "duplicate {:?} in results", word);
        }
    }

    // INVARIANT 4: weights descend, and both engines return the exact same
    // words - ties included, since both resolve them lexicographically
    assert_eq!(array_results, trie_results, "engines disagree on results");
    let array_weights: Vec<f64> = array_results.iter().map(|w| vocabulary[*w]).collect();
    for pair in array_weights.windows(2) {
        assert!(pair[0] >= pair[1], "weights out of order: {:?}", array_weights);
    }

    // INVARIANT 5: top_match is the head of top-1
    let array_one = array.top_k_matches(&prefix, 1);
    assert_eq!(array.top_match(&prefix), array_one.first().copied());
    let trie_one = trie.top_k_matches(&prefix, 1);
    assert_eq!(trie.top_match(&prefix), trie_one.first().copied());
    assert_eq!(array.top_match(&prefix), trie.top_match(&prefix));
});
