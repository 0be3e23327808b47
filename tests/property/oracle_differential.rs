//! Differential tests: both engines against each other and a naive oracle.
//!
//! The two engines implement one contract by entirely different means, so
//! random-input agreement between them (and with a filter-and-sort reference)
//! is the strongest correctness signal in the suite.

use super::common::{oracle_top_k, oracle_weights};
use proptest::prelude::*;
use typeahead::{Autocomplete, SortedArrayIndex, Term, TrieIndex};

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,8}").unwrap()
}

/// Vocabulary with possibly duplicated words and tied weights.
fn vocabulary_strategy() -> impl Strategy<Value = Vec<(String, f64)>> {
    prop::collection::vec(
        (word_strategy(), (0u32..100).prop_map(f64::from)),
        1..40,
    )
}

/// Vocabulary with unique words and strictly distinct weights, where every
/// tie-break question disappears and outputs must match exactly.
fn distinct_vocabulary_strategy() -> impl Strategy<Value = Vec<(String, f64)>> {
    prop::collection::hash_set(word_strategy(), 1..30)
        .prop_map(|words| words.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|words| {
            words
                .into_iter()
                .enumerate()
                .map(|(i, word)| (word, (i * 3 + 1) as f64))
                .collect()
        })
}

fn prefix_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{0,3}").unwrap()
}

fn build_both(pairs: &[(String, f64)]) -> (SortedArrayIndex, TrieIndex) {
    let terms: Vec<Term> = pairs
        .iter()
        .map(|(w, wt)| Term::new(w.clone(), *wt).expect("valid term"))
        .collect();
    (
        SortedArrayIndex::from_terms(terms.clone()),
        TrieIndex::from_terms(terms),
    )
}

proptest! {
    /// With distinct weights, both engines and the oracle agree exactly.
    #[test]
    fn prop_distinct_weights_exact_agreement(
        pairs in distinct_vocabulary_strategy(),
        prefix in prefix_strategy(),
        k in 0usize..15
    ) {
        let (array, trie) = build_both(&pairs);
        let expected = oracle_top_k(&pairs, &prefix, k);

        prop_assert_eq!(&array.top_k_matches(&prefix, k), &expected);
        prop_assert_eq!(&trie.top_k_matches(&prefix, k), &expected);
        prop_assert_eq!(array.top_match(&prefix), trie.top_match(&prefix));
    }

    /// The array engine resolves ties deterministically, so it matches the
    /// oracle exactly even with duplicates and tied weights.
    #[test]
    fn prop_array_matches_oracle_under_ties(
        pairs in vocabulary_strategy(),
        prefix in prefix_strategy(),
        k in 0usize..15
    ) {
        let (array, _) = build_both(&pairs);
        prop_assert_eq!(
            array.top_k_matches(&prefix, k),
            oracle_top_k(&pairs, &prefix, k)
        );
    }

    /// The trie explores through tied bounds rather than pruning at them,
    /// so even with duplicates and tied weights its output matches the
    /// oracle exactly, word for word.
    #[test]
    fn prop_trie_matches_oracle_under_ties(
        pairs in vocabulary_strategy(),
        prefix in prefix_strategy(),
        k in 0usize..15
    ) {
        let (_, trie) = build_both(&pairs);

        let results = trie.top_k_matches(&prefix, k);
        prop_assert_eq!(&results, &oracle_top_k(&pairs, &prefix, k));

        for word in &results {
            prop_assert!(word.starts_with(&prefix));
        }
        // No word appears twice.
        let mut seen = std::collections::HashSet::new();
        for word in &results {
            prop_assert!(seen.insert(*word));
        }
    }

    /// Both engines report the same single best completion.
    #[test]
    fn prop_top_match_agrees_under_ties(
        pairs in vocabulary_strategy(),
        prefix in prefix_strategy()
    ) {
        let (array, trie) = build_both(&pairs);
        prop_assert_eq!(array.top_match(&prefix), trie.top_match(&prefix));
    }
}
