//! Re-insertion semantics: the last weight wins and cached bounds recover.
//!
//! Words are drawn from a tiny pool so insertion sequences are dense with
//! duplicates, weight decreases included. The trie must repair its subtree
//! bounds on every update; any stale bound shows up as a wrong answer for
//! some prefix of some word.

use super::common::{oracle_top_k, oracle_weights};
use proptest::prelude::*;
use typeahead::{Autocomplete, SortedArrayIndex, Term, TrieIndex};

/// Short words over {a, b, c}: a handful of possibilities, so a sequence of
/// 30 insertions revisits most of them several times.
fn pooled_word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{1,3}").unwrap()
}

fn insertion_sequence_strategy() -> impl Strategy<Value = Vec<(String, f64)>> {
    prop::collection::vec(
        (pooled_word_strategy(), (0u32..50).prop_map(f64::from)),
        1..30,
    )
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

/// Every prefix of every word in the pool, plus a non-matching probe.
fn all_prefixes() -> Vec<String> {
    let mut prefixes = vec![String::new(), "d".to_string()];
    for a in ["a", "b", "c"] {
        prefixes.push(a.to_string());
        for b in ["a", "b", "c"] {
            prefixes.push(format!("{}{}", a, b));
            for c in ["a", "b", "c"] {
                prefixes.push(format!("{}{}{}", a, b, c));
            }
        }
    }
    prefixes
}

proptest! {
    /// After any insertion sequence, queries reflect only the final weights.
    #[test]
    fn prop_last_weight_wins_everywhere(
        pairs in insertion_sequence_strategy()
    ) {
        let (array, trie) = build_both(&pairs);

        for prefix in all_prefixes() {
            let expected = oracle_top_k(&pairs, &prefix, 30);
            // Both engines resolve exact ties lexicographically, so both
            // must reproduce the oracle word for word.
            prop_assert_eq!(&array.top_k_matches(&prefix, 30), &expected);
            prop_assert_eq!(&trie.top_k_matches(&prefix, 30), &expected);

            prop_assert_eq!(array.top_match(&prefix), trie.top_match(&prefix));
        }
    }

    /// A decrease of the globally heaviest word must demote it.
    #[test]
    fn prop_decreasing_the_leader_demotes_it(
        pairs in insertion_sequence_strategy()
    ) {
        let vocabulary = oracle_weights(&pairs);
        let Some((leader, _)) = vocabulary
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1).then_with(|| b.0.cmp(a.0)))
        else {
            return Ok(());
        };

        // Re-insert the leader at a weight below everything else.
        let mut demoted = pairs.clone();
        demoted.push((leader.clone(), 0.0));

        let (array, trie) = build_both(&demoted);
        let expected = oracle_top_k(&demoted, "", demoted.len());
        prop_assert_eq!(&array.top_k_matches("", demoted.len()), &expected);
        prop_assert_eq!(
            trie.top_match(""),
            expected.first().map(String::as_str)
        );
    }
}
