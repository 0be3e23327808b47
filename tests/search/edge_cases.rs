//! Boundary conditions both engines must agree on.

use super::common::both_engines;
use typeahead::{Autocomplete, SortedArrayIndex, TrieIndex};

#[test]
fn empty_vocabulary_answers_empty() {
    let array = SortedArrayIndex::from_terms(Vec::new());
    let trie = TrieIndex::from_terms(Vec::new());
    for engine in [&array as &dyn Autocomplete, &trie] {
        assert_eq!(engine.top_match(""), None);
        assert_eq!(engine.top_match("any"), None);
        assert!(engine.top_k_matches("", 10).is_empty());
    }
}

#[test]
fn k_zero_is_always_empty() {
    let (array, trie) = both_engines(&[("word", 1.0)]);
    for engine in [&array as &dyn Autocomplete, &trie] {
        assert!(engine.top_k_matches("", 0).is_empty());
        assert!(engine.top_k_matches("w", 0).is_empty());
    }
}

#[test]
fn single_word_vocabulary() {
    let (array, trie) = both_engines(&[("solo", 3.0)]);
    for engine in [&array as &dyn Autocomplete, &trie] {
        assert_eq!(engine.top_match("s"), Some("solo"));
        assert_eq!(engine.top_match("solo"), Some("solo"));
        assert_eq!(engine.top_match("solos"), None);
        assert_eq!(engine.top_k_matches("", 2), vec!["solo"]);
    }
}

#[test]
fn prefix_identical_to_a_word_still_matches_descendants() {
    let (array, trie) = both_engines(&[("in", 1.0), ("inn", 5.0), ("input", 3.0)]);
    for engine in [&array as &dyn Autocomplete, &trie] {
        assert_eq!(engine.top_match("in"), Some("inn"));
        assert_eq!(engine.top_k_matches("in", 3), vec!["inn", "input", "in"]);
    }
}

#[test]
fn zero_weight_words_are_reachable() {
    let (array, trie) = both_engines(&[("ghost", 0.0), ("gold", 2.0)]);
    for engine in [&array as &dyn Autocomplete, &trie] {
        assert_eq!(engine.top_k_matches("g", 5), vec!["gold", "ghost"]);
        assert_eq!(engine.top_match("gh"), Some("ghost"));
    }
}

#[test]
fn unicode_prefixes_match_by_character() {
    let pairs = [("żółw", 4.0), ("żal", 2.0), ("zebra", 3.0)];
    let (array, trie) = both_engines(&pairs);
    for engine in [&array as &dyn Autocomplete, &trie] {
        assert_eq!(engine.top_match("ż"), Some("żółw"));
        assert_eq!(engine.top_k_matches("ż", 3), vec!["żółw", "żal"]);
        assert_eq!(engine.top_match("z"), Some("zebra"));
    }
}

#[test]
fn prefix_longer_than_every_word_matches_nothing() {
    let (array, trie) = both_engines(&[("ab", 1.0), ("abc", 2.0)]);
    for engine in [&array as &dyn Autocomplete, &trie] {
        assert_eq!(engine.top_match("abcd"), None);
        assert!(engine.top_k_matches("abcd", 1).is_empty());
    }
}
