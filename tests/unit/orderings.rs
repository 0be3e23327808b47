//! Term ordering behavior when sorting whole vocabularies.

use super::common::{city_terms, terms_of};
use typeahead::{reverse_weight_order, weight_order, Term};

#[test]
fn default_sort_is_lexicographic() {
    let mut terms = city_terms();
    terms.sort();
    let words: Vec<&str> = terms.iter().map(Term::word).collect();
    let mut expected = words.clone();
    expected.sort_unstable();
    assert_eq!(words, expected);
}

#[test]
fn weight_sorts_are_mirror_images() {
    let mut ascending = city_terms();
    ascending.sort_by(weight_order);
    let mut descending = city_terms();
    descending.sort_by(reverse_weight_order);
    descending.reverse();

    let up: Vec<f64> = ascending.iter().map(Term::weight).collect();
    let down: Vec<f64> = descending.iter().map(Term::weight).collect();
    assert_eq!(up, down);

    for pair in up.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn equal_words_compare_equal_despite_weights() {
    let a = Term::new("salem", 1.0).unwrap();
    let b = Term::new("salem", 1_000_000.0).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
}

#[test]
fn zero_weights_are_ordinary_citizens() {
    let mut terms = terms_of(&[("a", 0.0), ("b", 2.0), ("c", 0.0)]);
    terms.sort_by(reverse_weight_order);
    assert_eq!(terms[0].word(), "b");
}
