// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The vocabulary entry: a word and its weight.
//!
//! `Term` is deliberately boring - an immutable pair with a handful of
//! orderings. The interesting part is which ordering you reach for:
//!
//! - `Ord` (the default): lexicographic by word, weights ignored. This is
//!   what keeps the sorted-array engine's backing vector sorted.
//! - [`prefix_order`]: compares only the first `r` characters of each word.
//!   "Equal" means "same first r characters", which turns a binary search
//!   for equality into a binary search for a whole prefix range.
//! - [`weight_order`] / [`reverse_weight_order`]: by weight alone, for
//!   ranking a matched range.
//!
//! Weights are validated at construction: finite and non-negative, nothing
//! else. A NaN weight would silently corrupt every heap and sort downstream,
//! so it is rejected up front along with negatives.

use crate::error::BuildError;
use std::cmp::Ordering;
use std::fmt;

/// An immutable (word, weight) pair forming one vocabulary entry.
///
/// Identity is the word alone: two terms with the same word and different
/// weights compare equal, because a vocabulary never holds the same word
/// twice (re-insertion updates the weight in place).
#[derive(Debug, Clone)]
pub struct Term {
    word: String,
    weight: f64,
}

impl Term {
    /// Create a term, rejecting negative and non-finite weights.
    pub fn new(word: impl Into<String>, weight: f64) -> Result<Self, BuildError> {
        let word = word.into();
        if !weight.is_finite() || weight < 0.0 {
            return Err(BuildError::InvalidWeight { word, weight });
        }
        Ok(Term { word, weight })
    }

    /// Probe term for boundary searches: carries the prefix as its word.
    /// The weight never participates in a prefix comparison.
    pub(crate) fn probe(prefix: &str) -> Self {
        Term {
            word: prefix.to_string(),
            weight: 0.0,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl Eq for Term {}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The default ordering of terms is lexicographic by word.
impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        self.word.cmp(&other.word)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>14.1}\t{}", self.weight, self.word)
    }
}

/// Comparator over the first `r` characters of each word.
///
/// Comparison always uses `min(r, char count)` characters from each side, so
/// two words are `Equal` exactly when they agree on their first `r`
/// characters - one or both may be shorter than `r`. Runs in O(r) regardless
/// of full word length: the iterators stop at `r` characters and never
/// allocate.
pub fn prefix_order(r: usize) -> impl Fn(&Term, &Term) -> Ordering {
    move |a, b| a.word.chars().take(r).cmp(b.word.chars().take(r))
}

/// Compare two terms by weight, ascending. Exact ties are `Equal`.
///
/// Weights are validated finite at construction, so `total_cmp` agrees with
/// numeric order here.
pub fn weight_order(a: &Term, b: &Term) -> Ordering {
    a.weight.total_cmp(&b.weight)
}

/// Compare two terms by weight, descending. Exact ties are `Equal`.
pub fn reverse_weight_order(a: &Term, b: &Term) -> Ordering {
    b.weight.total_cmp(&a.weight)
}

/// Assemble a vocabulary from parallel `words` and `weights` sequences.
///
/// Fails on mismatched lengths or any invalid weight; no partial vocabulary
/// is produced. Duplicate words are *not* collapsed here - each engine
/// applies its own update-in-place semantics during construction.
pub fn terms_from_pairs(
    words: Vec<String>,
    weights: Vec<f64>,
) -> Result<Vec<Term>, BuildError> {
    if words.len() != weights.len() {
        return Err(BuildError::MismatchedLengths {
            words: words.len(),
            weights: weights.len(),
        });
    }
    words
        .into_iter()
        .zip(weights)
        .map(|(word, weight)| Term::new(word, weight))
        .collect()
}
