// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The sorted-array engine.
//!
//! All terms live in one lexicographically sorted vector. A prefix query is
//! two boundary binary searches - first and last index of the "agrees on the
//! first r characters" equivalence class - which pin down the contiguous run
//! of matching terms in at most `2 + 2·log₂ n` comparisons. Ranking is then
//! a weight sort of just that run.
//!
//! Compared to the trie engine this trades query-time sorting for a far
//! smaller resident structure: one `Vec<Term>`, no per-node bookkeeping.
//! For short prefixes with huge match ranges the trie's pruned search wins;
//! for long prefixes the range is tiny and the sort is nothing.

use crate::boundary::{first_index_of, last_index_of};
use crate::engine::Autocomplete;
use crate::error::BuildError;
use crate::term::{prefix_order, reverse_weight_order, terms_from_pairs, Term};
use std::cmp::Ordering;

/// Prefix completion over a lexicographically sorted vector of terms.
///
/// Built once, read-only afterward. Duplicate words collapse at construction
/// with the last weight winning, mirroring the trie engine's update-in-place
/// semantics so both engines always hold the same vocabulary.
pub struct SortedArrayIndex {
    terms: Vec<Term>,
}

impl SortedArrayIndex {
    /// Build from parallel `words` and `weights` sequences.
    ///
    /// Fails on mismatched lengths or any negative/non-finite weight.
    pub fn new(words: Vec<String>, weights: Vec<f64>) -> Result<Self, BuildError> {
        Ok(Self::from_terms(terms_from_pairs(words, weights)?))
    }

    /// Build from already-validated terms.
    pub fn from_terms(mut terms: Vec<Term>) -> Self {
        // Stable sort keeps duplicate words in insertion order, so the later
        // entry of each run carries the weight that wins.
        terms.sort_by(|a, b| a.word().cmp(b.word()));
        terms.dedup_by(|later, kept| {
            if later.word() == kept.word() {
                *kept = later.clone();
                true
            } else {
                false
            }
        });
        SortedArrayIndex { terms }
    }

    /// Number of distinct words in the vocabulary.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The backing terms, lexicographically sorted.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Closed range `[first, last]` of terms sharing `prefix`, or `None`.
    fn matching_range(&self, prefix: &str) -> Option<(usize, usize)> {
        let probe = Term::probe(prefix);
        let cmp = prefix_order(prefix.chars().count());
        let first = first_index_of(&self.terms, &probe, &cmp)?;
        let last = last_index_of(&self.terms, &probe, &cmp)?;
        Some((first, last))
    }
}

impl Autocomplete for SortedArrayIndex {
    fn top_match(&self, prefix: &str) -> Option<&str> {
        let (first, last) = self.matching_range(prefix)?;
        let mut best: Option<&Term> = None;
        for term in &self.terms[first..=last] {
            // The boundary search already isolated the prefix class; the
            // starts_with check re-asserts it literally so a zero-length
            // prefix can never smuggle in a stray term.
            if !term.word().starts_with(prefix) {
                continue;
            }
            best = match best {
                None => Some(term),
                Some(current) => {
                    let beats = match reverse_weight_order(term, current) {
                        Ordering::Less => true,
                        Ordering::Equal => term.word() < current.word(),
                        Ordering::Greater => false,
                    };
                    if beats {
                        Some(term)
                    } else {
                        Some(current)
                    }
                }
            };
        }
        best.map(Term::word)
    }

    fn top_k_matches(&self, prefix: &str, k: usize) -> Vec<&str> {
        if k == 0 {
            return Vec::new();
        }
        let Some((first, last)) = self.matching_range(prefix) else {
            return Vec::new();
        };
        let mut range: Vec<&Term> = self.terms[first..=last].iter().collect();
        range.sort_by(|a, b| {
            reverse_weight_order(a, b).then_with(|| a.word().cmp(b.word()))
        });
        range.into_iter().take(k).map(|t| t.word()).collect()
    }
}
