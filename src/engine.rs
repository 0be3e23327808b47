// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query contract both engines implement.
//!
//! [`SortedArrayIndex`](crate::SortedArrayIndex) and
//! [`TrieIndex`](crate::TrieIndex) answer the same two questions by entirely
//! different means - boundary binary search over a sorted vector versus
//! best-first search over a bounded trie. Callers pick an implementation at
//! construction time and talk to it through this trait; nothing else about
//! the two types is shared, and no data flows between them.
//!
//! Absence of a match is a result, not an error: `None` from [`top_match`],
//! an empty vector from [`top_k_matches`]. The empty prefix matches every
//! word, so `top_match("")` returns the heaviest word in the vocabulary.
//!
//! [`top_match`]: Autocomplete::top_match
//! [`top_k_matches`]: Autocomplete::top_k_matches

use crate::array::SortedArrayIndex;
use crate::term::Term;
use crate::trie::TrieIndex;

/// Prefix-completion queries over a fixed weighted vocabulary.
pub trait Autocomplete {
    /// The highest-weight word starting with `prefix`, or `None` if no word
    /// matches. Equal weights resolve toward the lexicographically smaller
    /// word.
    fn top_match(&self, prefix: &str) -> Option<&str>;

    /// Up to `k` words starting with `prefix`, in descending weight order
    /// (equal weights in ascending word order). Returns fewer than `k` words
    /// when fewer match, and an empty vector when none do or `k` is zero.
    fn top_k_matches(&self, prefix: &str, k: usize) -> Vec<&str>;
}

/// Which engine answers the queries. Selected once, at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EngineKind {
    /// Sorted vector + boundary binary search.
    Array,
    /// Character trie + best-first pruned search.
    Trie,
}

impl EngineKind {
    /// Build the selected engine from already-validated terms.
    pub fn build(self, terms: Vec<Term>) -> Box<dyn Autocomplete> {
        match self {
            EngineKind::Array => Box::new(SortedArrayIndex::from_terms(terms)),
            EngineKind::Trie => Box::new(TrieIndex::from_terms(terms)),
        }
    }
}
