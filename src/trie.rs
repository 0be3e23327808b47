// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The trie engine: best-first search over cached subtree bounds.
//!
//! Every node caches `subtree_max_weight`, the heaviest word anywhere in its
//! subtree. That single number makes two things cheap:
//!
//! - `top_match` just follows the bound downhill: from the prefix node, step
//!   into a child whose bound equals the current bound until the node's own
//!   weight realizes it. The invariant guarantees the walk terminates at a
//!   word.
//! - `top_k_matches` runs branch-and-bound: a max-heap frontier ordered by
//!   bound, a min-heap of the k best words found so far. The moment the
//!   weakest kept word strictly outweighs the frontier's best bound, no
//!   unexplored subtree can improve the answer and the search stops.
//!   Subtrees whose bound ties the weakest kept weight are still explored,
//!   so exact ties resolve by word just like everywhere else. Visit count
//!   is governed by the weight distribution, not vocabulary size.
//!
//! The price is paid at construction: after every insertion the bound cache
//! must be restored bottom-up along the whole path to the root. A re-inserted
//! word can *lower* a weight, and an ancestor's cached bound may have been
//! justified only by the old value - so each node on the path recomputes its
//! bound from scratch over its own weight and all children's bounds. Taking
//! the max against the changed child alone would silently lose a sibling's
//! larger bound.
//!
//! Nodes live in an arena (`Vec<Node>`); children and parent links are plain
//! indices into it. The parent link is non-owning - it exists only for the
//! upward repair walk. Ownership flows strictly root-to-leaf through the
//! children maps, so there are no cycles to leak.

use crate::engine::Autocomplete;
use crate::error::BuildError;
use crate::term::{terms_from_pairs, Term};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

/// Arena handle of the root node.
const ROOT: usize = 0;

/// One trie node: a character transition plus the cached subtree bound.
#[derive(Debug)]
struct Node {
    /// Edge label from the parent. The root holds a sentinel that never
    /// participates in a comparison.
    character: char,
    /// Arena handle of the parent; the root points at itself. Non-owning,
    /// used only to walk upward during bound repair.
    parent: usize,
    /// Child handles keyed by edge character.
    children: HashMap<char, usize>,
    /// `Some(word)` exactly when the path from the root spells a complete
    /// vocabulary word.
    word: Option<String>,
    /// Weight of the word ending here; meaningless while `word` is `None`.
    weight: f64,
    /// Max weight over all words in this subtree, `-∞` when there are none.
    subtree_max_weight: f64,
}

impl Node {
    fn root() -> Self {
        Node {
            character: '\0',
            parent: ROOT,
            children: HashMap::new(),
            word: None,
            weight: 0.0,
            subtree_max_weight: f64::NEG_INFINITY,
        }
    }

    fn child_of(parent: usize, character: char) -> Self {
        Node {
            character,
            parent,
            children: HashMap::new(),
            word: None,
            weight: 0.0,
            subtree_max_weight: f64::NEG_INFINITY,
        }
    }
}

/// Frontier entry for the best-first search, ordered by subtree bound.
///
/// The bound is an admissible upper bound on any word weight reachable
/// through the node, so a max-heap of these always expands the most
/// promising subtree next. Ties break on the arena handle to keep the
/// traversal deterministic.
struct FrontierEntry {
    bound: f64,
    node: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Bounds are maxima of validated finite weights (or -inf for the
        // empty root), so total_cmp agrees with numeric order.
        self.bound
            .total_cmp(&other.bound)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// A word-bearing node offered to the candidate set.
///
/// Ordered so that the *minimum* is the entry to evict: lowest weight first,
/// and among equal weights the lexicographically larger word, so the smaller
/// word survives eviction and ranking stays deterministic.
struct Candidate<'a> {
    weight: f64,
    word: &'a str,
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate<'_> {}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| other.word.cmp(self.word))
    }
}

/// Prefix completion over an arena-allocated character trie.
///
/// Built once, read-only afterward. Re-inserting a word updates its weight
/// in place and repairs every cached bound on the path to the root.
pub struct TrieIndex {
    nodes: Vec<Node>,
    word_count: usize,
}

impl TrieIndex {
    /// Build from parallel `words` and `weights` sequences.
    ///
    /// Fails on mismatched lengths or any negative/non-finite weight.
    pub fn new(words: Vec<String>, weights: Vec<f64>) -> Result<Self, BuildError> {
        Ok(Self::from_terms(terms_from_pairs(words, weights)?))
    }

    /// Build from already-validated terms.
    pub fn from_terms(terms: Vec<Term>) -> Self {
        let mut trie = TrieIndex {
            nodes: vec![Node::root()],
            word_count: 0,
        };
        for term in terms {
            let weight = term.weight();
            trie.insert(term.word().to_string(), weight);
        }
        trie
    }

    /// Number of distinct words in the vocabulary.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Total nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Insert a word, creating missing nodes, then restore the bound cache
    /// along the path back to the root. An existing word has its weight
    /// updated in place; no duplicate nodes are ever created.
    fn insert(&mut self, word: String, weight: f64) {
        let mut node = ROOT;
        for ch in word.chars() {
            let next = match self.nodes[node].children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::child_of(node, ch));
                    self.nodes[node].children.insert(ch, child);
                    child
                }
            };
            node = next;
        }
        if self.nodes[node].word.is_none() {
            self.word_count += 1;
        }
        self.nodes[node].weight = weight;
        self.nodes[node].word = Some(word);
        self.repair_bounds(node);
    }

    /// Recompute `subtree_max_weight` from scratch at `node` and every
    /// ancestor up to the root.
    ///
    /// Each step takes the max over the node's own weight and *all*
    /// children's bounds, not just the child that changed: after a weight
    /// decrease, the new bound may be supplied by a sibling subtree the
    /// incremental view never sees.
    fn repair_bounds(&mut self, mut node: usize) {
        loop {
            let own = if self.nodes[node].word.is_some() {
                self.nodes[node].weight
            } else {
                f64::NEG_INFINITY
            };
            let bound = self.nodes[node]
                .children
                .values()
                .map(|&child| self.nodes[child].subtree_max_weight)
                .fold(own, f64::max);
            self.nodes[node].subtree_max_weight = bound;
            if node == ROOT {
                break;
            }
            node = self.nodes[node].parent;
        }
    }

    /// Walk down from the root along `prefix`, `None` on a missing edge.
    /// The empty prefix lands on the root.
    fn node_for(&self, prefix: &str) -> Option<usize> {
        let mut node = ROOT;
        for ch in prefix.chars() {
            node = *self.nodes[node].children.get(&ch)?;
        }
        Some(node)
    }
}

impl Autocomplete for TrieIndex {
    fn top_match(&self, prefix: &str) -> Option<&str> {
        let mut node = self.node_for(prefix)?;
        let target = self.nodes[node].subtree_max_weight;
        // Only an empty vocabulary leaves a reachable node with no word
        // below it (the bare root).
        if target == f64::NEG_INFINITY {
            return None;
        }
        // Follow the bound downhill until the node itself realizes it. A
        // node's own word is a proper prefix of every word below it, so
        // stopping as soon as the weight matches also yields the
        // lexicographically smallest word among equal-weight maximizers,
        // as does taking the smallest edge character among tied children.
        loop {
            let n = &self.nodes[node];
            if n.word.is_some() && n.weight == target {
                return n.word.as_deref();
            }
            let next = n
                .children
                .iter()
                .filter(|&(_, &child)| {
                    self.nodes[child].subtree_max_weight == target
                })
                .min_by_key(|&(&ch, _)| ch)
                .map(|(_, &child)| child)?;
            node = next;
        }
    }

    fn top_k_matches(&self, prefix: &str, k: usize) -> Vec<&str> {
        if k == 0 {
            return Vec::new();
        }
        let Some(start) = self.node_for(prefix) else {
            return Vec::new();
        };

        let mut frontier = BinaryHeap::new();
        frontier.push(FrontierEntry {
            bound: self.nodes[start].subtree_max_weight,
            node: start,
        });
        // Weakest kept candidate on top; never grows past k entries.
        let mut kept: BinaryHeap<Reverse<Candidate<'_>>> = BinaryHeap::new();

        while let Some(FrontierEntry { bound, node }) = frontier.pop() {
            if kept.len() == k {
                if let Some(Reverse(weakest)) = kept.peek() {
                    // Nothing left on the frontier can beat the weakest kept
                    // word: the result set is final. A bound merely *equal*
                    // to the weakest is not prunable - its subtree may hold
                    // an equal-weight word that wins the lexicographic
                    // tie-break, so it must still be offered for eviction.
                    if weakest.weight > bound {
                        break;
                    }
                }
            }
            let n = &self.nodes[node];
            if let Some(word) = n.word.as_deref() {
                kept.push(Reverse(Candidate {
                    weight: n.weight,
                    word,
                }));
                if kept.len() > k {
                    kept.pop();
                }
            }
            for &child in n.children.values() {
                frontier.push(FrontierEntry {
                    bound: self.nodes[child].subtree_max_weight,
                    node: child,
                });
            }
        }

        let mut results: Vec<Candidate<'_>> =
            kept.into_iter().map(|Reverse(c)| c).collect();
        results.sort_by(|a, b| {
            b.weight
                .total_cmp(&a.weight)
                .then_with(|| a.word.cmp(b.word))
        });
        results.into_iter().map(|c| c.word).collect()
    }
}
