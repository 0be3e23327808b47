//! Weighted prefix completion with two interchangeable engines.
//!
//! Given a one-time bulk load of (word, weight) pairs, answer two queries:
//! the single heaviest word starting with a prefix (`top_match`), or the `k`
//! heaviest in descending weight order (`top_k_matches`). The vocabulary is
//! immutable after construction; re-inserting a word only updates its weight.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌──────────────────┐
//! │  term.rs   │────▶│    array.rs      │──┐
//! │ (Term, the │     │ (SortedArrayIndex│  │   ┌─────────────┐
//! │ orderings) │     │  + boundary.rs)  │  ├──▶│  engine.rs  │
//! │            │────▶│    trie.rs       │  │   │(Autocomplete)│
//! └────────────┘     │   (TrieIndex)    │──┘   └─────────────┘
//!                    └──────────────────┘
//! ```
//!
//! Two engines, one contract, no shared data:
//!
//! - [`SortedArrayIndex`] keeps every term in one lexicographically sorted
//!   vector. A query runs two boundary binary searches ([`boundary`]) to pin
//!   the matching range, then weight-sorts just that range.
//! - [`TrieIndex`] keeps a character trie where every node caches the max
//!   weight in its subtree. A query runs best-first branch-and-bound over
//!   those bounds, visiting only as many nodes as the weight distribution
//!   forces it to.
//!
//! # Usage
//!
//! ```
//! use typeahead::{Autocomplete, SortedArrayIndex, TrieIndex};
//!
//! let words = vec!["air".into(), "bat".into(), "bell".into(), "boy".into()];
//! let weights = vec![3.0, 2.0, 4.0, 1.0];
//!
//! let index = SortedArrayIndex::new(words.clone(), weights.clone())?;
//! assert_eq!(index.top_k_matches("b", 2), vec!["bell", "bat"]);
//!
//! let trie = TrieIndex::new(words, weights)?;
//! assert_eq!(trie.top_match("b"), Some("bell"));
//! # Ok::<(), typeahead::BuildError>(())
//! ```

// Module declarations
mod array;
pub mod boundary;
mod engine;
mod error;
pub mod loader;
mod term;
pub mod testing;
mod trie;

// Re-exports for public API
pub use array::SortedArrayIndex;
pub use engine::{Autocomplete, EngineKind};
pub use error::BuildError;
pub use loader::LoadError;
pub use term::{
    prefix_order, reverse_weight_order, terms_from_pairs, weight_order, Term,
};
pub use trie::TrieIndex;
