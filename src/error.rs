// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for vocabulary construction.
//!
//! Every error here is a deterministic input-validation failure: bad data in,
//! error out, nothing to retry. A failed build produces no partial index.
//! Absence of a match during a query is *not* an error - queries report it
//! through `Option::None` or an empty result vector.

use std::fmt;

/// Error type for vocabulary construction failures.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// Weight is negative, NaN, or infinite. Weights participate in every
    /// ordering the engines rely on, so anything outside `[0, ∞)` is
    /// rejected at the boundary.
    InvalidWeight { word: String, weight: f64 },
    /// The parallel `words` and `weights` sequences disagree in length.
    MismatchedLengths { words: usize, weights: usize },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::InvalidWeight { word, weight } => {
                write!(f, "invalid weight {} for word '{}'", weight, word)
            }
            BuildError::MismatchedLengths { words, weights } => {
                write!(f, "words.len() {} != weights.len() {}", words, weights)
            }
        }
    }
}

impl std::error::Error for BuildError {}
