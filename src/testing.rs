// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test fixtures to avoid
//! duplication between inline tests and the `tests/` directory.

#![doc(hidden)]

use crate::term::Term;

/// Build validated terms from literal (word, weight) pairs.
///
/// Panics on invalid input - fixtures are supposed to be valid, and a panic
/// in a fixture is a test bug, not a library error path.
pub fn terms_of(pairs: &[(&str, f64)]) -> Vec<Term> {
    pairs
        .iter()
        .map(|&(word, weight)| {
            Term::new(word, weight).expect("fixture terms must be valid")
        })
        .collect()
}

/// Split literal pairs into the parallel (words, weights) construction form.
pub fn words_and_weights(pairs: &[(&str, f64)]) -> (Vec<String>, Vec<f64>) {
    let words = pairs.iter().map(|&(w, _)| w.to_string()).collect();
    let weights = pairs.iter().map(|&(_, wt)| wt).collect();
    (words, weights)
}

/// The canonical worked example: `{"air": 3, "bat": 2, "bell": 4, "boy": 1}`.
///
/// `top_k_matches("b", 2)` is `["bell", "bat"]`, `top_match("")` is `"bell"`.
pub fn classic_terms() -> Vec<Term> {
    terms_of(&[("air", 3.0), ("bat", 2.0), ("bell", 4.0), ("boy", 1.0)])
}
