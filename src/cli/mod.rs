// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the typeahead command-line interface.
//!
//! Three subcommands: `query` for a one-shot prefix lookup, `interactive`
//! for a read-a-prefix-per-line loop, and `inspect` for vocabulary
//! statistics. Both query commands take `--engine` to pick the sorted-array
//! or trie implementation; the answers are identical, the complexity
//! profiles are not.

pub mod display;

use clap::{Parser, Subcommand};
use typeahead::EngineKind;

#[derive(Parser)]
#[command(
    name = "typeahead",
    about = "Weighted prefix completion over a fixed vocabulary",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the top-k completions of a prefix
    Query {
        /// Vocabulary file: 'weight<TAB>word' lines, or a JSON record array
        file: String,

        /// Prefix to complete
        prefix: String,

        /// Maximum number of completions to print
        #[arg(short, long, default_value = "10")]
        k: usize,

        /// Engine to answer with
        #[arg(long, value_enum, default_value_t = EngineKind::Trie)]
        engine: EngineKind,
    },

    /// Read one prefix per line from stdin and print completions
    Interactive {
        /// Vocabulary file: 'weight<TAB>word' lines, or a JSON record array
        file: String,

        /// Maximum number of completions per prefix
        #[arg(short, long, default_value = "10")]
        k: usize,

        /// Engine to answer with
        #[arg(long, value_enum, default_value_t = EngineKind::Trie)]
        engine: EngineKind,
    },

    /// Show vocabulary statistics
    Inspect {
        /// Vocabulary file: 'weight<TAB>word' lines, or a JSON record array
        file: String,
    },
}
