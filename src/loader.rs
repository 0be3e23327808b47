// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Vocabulary loading from disk.
//!
//! Two on-disk shapes, one output: a validated `Vec<Term>` ready for either
//! engine.
//!
//! - **Term files**: one `weight<TAB>word` record per line, optionally
//!   preceded by a line holding the term count (the classic weighted-wordlist
//!   layout). Surrounding whitespace is tolerated; anything else is a parse
//!   error that names the path and line.
//! - **JSON**: an array of `{"word": …, "weight": …}` records.
//!
//! [`load_terms`] dispatches on the `.json` extension. All validation funnels
//! through [`Term::new`], so a file with a negative weight fails the same way
//! an in-memory build would.

use crate::error::BuildError;
use crate::term::Term;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for vocabulary loading failures.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(io::Error),
    /// A record could not be parsed; names the path and 1-based line number.
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
    /// The parsed records failed vocabulary validation.
    Build(BuildError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "{}", err),
            LoadError::Parse {
                path,
                line,
                message,
            } => {
                write!(f, "{}:{}: {}", path.display(), line, message)
            }
            LoadError::Build(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Parse { .. } => None,
            LoadError::Build(err) => Some(err),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<BuildError> for LoadError {
    fn from(err: BuildError) -> Self {
        LoadError::Build(err)
    }
}

/// One JSON vocabulary record.
#[derive(Deserialize)]
struct TermRecord {
    word: String,
    weight: f64,
}

/// Load a vocabulary, picking the format from the file extension:
/// `.json` parses as a JSON record array, everything else as a term file.
pub fn load_terms(path: impl AsRef<Path>) -> Result<Vec<Term>, LoadError> {
    let path = path.as_ref();
    if path.extension().is_some_and(|ext| ext == "json") {
        load_json_file(path)
    } else {
        load_term_file(path)
    }
}

/// Load a tab-separated `weight<TAB>word` term file.
///
/// A first line holding nothing but an integer is taken as the term count
/// and skipped; it is advisory and never checked against the actual count,
/// matching how such files are produced in the wild.
pub fn load_term_file(path: impl AsRef<Path>) -> Result<Vec<Term>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let mut terms = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if idx == 0 && line.parse::<usize>().is_ok() {
            continue;
        }
        let (weight_part, word_part) =
            line.split_once('\t').ok_or_else(|| LoadError::Parse {
                path: path.to_path_buf(),
                line: idx + 1,
                message: "expected 'weight<TAB>word'".to_string(),
            })?;
        let weight: f64 =
            weight_part
                .trim()
                .parse()
                .map_err(|_| LoadError::Parse {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    message: format!("invalid weight '{}'", weight_part.trim()),
                })?;
        let word = word_part.trim();
        if word.is_empty() {
            return Err(LoadError::Parse {
                path: path.to_path_buf(),
                line: idx + 1,
                message: "empty word".to_string(),
            });
        }
        terms.push(Term::new(word, weight)?);
    }
    Ok(terms)
}

/// Load a JSON array of `{"word": …, "weight": …}` records.
pub fn load_json_file(path: impl AsRef<Path>) -> Result<Vec<Term>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let records: Vec<TermRecord> =
        serde_json::from_str(&content).map_err(|err| LoadError::Parse {
            path: path.to_path_buf(),
            line: err.line(),
            message: err.to_string(),
        })?;
    records
        .into_iter()
        .map(|r| Term::new(r.word, r.weight).map_err(LoadError::from))
        .collect()
}
