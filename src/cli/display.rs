// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the typeahead CLI.
//!
//! Respects `NO_COLOR` for the purists and non-TTY detection for pipelines:
//! `typeahead query words.txt ba | head` gets plain text, an interactive
//! session gets the colors.

/// ANSI reset / style codes.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

pub const CYAN: &str = "\x1b[36m";
pub const YELLOW: &str = "\x1b[33m";

/// Check if colors should be used (TTY detection).
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply styles if stdout is a color-capable TTY, otherwise pass through.
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// A section heading: bold cyan.
pub fn heading(text: &str) -> String {
    styled(&[BOLD, CYAN], text)
}

/// A ranked completion line: dim rank, right-aligned weight, bold word.
pub fn completion_row(rank: usize, weight: f64, word: &str) -> String {
    format!(
        "{}  {}  {}",
        styled(&[DIM], &format!("{:>3}.", rank)),
        styled(&[YELLOW], &format!("{:>12.1}", weight)),
        styled(&[BOLD], word)
    )
}

/// A label/value statistics line for `inspect`.
pub fn stat_row(label: &str, value: &str) -> String {
    format!("  {}  {}", styled(&[DIM], &format!("{:<16}", label)), value)
}

/// The no-matches notice, dim so it reads as an aside.
pub fn no_matches(prefix: &str) -> String {
    styled(&[DIM], &format!("no completions for '{}'", prefix))
}
