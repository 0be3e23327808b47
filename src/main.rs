use clap::Parser;
use std::collections::HashMap;
use std::error::Error;
use std::io::BufRead;

use typeahead::loader::load_terms;
use typeahead::{Autocomplete, EngineKind, SortedArrayIndex, Term};

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Query {
            file,
            prefix,
            k,
            engine,
        } => run_query(&file, &prefix, k, engine),
        Commands::Interactive { file, k, engine } => run_interactive(&file, k, engine),
        Commands::Inspect { file } => run_inspect(&file),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Weight lookup for display. The engines rank internally; the CLI only
/// needs weights back to print them next to each completion.
fn weights_by_word(terms: &[Term]) -> HashMap<String, f64> {
    terms
        .iter()
        .map(|t| (t.word().to_string(), t.weight()))
        .collect()
}

fn print_completions(
    completions: &[&str],
    weights: &HashMap<String, f64>,
    prefix: &str,
) {
    if completions.is_empty() {
        println!("{}", display::no_matches(prefix));
        return;
    }
    for (rank, word) in completions.iter().enumerate() {
        let weight = weights.get(*word).copied().unwrap_or(0.0);
        println!("{}", display::completion_row(rank + 1, weight, word));
    }
}

fn run_query(
    file: &str,
    prefix: &str,
    k: usize,
    kind: EngineKind,
) -> Result<(), Box<dyn Error>> {
    let terms = load_terms(file)?;
    let weights = weights_by_word(&terms);
    let engine = kind.build(terms);
    print_completions(&engine.top_k_matches(prefix, k), &weights, prefix);
    Ok(())
}

fn run_interactive(file: &str, k: usize, kind: EngineKind) -> Result<(), Box<dyn Error>> {
    let terms = load_terms(file)?;
    let weights = weights_by_word(&terms);
    let engine = kind.build(terms);

    let prompt = atty::is(atty::Stream::Stdin);
    if prompt {
        eprintln!("one prefix per line, Ctrl-D to quit");
    }
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let prefix = line.trim();
        print_completions(&engine.top_k_matches(prefix, k), &weights, prefix);
    }
    Ok(())
}

fn run_inspect(file: &str) -> Result<(), Box<dyn Error>> {
    let terms = load_terms(file)?;
    let loaded = terms.len();
    // Collapsing duplicates here mirrors what either engine would hold.
    let index = SortedArrayIndex::from_terms(terms);

    println!("{}", display::heading(&format!("vocabulary: {}", file)));
    println!("{}", display::stat_row("records", &loaded.to_string()));
    println!(
        "{}",
        display::stat_row("distinct words", &index.len().to_string())
    );

    if index.is_empty() {
        return Ok(());
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    let mut longest = "";
    for term in index.terms() {
        min = min.min(term.weight());
        max = max.max(term.weight());
        sum += term.weight();
        if term.word().chars().count() > longest.chars().count() {
            longest = term.word();
        }
    }
    println!(
        "{}",
        display::stat_row("weight range", &format!("{:.1} .. {:.1}", min, max))
    );
    println!(
        "{}",
        display::stat_row("mean weight", &format!("{:.1}", sum / index.len() as f64))
    );
    println!("{}", display::stat_row("longest word", longest));

    println!("{}", display::heading("heaviest terms"));
    let weights = weights_by_word(index.terms());
    print_completions(&index.top_k_matches("", 5), &weights, "");
    Ok(())
}
