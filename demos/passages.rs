//! Example: training an autocompleter on a couple of passages.
//!
//! Trains on two short passages, then prints ranked completions for a few
//! fragments and the most frequent words overall. Any file paths given on the
//! command line are trained on as well.
//!
//! Run with: cargo run --example passages [FILE...]
//! Set `RUST_LOG=debug` to see training statistics.

use std::error::Error;

use libprefix::prefix::{Autocomplete, AutocompleteProvider, CompleteConfig};

const PASSAGES: [&str; 2] = [
    "The thin thing thinks thoroughly",
    "That computer is too slow for me. Speed it up NOW. What you will do: You will write a \
     function eval that, given an environment and an AST, executes the SmallC function \
     corresponding to that AST in the given environment. The type of eval is env -> ast ->env, \
     where the first argument env is an environment, the second is the AST, and the result is \
     an environment.",
];

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut ac = Autocomplete::with_config(CompleteConfig::default().with_max_results(5));
    for passage in PASSAGES {
        ac.train(passage);
    }
    for path in std::env::args().skip(1) {
        let inserted = ac.train_from_file(&path)?;
        println!("{path}: {inserted} tokens");
    }

    println!("Completions:");
    for fragment in ["thin", "th", "e", "b", "environment"] {
        let words: Vec<String> = ac
            .get_words(fragment)
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("  {fragment}*: [{}]", words.join(", "));
    }

    let mut top: Vec<_> = ac.index().words().collect();
    top.sort_by_key(|&(_, count)| std::cmp::Reverse(count));
    println!("\nMost frequent: {:?}", &top[..top.len().min(5)]);
    println!("{:?}", ac.index());
    Ok(())
}
