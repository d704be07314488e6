/// Ranked candidates and the ranking step.
pub mod candidate;
/// Configuration for [`Autocomplete`].
pub mod config;
/// Tree entries and their ids.
pub mod entry;
/// Index-based entry storage.
pub(crate) mod entry_arena;
/// Errors from reader and file training.
pub mod error;
/// The word tree: insertion, prefix queries and inspection.
pub mod index;
/// The caller-facing autocompleter.
pub mod provider;
/// Turning passages into normalized tokens.
pub mod tokenizer;

pub use candidate::{rank, Candidate};
pub use config::CompleteConfig;
pub use entry::{Entry, EntryId, Side};
pub use error::TrainError;
pub use index::{WordIndex, Words};
pub use provider::{Autocomplete, AutocompleteProvider};
pub use tokenizer::{AsciiWordTokenizer, Tokenizer};

#[cfg(test)]
mod proptests;
