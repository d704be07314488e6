//! # libprefix
//!
//! Frequency-ranked prefix completion over words learned from text passages.
//!
//! Words are kept in an unbalanced binary search tree whose entries live in an
//! index-based arena. Each distinct word is stored once with the number of
//! times it was seen. A prefix query walks the tree with an explicit
//! work-list, collects every word that starts with the fragment, and ranks the
//! matches by how often they occurred (ties keep traversal order).
//!
//! ## Quick Start
//!
//! ```
//! use libprefix::prefix::{Autocomplete, AutocompleteProvider};
//!
//! let mut ac = Autocomplete::new();
//! ac.train("The thin thing thinks thoroughly.");
//! ac.train("Thinking is the thing.");
//!
//! let found = ac.get_words("thin");
//! assert_eq!(found[0].word(), "thing");
//! assert_eq!(found[0].confidence(), 2);
//! assert_eq!(found.len(), 4);
//! assert!(ac.get_words("xyz").is_empty());
//! ```
//!
//! ## Working with the index directly
//!
//! [`WordIndex`](prefix::WordIndex) takes normalized tokens and leaves ranking
//! to [`rank`](prefix::rank):
//!
//! ```
//! use libprefix::prefix::{rank, WordIndex};
//!
//! let mut index = WordIndex::new();
//! for word in ["car", "cart", "care", "car", "dog"] {
//!     index.insert(word);
//! }
//! let ranked = rank(index.match_prefix("car"));
//! assert_eq!(ranked[0].word(), "car");
//! assert_eq!(ranked[0].confidence(), 2);
//! assert_eq!(ranked.len(), 3);
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for
//!   [`Candidate`](prefix::Candidate) and
//!   [`CompleteConfig`](prefix::CompleteConfig).

#![warn(missing_docs)]

/// Word tree, ranking, tokenizing and the autocomplete façade.
pub mod prefix;
