use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, trace};

use super::candidate::{rank, Candidate};
use super::config::CompleteConfig;
use super::error::TrainError;
use super::index::WordIndex;
use super::tokenizer::{AsciiWordTokenizer, Tokenizer};

/// Something that learns words from passages and completes fragments.
pub trait AutocompleteProvider {
    /// Learns every word of `passage`.
    fn train(&mut self, passage: &str);

    /// Returns the trained words starting with `fragment`, most frequent
    /// first.
    fn get_words(&self, fragment: &str) -> Vec<Candidate>;
}

/// A frequency-ranked autocompleter backed by a [`WordIndex`].
///
/// # Examples
///
/// ```
/// use libprefix::prefix::{Autocomplete, AutocompleteProvider};
///
/// let mut ac = Autocomplete::new();
/// ac.train("The thin thing thinks thoroughly");
/// ac.train("The third thing.");
///
/// let words = ac.get_words("thi");
/// assert_eq!(words[0].word(), "thing");
/// assert_eq!(words[0].confidence(), 2);
/// assert!(words.iter().all(|c| c.word().starts_with("thi")));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Autocomplete<T = AsciiWordTokenizer> {
    index: WordIndex,
    tokenizer: T,
    config: CompleteConfig,
}

impl Autocomplete {
    /// Creates an untrained autocompleter with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CompleteConfig::default())
    }

    /// Creates an untrained autocompleter using the default tokenizer set up
    /// from `config`.
    pub fn with_config(config: CompleteConfig) -> Self {
        let tokenizer = AsciiWordTokenizer::new(config.min_token_len);
        Self::with_tokenizer(tokenizer, config)
    }
}

impl<T: Tokenizer> Autocomplete<T> {
    /// Creates an untrained autocompleter with a custom tokenizer.
    ///
    /// `config.min_token_len` only applies to the default tokenizer; a custom
    /// tokenizer decides for itself which tokens to yield.
    pub fn with_tokenizer(tokenizer: T, config: CompleteConfig) -> Self {
        Autocomplete {
            index: WordIndex::new(),
            tokenizer,
            config,
        }
    }

    /// The underlying index.
    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    /// The active configuration.
    pub fn config(&self) -> &CompleteConfig {
        &self.config
    }

    /// Number of distinct words learned so far.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True if no word has been learned yet.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Inserts every non-empty token of `passage`, returning how many were
    /// inserted.
    fn learn(&mut self, passage: &str) -> usize {
        let mut inserted = 0;
        for token in self.tokenizer.tokenize(passage).filter(|t| !t.is_empty()) {
            self.index.insert(&token);
            inserted += 1;
        }
        inserted
    }

    /// Trains on every line of `reader`.
    ///
    /// Returns the number of tokens inserted. Lines are read into a single
    /// reused buffer.
    ///
    /// # Errors
    ///
    /// Returns [`TrainError::Read`] if reading fails or the input is not valid
    /// UTF-8. Lines read before the failure stay trained.
    pub fn train_from_reader<R: BufRead>(&mut self, mut reader: R) -> Result<usize, TrainError> {
        let mut inserted = 0;
        let mut buf = String::with_capacity(80);
        loop {
            buf.clear();
            if reader.read_line(&mut buf)? == 0 {
                break;
            }
            inserted += self.learn(&buf);
        }
        debug!(
            "trained {inserted} tokens from reader, {} distinct words",
            self.len()
        );
        Ok(inserted)
    }

    /// Trains on the contents of the text file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`TrainError::Open`] if the file cannot be opened, otherwise
    /// the errors of [`train_from_reader`](Self::train_from_reader).
    pub fn train_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize, TrainError> {
        let path = path.as_ref();
        debug!("training from {}", path.display());
        let file = File::open(path).map_err(|source| TrainError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.train_from_reader(BufReader::new(file))
    }
}

impl<T: Tokenizer> AutocompleteProvider for Autocomplete<T> {
    fn train(&mut self, passage: &str) {
        let inserted = self.learn(passage);
        debug!("trained {inserted} tokens, {} distinct words", self.len());
    }

    fn get_words(&self, fragment: &str) -> Vec<Candidate> {
        let mut ranked = rank(self.index.match_prefix(fragment));
        trace!("fragment {fragment:?} matched {} words", ranked.len());
        if let Some(max_results) = self.config.max_results {
            ranked.truncate(max_results);
        }
        ranked
    }
}
