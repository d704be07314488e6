use std::borrow::Cow;

/// Splits a passage into normalized tokens for a [`WordIndex`](super::index::WordIndex).
///
/// Tokens are inserted in the order they are produced. Empty tokens are
/// skipped by [`Autocomplete`](super::provider::Autocomplete).
pub trait Tokenizer {
    /// Returns the tokens of `passage`, in order.
    fn tokenize<'a>(&'a self, passage: &'a str) -> impl Iterator<Item = Cow<'a, str>> + 'a;
}

/// The default tokenizer: runs of ASCII letters, lower-cased.
///
/// Every character that is not an ASCII letter separates words, so
/// punctuation, digits, whitespace and non-ASCII letters all split tokens.
/// Tokens shorter than the configured minimum length are dropped.
///
/// ```
/// use libprefix::prefix::{AsciiWordTokenizer, Tokenizer};
///
/// let tokenizer = AsciiWordTokenizer::default();
/// let tokens: Vec<_> = tokenizer.tokenize("Speed it up NOW.").collect();
/// assert_eq!(tokens, ["speed", "it", "up", "now"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsciiWordTokenizer {
    min_len: usize,
}

impl AsciiWordTokenizer {
    /// Creates a tokenizer that drops tokens shorter than `min_len` letters.
    ///
    /// A `min_len` of 0 behaves like 1: empty fragments are always dropped.
    pub fn new(min_len: usize) -> Self {
        AsciiWordTokenizer {
            min_len: min_len.max(1),
        }
    }

    /// The shortest token this tokenizer yields.
    pub fn min_len(&self) -> usize {
        self.min_len
    }
}

impl Default for AsciiWordTokenizer {
    fn default() -> Self {
        AsciiWordTokenizer::new(1)
    }
}

impl Tokenizer for AsciiWordTokenizer {
    fn tokenize<'a>(&'a self, passage: &'a str) -> impl Iterator<Item = Cow<'a, str>> + 'a {
        passage
            .split(|ch: char| !ch.is_ascii_alphabetic())
            .filter(move |word| word.len() >= self.min_len)
            .map(fold_case)
    }
}

/// Lower-cases an ASCII word, borrowing when it already is.
fn fold_case(word: &str) -> Cow<'_, str> {
    if word.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(word.to_ascii_lowercase())
    } else {
        Cow::Borrowed(word)
    }
}
