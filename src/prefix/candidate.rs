use std::cmp::Reverse;
use std::fmt;

use super::entry::Entry;

/// A word returned by a prefix query, paired with how often it was seen.
///
/// The confidence is a snapshot of the entry's count at query time; training
/// the index afterwards does not change candidates already handed out.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    word: String,
    confidence: u32,
}

impl Candidate {
    /// Creates a candidate.
    pub fn new(word: impl Into<String>, confidence: u32) -> Self {
        Candidate {
            word: word.into(),
            confidence,
        }
    }

    /// The completed word.
    #[inline]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Number of times the word occurred in the trained passages.
    #[inline]
    pub fn confidence(&self) -> u32 {
        self.confidence
    }

    /// Splits the candidate into its word and confidence.
    pub fn into_parts(self) -> (String, u32) {
        (self.word, self.confidence)
    }
}

impl From<&Entry> for Candidate {
    fn from(entry: &Entry) -> Self {
        Candidate::new(entry.key(), entry.count())
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" ({})", self.word, self.confidence)
    }
}

/// Orders candidates by descending confidence.
///
/// The sort is stable: candidates with equal confidence keep the order they
/// had in `candidates`, which for query results is the traversal order of
/// [`WordIndex::match_prefix`](super::index::WordIndex::match_prefix).
///
/// ```
/// use libprefix::prefix::{rank, Candidate};
///
/// let ranked = rank(vec![
///     Candidate::new("thin", 1),
///     Candidate::new("the", 3),
///     Candidate::new("thing", 1),
/// ]);
/// let words: Vec<_> = ranked.iter().map(|c| c.word()).collect();
/// assert_eq!(words, ["the", "thin", "thing"]);
/// ```
pub fn rank(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by_key(|c| Reverse(c.confidence));
    candidates
}

#[cfg(test)]
mod test {
    use super::*;

    fn words(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.word()).collect()
    }

    #[test]
    fn display_quotes_word() {
        assert_eq!(Candidate::new("thin", 2).to_string(), "\"thin\" (2)");
    }

    #[test]
    fn from_entry_copies_count() {
        let mut entry = Entry::new("the");
        entry.bump();
        let c = Candidate::from(&entry);
        entry.bump();
        assert_eq!(c, Candidate::new("the", 2));
        assert_eq!(entry.count(), 3);
    }

    #[test]
    fn rank_empty() {
        assert!(rank(Vec::new()).is_empty());
    }

    #[test]
    fn rank_descending() {
        let ranked = rank(vec![
            Candidate::new("a", 1),
            Candidate::new("b", 5),
            Candidate::new("c", 3),
        ]);
        assert_eq!(words(&ranked), ["b", "c", "a"]);
    }

    #[test]
    fn rank_keeps_ties_in_input_order() {
        let ranked = rank(vec![
            Candidate::new("zeta", 2),
            Candidate::new("alpha", 1),
            Candidate::new("mid", 2),
            Candidate::new("beta", 1),
            Candidate::new("top", 4),
        ]);
        assert_eq!(words(&ranked), ["top", "zeta", "mid", "alpha", "beta"]);
    }

    #[test]
    fn into_parts() {
        let (word, confidence) = Candidate::new("thinks", 7).into_parts();
        assert_eq!(word, "thinks");
        assert_eq!(confidence, 7);
    }
}
