use hashbrown::HashMap;
use proptest::prelude::*;

use super::candidate::rank;
use super::index::WordIndex;
use super::provider::{Autocomplete, AutocompleteProvider};

fn any_word() -> impl Strategy<Value = String> {
    // A small alphabet keeps shared prefixes (and truncated-comparison ties) common.
    "[a-d]{1,6}"
}

fn any_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(any_word(), 0..64)
}

fn any_fragment() -> impl Strategy<Value = String> {
    "[a-e]{0,4}"
}

fn build(words: &[String]) -> (WordIndex, HashMap<&str, u32>) {
    let mut index = WordIndex::new();
    let mut oracle = HashMap::new();
    for word in words {
        index.insert(word);
        *oracle.entry(word.as_str()).or_insert(0) += 1;
    }
    (index, oracle)
}

proptest! {
    #[test]
    fn counting_is_idempotent(word in any_word(), n in 1u32..50) {
        let mut index = WordIndex::new();
        for _ in 0..n {
            index.insert(&word);
        }
        prop_assert_eq!(index.len(), 1);
        prop_assert_eq!(index.count(&word), Some(n));
    }

    #[test]
    fn matches_agree_with_oracle(words in any_words(), fragment in any_fragment()) {
        let (index, oracle) = build(&words);
        let found = index.match_prefix(&fragment);

        let mut seen = HashMap::new();
        for c in &found {
            prop_assert!(
                c.word().starts_with(&fragment),
                "{} does not start with {:?}",
                c,
                fragment
            );
            prop_assert_eq!(Some(&c.confidence()), oracle.get(c.word()));
            prop_assert!(seen.insert(c.word(), ()).is_none(), "{} emitted twice", c);
        }

        let expected = oracle.keys().filter(|w| w.starts_with(&fragment)).count();
        prop_assert_eq!(found.len(), expected);
    }

    #[test]
    fn every_prefix_finds_its_word(words in any_words()) {
        let (index, _) = build(&words);
        for word in &words {
            for end in 0..=word.len() {
                let hits = index
                    .match_prefix(&word[..end])
                    .iter()
                    .filter(|c| c.word() == word.as_str())
                    .count();
                prop_assert_eq!(hits, 1, "prefix {:?} of {:?}", &word[..end], word);
            }
        }
    }

    #[test]
    fn empty_fragment_lists_every_word(words in any_words()) {
        let (index, oracle) = build(&words);
        let found = index.match_prefix("");
        prop_assert_eq!(found.len(), oracle.len());
        prop_assert_eq!(found.len(), index.len());
    }

    #[test]
    fn ranking_is_stable_by_confidence(words in any_words(), fragment in any_fragment()) {
        let (index, _) = build(&words);
        let collected = index.match_prefix(&fragment);
        let position: HashMap<String, usize> = collected
            .iter()
            .enumerate()
            .map(|(i, c)| (c.word().to_owned(), i))
            .collect();

        let ranked = rank(collected.clone());
        prop_assert_eq!(ranked.len(), collected.len());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].confidence() >= pair[1].confidence());
            if pair[0].confidence() == pair[1].confidence() {
                prop_assert!(position[pair[0].word()] < position[pair[1].word()]);
            }
        }
    }

    #[test]
    fn tree_keeps_search_order(words in any_words()) {
        let (index, oracle) = build(&words);
        let in_order: Vec<(&str, u32)> = index.words().collect();
        let mut expected: Vec<(&str, u32)> = oracle.into_iter().collect();
        expected.sort_unstable();
        prop_assert_eq!(in_order, expected);
        prop_assert!(index.depth() <= index.len());
    }

    #[test]
    fn passages_are_case_folded(passage in "[A-Za-z ,.!]{0,80}", fragment in any_fragment()) {
        let mut ac = Autocomplete::new();
        ac.train(&passage);
        for c in ac.get_words(&fragment) {
            prop_assert!(c.word().bytes().all(|b| b.is_ascii_lowercase()));
            prop_assert!(!c.word().is_empty());
        }
    }
}
