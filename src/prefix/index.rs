use std::cmp::Ordering;

use smallvec::SmallVec;

use super::candidate::Candidate;
use super::entry::{Entry, EntryId, Side};
use super::entry_arena::EntryArena;

/// Work-list entries kept inline before spilling to the heap.
const INLINE_DEPTH: usize = 32;

type WorkList = SmallVec<[EntryId; INLINE_DEPTH]>;

/// A binary search tree of words and their occurrence counts.
///
/// Each distinct word is stored once; inserting it again bumps its count. The
/// tree is never rebalanced, so its shape is entirely a function of insertion
/// order: sorted input degrades it to a list, shuffled input keeps it close to
/// logarithmic depth.
///
/// # Examples
///
/// ```
/// use libprefix::prefix::WordIndex;
///
/// let mut index = WordIndex::new();
/// for word in ["the", "thin", "thing", "the"] {
///     index.insert(word);
/// }
/// assert_eq!(index.count("the"), Some(2));
///
/// let mut words: Vec<_> = index
///     .match_prefix("thin")
///     .into_iter()
///     .map(|c| c.word().to_owned())
///     .collect();
/// words.sort();
/// assert_eq!(words, ["thin", "thing"]);
/// ```
#[derive(Clone, Default)]
pub struct WordIndex {
    arena: EntryArena,
    root: Option<EntryId>,
}

impl WordIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        WordIndex {
            arena: EntryArena::new(),
            root: None,
        }
    }

    /// Records one occurrence of `word`.
    ///
    /// `word` must be a non-empty normalized token (see
    /// [`Tokenizer`](super::tokenizer::Tokenizer)); the index stores whatever
    /// it is given and orders it by bytes.
    pub fn insert(&mut self, word: &str) {
        debug_assert!(!word.is_empty(), "insert: empty word");

        let Some(mut curr) = self.root else {
            self.root = Some(self.arena.alloc(Entry::new(word)));
            return;
        };

        loop {
            let entry = &mut self.arena[curr];
            let side = match word.cmp(entry.key()) {
                Ordering::Equal => {
                    entry.bump();
                    return;
                }
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            match entry.child(side) {
                Some(next) => curr = next,
                None => {
                    let leaf = self.arena.alloc(Entry::new(word));
                    *self.arena[curr].child_mut(side) = Some(leaf);
                    return;
                }
            }
        }
    }

    /// Collects every stored word that starts with `fragment`.
    ///
    /// Results come back in traversal order, not ranked; pass them through
    /// [`rank`](super::candidate::rank) for frequency order. An empty fragment
    /// matches every word.
    ///
    /// The walk uses an explicit work-list. At each entry the fragment is
    /// compared with the key over their shared length: a strict ordering
    /// rules out one subtree, while a tie keeps both subtrees live because a
    /// truncated comparison cannot tell which side holds the extensions. A tie
    /// only yields a candidate when the key is at least as long as the
    /// fragment.
    pub fn match_prefix(&self, fragment: &str) -> Vec<Candidate> {
        let mut matches = Vec::new();
        let Some(root) = self.root else {
            return matches;
        };

        let mut work_list = WorkList::new();
        work_list.push(root);
        while let Some(id) = work_list.pop() {
            let curr = &self.arena[id];
            match curr.cmp_prefix(fragment) {
                Ordering::Less => work_list.extend(curr.left()),
                Ordering::Greater => work_list.extend(curr.right()),
                Ordering::Equal => {
                    if fragment.len() <= curr.key().len() {
                        matches.push(Candidate::from(curr));
                    }
                    work_list.extend(curr.left());
                    work_list.extend(curr.right());
                }
            }
        }
        matches
    }

    /// Returns how many times `word` was inserted, or `None` if never.
    pub fn count(&self, word: &str) -> Option<u32> {
        self.find(word).map(Entry::count)
    }

    /// Returns `true` if `word` was inserted at least once.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some()
    }

    fn find(&self, word: &str) -> Option<&Entry> {
        let mut next = self.root;
        while let Some(id) = next {
            let entry = &self.arena[id];
            next = match word.cmp(entry.key()) {
                Ordering::Equal => return Some(entry),
                Ordering::Less => entry.left(),
                Ordering::Greater => entry.right(),
            };
        }
        None
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// True if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the root entry, if any.
    pub fn root(&self) -> Option<&Entry> {
        self.root.map(|id| &self.arena[id])
    }

    /// Resolves a child link returned by [`Entry::left`] or [`Entry::right`].
    ///
    /// Returns `None` for ids that did not come from this index.
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.arena.get(id)
    }

    /// Number of entries on the longest root-to-leaf path; 0 when empty.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut work_list: SmallVec<[(EntryId, usize); INLINE_DEPTH]> =
            self.root.into_iter().map(|id| (id, 1)).collect();
        while let Some((id, depth)) = work_list.pop() {
            deepest = deepest.max(depth);
            let entry = &self.arena[id];
            work_list.extend(entry.left().map(|child| (child, depth + 1)));
            work_list.extend(entry.right().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Iterates over `(word, count)` pairs in ascending word order.
    pub fn words(&self) -> Words<'_> {
        let mut words = Words {
            index: self,
            stack: WorkList::new(),
            remaining: self.len(),
        };
        words.push_left_spine(self.root);
        words
    }
}

impl std::fmt::Debug for WordIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordIndex")
            .field("len", &self.len())
            .field("depth", &self.depth())
            .finish()
    }
}

/// In-order iterator over the words of a [`WordIndex`].
///
/// Created by [`WordIndex::words`].
#[derive(Clone)]
pub struct Words<'a> {
    index: &'a WordIndex,
    stack: WorkList,
    remaining: usize,
}

impl Words<'_> {
    fn push_left_spine(&mut self, mut next: Option<EntryId>) {
        while let Some(id) = next {
            self.stack.push(id);
            next = self.index.arena[id].left();
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = (&'a str, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let index = self.index;
        let entry = &index.arena[id];
        self.push_left_spine(entry.right());
        self.remaining -= 1;
        Some((entry.key(), entry.count()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Words<'_> {}
