use std::cmp::Ordering;

/// Handle to an [`Entry`] allocated in a [`WordIndex`](super::index::WordIndex).
///
/// Ids are only minted by the index that owns the entry; looking an id up in a
/// different index is meaningless (but never unsafe).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(usize);

impl EntryId {
    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        EntryId(index)
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// Which child link of an entry to follow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Keys ordered before the parent key.
    Left,
    /// Keys ordered after the parent key.
    Right,
}

/// A node of the word tree: one distinct word and how often it has been seen.
///
/// Every key in the `left` subtree orders before `key`, every key in the
/// `right` subtree after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    key: Box<str>,
    count: u32,
    left: Option<EntryId>,
    right: Option<EntryId>,
}

impl Entry {
    /// Creates a leaf entry for a word seen once.
    pub(crate) fn new(key: &str) -> Self {
        Entry {
            key: key.into(),
            count: 1,
            left: None,
            right: None,
        }
    }

    /// The normalized word stored in this entry.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Number of times the word has been inserted.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// The left child, if any.
    #[inline]
    pub fn left(&self) -> Option<EntryId> {
        self.left
    }

    /// The right child, if any.
    #[inline]
    pub fn right(&self) -> Option<EntryId> {
        self.right
    }

    /// Returns the child on `side`.
    #[inline]
    pub fn child(&self, side: Side) -> Option<EntryId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<EntryId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Records one more occurrence of the word.
    pub(crate) fn bump(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    /// Compares `fragment` against the key over their shared length only.
    ///
    /// `Less` means the fragment orders before this key, so only the left
    /// subtree can hold words starting with it; `Greater` means only the right
    /// subtree can. `Equal` does not imply the key starts with the fragment when
    /// the key is the shorter of the two; see [`Entry::starts_with`].
    ///
    /// The comparison runs on bytes, so fragments with non-ASCII characters are
    /// accepted without splitting a code point.
    #[inline]
    pub fn cmp_prefix(&self, fragment: &str) -> Ordering {
        let shared = fragment.len().min(self.key.len());
        fragment.as_bytes()[..shared].cmp(&self.key.as_bytes()[..shared])
    }

    /// True if the key begins with `fragment`.
    #[inline]
    pub fn starts_with(&self, fragment: &str) -> bool {
        self.key.starts_with(fragment)
    }
}
