//! A growable, index-addressed arena for tree entries.
//!
//! Entries never move out of the arena and are never freed, so an
//! [`EntryId`] handed out by [`EntryArena::alloc`] stays valid for the
//! arena's lifetime. Children are linked by id instead of by reference, which
//! keeps the whole tree plain owned data: cloneable, `Send` and `Sync`.

use std::ops::{Index, IndexMut};

use super::entry::{Entry, EntryId};

#[derive(Clone, Debug, Default)]
pub(crate) struct EntryArena {
    entries: Vec<Entry>,
}

impl EntryArena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        EntryArena {
            entries: Vec::new(),
        }
    }

    /// Stores `entry` and returns its id.
    pub fn alloc(&mut self, entry: Entry) -> EntryId {
        let id = EntryId::new(self.entries.len());
        self.entries.push(entry);
        id
    }

    /// Returns the entry for `id`, or `None` if the id was not minted here.
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(id.index())
    }

    /// Returns the number of entries allocated in this arena.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Index<EntryId> for EntryArena {
    type Output = Entry;

    #[inline]
    fn index(&self, id: EntryId) -> &Entry {
        &self.entries[id.index()]
    }
}

impl IndexMut<EntryId> for EntryArena {
    #[inline]
    fn index_mut(&mut self, id: EntryId) -> &mut Entry {
        &mut self.entries[id.index()]
    }
}
