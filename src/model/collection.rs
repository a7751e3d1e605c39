//! Keyed arena used by the commander aggregate.
//!
//! Entries live contiguously in a `Vec`. A `HashMap` maps each key to a [`Handle`] holding
//! the entry's slot and the collection generation at the time the map was built. Removing an
//! entry shifts the slots after it, so every structural removal rebuilds the whole map in one
//! pass and bumps the generation; handles taken before the removal then resolve to `None`
//! instead of pointing at a different entry.

use std::{collections::HashMap, hash::Hash};

/// Generation-tagged reference to an entry in an [`IndexedCollection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    slot: usize,
    generation: u32,
}

#[derive(Debug, Clone)]
pub struct IndexedCollection<K, T> {
    entries: Vec<T>,
    index: HashMap<K, Handle>,
    generation: u32,
    key_of: fn(&T) -> K,
}

impl<K, T> IndexedCollection<K, T>
where
    K: Copy + Eq + Hash,
{
    pub fn new(key_of: fn(&T) -> K) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            generation: 0,
            key_of,
        }
    }

    /// Build from loaded rows. A later row with a duplicate key replaces the earlier one.
    pub fn from_vec(entries: Vec<T>, key_of: fn(&T) -> K) -> Self {
        let mut collection = Self::new(key_of);
        collection.extend(entries);
        collection
    }

    /// Upsert every entry in order.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = T>) {
        for entry in entries {
            self.upsert(entry);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.iter().map(self.key_of)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn handle(&self, key: &K) -> Option<Handle> {
        self.index.get(key).copied()
    }

    pub fn resolve(&self, handle: Handle) -> Option<&T> {
        if handle.generation != self.generation {
            return None;
        }
        self.entries.get(handle.slot)
    }

    pub fn resolve_mut(&mut self, handle: Handle) -> Option<&mut T> {
        if handle.generation != self.generation {
            return None;
        }
        self.entries.get_mut(handle.slot)
    }

    pub fn get(&self, key: &K) -> Option<&T> {
        let handle = self.handle(key)?;
        self.resolve(handle)
    }

    /// Mutable access to an entry. Callers must not change the entry's key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut T> {
        let handle = self.handle(key)?;
        self.resolve_mut(handle)
    }

    /// Insert a new entry or replace the entry with the same key.
    ///
    /// Appending does not move existing entries, so outstanding handles stay valid.
    pub fn upsert(&mut self, entry: T) -> Handle {
        let key = (self.key_of)(&entry);

        if let Some(handle) = self.handle(&key) {
            self.entries[handle.slot] = entry;
            return handle;
        }

        let handle = Handle {
            slot: self.entries.len(),
            generation: self.generation,
        };
        self.entries.push(entry);
        self.index.insert(key, handle);
        handle
    }

    pub fn remove(&mut self, key: &K) -> Option<T> {
        let handle = self.handle(key)?;
        let removed = self.entries.remove(handle.slot);
        self.rebuild_index();
        Some(removed)
    }

    /// Remove every entry whose key is in `keys`, rebuilding the index once.
    pub fn remove_many(&mut self, keys: &[K]) -> Vec<T> {
        let key_of = self.key_of;
        let (removed, kept): (Vec<T>, Vec<T>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| keys.contains(&key_of(entry)));

        self.entries = kept;
        if !removed.is_empty() {
            self.rebuild_index();
        }
        removed
    }

    fn rebuild_index(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.index.clear();

        for (slot, entry) in self.entries.iter().enumerate() {
            self.index.insert(
                (self.key_of)(entry),
                Handle {
                    slot,
                    generation: self.generation,
                },
            );
        }
    }
}
