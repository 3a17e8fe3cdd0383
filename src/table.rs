//! HashTable: string keys to `i32` values with separate chaining.
//!
//! Each slot heads a chain of entries whose hashes reduce to that slot.
//! New keys are prepended to their chain. Inserting a new key that would
//! push the load factor past the threshold first doubles the slot count and
//! relinks every entry, then proceeds against the grown table.

use crate::chain::{ChainStore, Iter};
use crate::config::TableConfig;
use crate::error::TableError;
use crate::hashing::{CharSum, KeyHash};

pub struct HashTable<H = CharSum> {
    store: ChainStore,
    hasher: H,
    max_load_factor: f64,
}

impl HashTable<CharSum> {
    /// Creates a table with `capacity` empty slots using the default hash.
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        Self::with_hasher(capacity, CharSum)
    }
}

impl<H: KeyHash> HashTable<H> {
    pub fn with_hasher(capacity: usize, hasher: H) -> Result<Self, TableError> {
        Self::with_config(TableConfig::with_capacity(capacity), hasher)
    }

    pub fn with_config(config: TableConfig, hasher: H) -> Result<Self, TableError> {
        config.validate()?;
        Ok(Self {
            store: ChainStore::with_slots(config.initial_capacity),
            hasher,
            max_load_factor: config.max_load_factor,
        })
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.len() == 0
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    pub fn empty_slot_count(&self) -> usize {
        self.store.empty_slots()
    }

    /// `len / capacity` as a float.
    pub fn load_factor(&self) -> f64 {
        self.store.len() as f64 / self.store.capacity() as f64
    }

    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Stores `value` under `key`. An existing entry is overwritten in place
    /// and its old value returned; the table never grows on an overwrite.
    pub fn put(&mut self, key: &str, value: i32) -> Option<i32> {
        let hash = self.hasher.hash_key(key);

        if let Some(k) = self.store.find(hash, key) {
            let slot = self.store.value_mut(k)?;
            return Some(std::mem::replace(slot, value));
        }

        let needed = self.store.len() + 1;
        let mut capacity = self.store.capacity();
        while needed as f64 / capacity as f64 > self.max_load_factor {
            capacity = capacity
                .checked_mul(2)
                .expect("hash table capacity overflow");
        }
        if capacity != self.store.capacity() {
            log::debug!(
                "growing hash table from {} to {} slots ({} entries)",
                self.store.capacity(),
                capacity,
                self.store.len()
            );
            self.store.relink(capacity);
        }

        self.store.push_front(hash, key, value);
        None
    }

    pub fn get(&self, key: &str) -> Option<&i32> {
        let hash = self.hasher.hash_key(key);
        let k = self.store.find(hash, key)?;
        self.store.value(k)
    }

    /// Mutable access to the stored value; writes land in the table directly.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut i32> {
        let hash = self.hasher.hash_key(key);
        let k = self.store.find(hash, key)?;
        self.store.value_mut(k)
    }

    /// Removes `key` and returns its value. Absent keys are a no-op.
    pub fn remove(&mut self, key: &str) -> Option<i32> {
        let hash = self.hasher.hash_key(key);
        self.store.unlink(hash, key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        let hash = self.hasher.hash_key(key);
        self.store.find(hash, key).is_some()
    }

    /// Chain length of every slot, in slot order.
    pub fn chain_lengths(&self) -> Vec<usize> {
        (0..self.store.capacity())
            .map(|slot| self.store.chain_len(slot))
            .collect()
    }

    /// Entries in slot order, each chain from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        self.store.iter()
    }
}

impl<'a, H: KeyHash> IntoIterator for &'a HashTable<H> {
    type Item = (&'a str, &'a i32);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<H: core::fmt::Debug> core::fmt::Debug for HashTable<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashTable")
            .field("len", &self.store.len())
            .field("capacity", &self.store.capacity())
            .field("max_load_factor", &self.max_load_factor)
            .field("hasher", &self.hasher)
            .field("entries", &DebugEntries(&self.store))
            .finish()
    }
}

// Entries as a map, in iteration order.
struct DebugEntries<'a>(&'a ChainStore);

impl core::fmt::Debug for DebugEntries<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}
