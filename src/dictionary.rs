//! Dictionary: an owned word table plus membership and suggestion lookup.

use std::io::Read;

use crate::error::Result;
use crate::hashing::{CharSum, KeyHash};
use crate::suggest::{suggest, RankedMatches, ReplacePolicy};
use crate::table::HashTable;
use crate::tokenize::words;

/// Value stored for every dictionary word; only the keys matter.
pub const DICTIONARY_SENTINEL: i32 = -1;

/// Outcome of checking one query word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Known,
    Unknown(RankedMatches),
}

#[derive(Debug)]
pub struct Dictionary<H = CharSum> {
    table: HashTable<H>,
    policy: ReplacePolicy,
}

impl<H: KeyHash> Dictionary<H> {
    pub fn new(table: HashTable<H>) -> Self {
        Self {
            table,
            policy: ReplacePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ReplacePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ReplacePolicy {
        self.policy
    }

    pub fn table(&self) -> &HashTable<H> {
        &self.table
    }

    pub fn insert(&mut self, word: &str) {
        self.table.put(word, DICTIONARY_SENTINEL);
    }

    /// Tokenizes `reader` and inserts every word. Returns the number of
    /// words read, duplicates included.
    pub fn load<R: Read>(&mut self, reader: R) -> Result<usize> {
        let mut read = 0;
        for word in words(reader) {
            self.insert(&word?);
            read += 1;
        }
        log::debug!(
            "loaded {} words ({} distinct, {} slots, load {:.3})",
            read,
            self.table.len(),
            self.table.capacity(),
            self.table.load_factor()
        );
        Ok(read)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.table.contains_key(word)
    }

    /// Membership first; on a miss, the closest words by edit distance.
    /// `query` is compared verbatim, so fold case before calling.
    pub fn check(&self, query: &str) -> Lookup {
        if self.table.contains_key(query) {
            Lookup::Known
        } else {
            Lookup::Unknown(suggest(&self.table, query, self.policy))
        }
    }
}
