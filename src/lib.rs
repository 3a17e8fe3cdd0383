//! spellmap: a separately chained string hash table and a did-you-mean
//! suggester built on top of it.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small, predictable hash table whose bucket layout is fully
//!   observable (slot count, empty slots, chain lengths, load factor), plus
//!   a dictionary lookup that proposes close words for a miss.
//! - Layers:
//!   - `ChainStore`: slot array of chain heads over a `SlotMap` node arena.
//!     Chains are singly linked by arena key; removal splices a node out by
//!     rewriting its predecessor's link.
//!   - `HashTable<H>`: key/value API over the store with a pluggable
//!     [`KeyHash`] strategy and load-factor-triggered doubling.
//!   - `suggest` / [`Dictionary`]: edit-distance scan of every key into a
//!     bounded [`RankedMatches`] buffer.
//!
//! Constraints
//! - Single-threaded: no internal locking. `HashTable` is `Send` when its
//!   strategy is, so callers share it behind their own `Mutex`.
//! - Keys are owned copies; values are `i32`.
//! - `capacity() > 0` always; construction rejects zero.
//! - `len() == sum of chain lengths`; keys are unique per chain.
//!
//! Hashing and resizing
//! - A strategy returns a raw `i32` that may be negative; the store reduces
//!   it into `[0, capacity)` by shifting negative remainders up.
//! - Each node caches its raw hash, so growth relinks nodes into the doubled
//!   slot array without calling the strategy again.
//! - Growth happens inside the `put` that needs it, before the new entry is
//!   linked. Overwriting an existing key never grows the table.
//!
//! Suggestions
//! - The default [`ReplacePolicy::FirstWorse`] replaces the first strictly
//!   worse buffered entry, which is an approximate top-5.
//!   [`ReplacePolicy::Worst`] gives an exact top-5. Ties keep the entry seen
//!   first in table iteration order.

mod chain;
pub mod config;
pub mod dictionary;
pub mod distance;
pub mod error;
pub mod hashing;
pub mod session;
pub mod suggest;
pub mod table;
mod table_proptest;
pub mod tokenize;

// Public surface
pub use chain::Iter;
pub use config::{TableConfig, DEFAULT_CAPACITY, DEFAULT_MAX_LOAD_FACTOR};
pub use dictionary::{Dictionary, Lookup, DICTIONARY_SENTINEL};
pub use distance::levenshtein;
pub use error::{Result, SpellError, TableError};
pub use hashing::{CharSum, HashStrategy, KeyHash, WeightedCharSum};
pub use session::run_session;
pub use suggest::{suggest, RankedMatches, ReplacePolicy, Suggestion, SUGGESTION_LIMIT};
pub use table::HashTable;
