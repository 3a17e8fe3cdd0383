//! ChainStore: slot array of chain heads over a node arena.
//!
//! Every entry lives in a `SlotMap` and links to the next entry of its
//! chain by arena key. Each node caches the raw hash it was inserted with,
//! so relinking during a resize never calls back into the hash strategy.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub(crate) struct NodeKey;
}

#[derive(Debug)]
struct Node {
    key: Box<str>,
    value: i32,
    hash: i32,
    next: Option<NodeKey>,
}

#[derive(Debug)]
pub(crate) struct ChainStore {
    slots: Vec<Option<NodeKey>>,
    nodes: SlotMap<NodeKey, Node>,
}

/// Reduces a raw hash into `[0, capacity)`, shifting negative remainders up.
#[inline]
pub(crate) fn slot_index(hash: i32, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    let capacity = capacity as i64;
    let mut index = i64::from(hash) % capacity;
    if index < 0 {
        index += capacity;
    }
    index as usize
}

impl ChainStore {
    pub(crate) fn with_slots(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            nodes: SlotMap::with_key(),
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Every node in the arena is linked into exactly one chain.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn find(&self, hash: i32, key: &str) -> Option<NodeKey> {
        let mut cursor = self.slots[slot_index(hash, self.capacity())];
        while let Some(k) = cursor {
            let node = &self.nodes[k];
            if &*node.key == key {
                return Some(k);
            }
            cursor = node.next;
        }
        None
    }

    pub(crate) fn value(&self, k: NodeKey) -> Option<&i32> {
        self.nodes.get(k).map(|n| &n.value)
    }

    pub(crate) fn value_mut(&mut self, k: NodeKey) -> Option<&mut i32> {
        self.nodes.get_mut(k).map(|n| &mut n.value)
    }

    /// Links a new node at the head of its chain. The caller has already
    /// checked that `key` is absent.
    pub(crate) fn push_front(&mut self, hash: i32, key: &str, value: i32) -> NodeKey {
        let slot = slot_index(hash, self.capacity());
        let next = self.slots[slot];
        let k = self.nodes.insert(Node {
            key: key.into(),
            value,
            hash,
            next,
        });
        self.slots[slot] = Some(k);
        k
    }

    /// Splices the node holding `key` out of its chain and returns its value.
    pub(crate) fn unlink(&mut self, hash: i32, key: &str) -> Option<i32> {
        let slot = slot_index(hash, self.capacity());
        let mut prev: Option<NodeKey> = None;
        let mut cursor = self.slots[slot];
        while let Some(k) = cursor {
            let node = &self.nodes[k];
            let next = node.next;
            if &*node.key == key {
                match prev {
                    None => self.slots[slot] = next,
                    Some(p) => self.nodes[p].next = next,
                }
                return self.nodes.remove(k).map(|n| n.value);
            }
            prev = Some(k);
            cursor = next;
        }
        None
    }

    /// Replaces the slot array with `capacity` empty slots and relinks every
    /// node by its cached hash. Chain order is not preserved.
    pub(crate) fn relink(&mut self, capacity: usize) {
        let old = std::mem::replace(&mut self.slots, vec![None; capacity]);
        for head in old {
            let mut cursor = head;
            while let Some(k) = cursor {
                let node = &mut self.nodes[k];
                cursor = node.next;
                let slot = slot_index(node.hash, capacity);
                node.next = self.slots[slot];
                self.slots[slot] = Some(k);
            }
        }
    }

    pub(crate) fn empty_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    pub(crate) fn chain_len(&self, slot: usize) -> usize {
        let mut n = 0;
        let mut cursor = self.slots[slot];
        while let Some(k) = cursor {
            n += 1;
            cursor = self.nodes[k].next;
        }
        n
    }

    pub(crate) fn iter(&self) -> Iter<'_> {
        Iter {
            store: self,
            slot: 0,
            cursor: None,
        }
    }
}

/// Walks slots in index order and each chain from head to tail.
pub struct Iter<'a> {
    store: &'a ChainStore,
    slot: usize,
    cursor: Option<NodeKey>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a i32);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(k) = self.cursor {
                let node = &self.store.nodes[k];
                self.cursor = node.next;
                return Some((&*node.key, &node.value));
            }
            self.cursor = *self.store.slots.get(self.slot)?;
            self.slot += 1;
        }
    }
}
