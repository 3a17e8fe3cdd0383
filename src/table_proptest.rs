#![cfg(test)]

// Property tests for HashTable kept inside the crate so structural checks
// can run against the same operations the public API exposes.

use crate::hashing::{CharSum, KeyHash, WeightedCharSum};
use crate::table::HashTable;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    Mutate(usize, i32),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=12).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            3 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Put(i, v)),
            1 => idx.clone().prop_map(OpI::Remove),
            1 => idx.clone().prop_map(OpI::Get),
            1 => prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            1 => Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Structural invariants that hold between any two operations.
fn check_structure<H: KeyHash>(sut: &HashTable<H>) -> Result<(), TestCaseError> {
    let chains = sut.chain_lengths();
    prop_assert!(sut.capacity() > 0);
    prop_assert_eq!(chains.len(), sut.capacity());
    prop_assert_eq!(chains.iter().sum::<usize>(), sut.len());
    let occupied = chains.iter().filter(|&&n| n > 0).count();
    prop_assert_eq!(sut.empty_slot_count() + occupied, sut.capacity());
    prop_assert_eq!(sut.load_factor(), sut.len() as f64 / sut.capacity() as f64);
    prop_assert!(sut.load_factor() <= sut.max_load_factor());
    Ok(())
}

// State-machine equivalence against std::collections::HashMap.
// - `put` returns the model's previous value; duplicates never change len
//   or capacity.
// - A put of a new key that would exceed load 1.0 doubles capacity exactly.
// - `remove` returns the model's value and is a no-op for absent keys.
// - `get_mut` writes are visible through `get`.
// - `iter` yields each live key exactly once.
fn run_ops<H: KeyHash>(
    mut sut: HashTable<H>,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, i32> = HashMap::new();

    for op in ops {
        match op {
            OpI::Put(i, v) => {
                let k = &pool[i];
                let before_len = sut.len();
                let before_cap = sut.capacity();
                let prev = sut.put(k, v);
                prop_assert_eq!(prev, model.insert(k.clone(), v));
                if prev.is_some() {
                    prop_assert_eq!(sut.len(), before_len);
                    prop_assert_eq!(sut.capacity(), before_cap);
                } else if (before_len + 1) as f64 / before_cap as f64 > 1.0 {
                    prop_assert_eq!(sut.capacity(), before_cap * 2);
                } else {
                    prop_assert_eq!(sut.capacity(), before_cap);
                }
            }
            OpI::Remove(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.remove(k), model.remove(k));
                prop_assert!(!sut.contains_key(k));
            }
            OpI::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k), model.get(k));
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
            }
            OpI::Mutate(i, d) => {
                let k = &pool[i];
                match (sut.get_mut(k), model.get_mut(k)) {
                    (Some(sv), Some(mv)) => {
                        *sv = sv.wrapping_add(d);
                        *mv = mv.wrapping_add(d);
                    }
                    (None, None) => {}
                    (s, m) => prop_assert!(false, "presence mismatch: {:?} vs {:?}", s, m),
                }
            }
            OpI::Iterate => {
                let keys: Vec<&str> = sut.iter().map(|(k, _)| k).collect();
                let unique: BTreeSet<&str> = keys.iter().copied().collect();
                prop_assert_eq!(keys.len(), unique.len(), "iteration repeated a key");
                let m_keys: BTreeSet<&str> = model.keys().map(String::as_str).collect();
                prop_assert_eq!(unique, m_keys);
            }
        }

        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        check_structure(&sut)?;
    }
    Ok(())
}

// Collision variant: every key lands in one chain, stressing splicing.
#[derive(Clone, Copy, Default, Debug)]
struct ConstHash;
impl KeyHash for ConstHash {
    fn hash_key(&self, _key: &str) -> i32 {
        0
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn prop_state_machine_char_sum((pool, ops) in arb_scenario(), cap in 1usize..6) {
        run_ops(HashTable::with_hasher(cap, CharSum).unwrap(), &pool, ops)?;
    }

    #[test]
    fn prop_state_machine_weighted((pool, ops) in arb_scenario(), cap in 1usize..6) {
        run_ops(HashTable::with_hasher(cap, WeightedCharSum).unwrap(), &pool, ops)?;
    }

    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario(), cap in 1usize..6) {
        run_ops(HashTable::with_hasher(cap, ConstHash).unwrap(), &pool, ops)?;
    }
}
