// HashTable integration suite.
//
// Each test states the behavior verified. Core invariants exercised:
// - Retrieval: `get(k)` returns the latest value put under `k` until removed.
// - Uniqueness: a second put of the same key updates in place.
// - Size: distinct keys inserted minus keys removed.
// - Growth: the insert that would exceed load 1.0 doubles capacity first.
// - Accounting: empty + occupied slots == capacity; load is float division.
use spellmap::{
    CharSum, HashStrategy, HashTable, KeyHash, TableConfig, TableError, WeightedCharSum,
};

#[derive(Clone, Copy, Debug, Default)]
struct SameSlot;
impl KeyHash for SameSlot {
    fn hash_key(&self, _key: &str) -> i32 {
        42
    }
}

fn fill<H: KeyHash>(t: &mut HashTable<H>, n: usize) -> Vec<String> {
    let keys: Vec<String> = (0..n).map(|i| format!("word{i}")).collect();
    for (i, k) in keys.iter().enumerate() {
        t.put(k, i as i32);
    }
    keys
}

// Test: values survive many growth steps under both built-in hashes.
#[test]
fn values_survive_growth_with_both_hashes() {
    for strategy in [HashStrategy::CharSum, HashStrategy::WeightedCharSum] {
        let mut t = HashTable::with_hasher(1, strategy).unwrap();
        let keys = fill(&mut t, 500);
        assert_eq!(t.len(), 500);
        assert_eq!(t.capacity(), 512);
        for (i, k) in keys.iter().enumerate() {
            assert_eq!(t.get(k), Some(&(i as i32)), "{strategy:?} lost {k}");
        }
    }
}

// Test: capacity doubles exactly once at the 1.0 boundary and latest values win.
#[test]
fn growth_boundary_and_latest_value() {
    let mut t = HashTable::new(3).unwrap();
    t.put("a", 1);
    t.put("b", 2);
    t.put("a", 11);
    t.put("c", 3);
    assert_eq!(t.capacity(), 3);
    assert_eq!(t.load_factor(), 1.0);

    t.put("d", 4);
    assert_eq!(t.capacity(), 6);
    assert_eq!(t.get("a"), Some(&11));
    assert_eq!(t.get("b"), Some(&2));
    assert_eq!(t.get("c"), Some(&3));
    assert_eq!(t.get("d"), Some(&4));
}

// Test: repeated puts of one key never grow size or capacity.
#[test]
fn repeated_put_of_same_key() {
    let mut t = HashTable::new(1).unwrap();
    for v in 0..100 {
        t.put("same", v);
    }
    assert_eq!(t.len(), 1);
    assert_eq!(t.capacity(), 1);
    assert_eq!(t.get("same"), Some(&99));
}

// Test: size tracks distinct inserts minus successful removes.
#[test]
fn size_is_inserted_minus_removed() {
    let mut t = HashTable::new(4).unwrap();
    let keys = fill(&mut t, 20);
    for k in keys.iter().step_by(3) {
        assert!(t.remove(k).is_some());
    }
    // Removing twice is a no-op the second time.
    assert!(t.remove(&keys[0]).is_none());
    assert_eq!(t.len(), 20 - keys.iter().step_by(3).count());
}

// Test: three keys forced into one chain; removing the middle keeps the rest.
#[test]
fn forced_collision_remove_middle() {
    let mut t = HashTable::with_hasher(10, SameSlot).unwrap();
    t.put("a", 1);
    t.put("b", 2);
    t.put("c", 3);
    assert_eq!(t.empty_slot_count(), 9);

    t.remove("b");
    assert!(!t.contains_key("b"));
    assert!(t.contains_key("a"));
    assert!(t.contains_key("c"));
    assert_eq!(t.len(), 2);
}

// Test: head and tail removal in a forced chain, then the sole survivor.
#[test]
fn forced_collision_remove_head_tail_sole() {
    let mut t = HashTable::with_hasher(10, SameSlot).unwrap();
    for (i, k) in ["a", "b", "c"].iter().enumerate() {
        t.put(k, i as i32);
    }
    // Chain order is c -> b -> a since new keys are prepended.
    let order: Vec<&str> = t.iter().map(|(k, _)| k).collect();
    assert_eq!(order, ["c", "b", "a"]);

    assert_eq!(t.remove("c"), Some(2));
    assert_eq!(t.remove("a"), Some(0));
    assert_eq!(t.iter().map(|(k, _)| k).collect::<Vec<_>>(), ["b"]);
    assert_eq!(t.remove("b"), Some(1));
    assert!(t.is_empty());
    assert_eq!(t.empty_slot_count(), t.capacity());
}

// Test: put then remove restores size and membership.
#[test]
fn put_remove_round_trip() {
    let mut t = HashTable::new(8).unwrap();
    fill(&mut t, 5);
    let before = t.len();
    t.put("transient", 9);
    t.remove("transient");
    assert!(!t.contains_key("transient"));
    assert_eq!(t.len(), before);
}

// Test: empty-slot accounting and chain totals stay consistent.
#[test]
fn slot_accounting() {
    let mut t = HashTable::with_hasher(64, WeightedCharSum).unwrap();
    fill(&mut t, 40);
    let chains = t.chain_lengths();
    let occupied = chains.iter().filter(|&&n| n > 0).count();
    assert_eq!(t.empty_slot_count() + occupied, t.capacity());
    assert_eq!(chains.iter().sum::<usize>(), t.len());
}

// Test: load factor is float division, not integer division.
#[test]
fn load_factor_is_fractional() {
    let mut t = HashTable::new(3).unwrap();
    t.put("x", 0);
    assert!((t.load_factor() - 1.0 / 3.0).abs() < f64::EPSILON);
    t.put("y", 0);
    assert!((t.load_factor() - 2.0 / 3.0).abs() < f64::EPSILON);
}

// Test: caller writes through `get_mut` are seen by later lookups.
#[test]
fn get_mut_is_live() {
    let mut t = HashTable::new(2).unwrap();
    t.put("count", 0);
    for _ in 0..3 {
        if let Some(v) = t.get_mut("count") {
            *v += 1;
        }
    }
    assert_eq!(t.get("count"), Some(&3));
}

// Test: rejected configurations.
#[test]
fn invalid_configs_rejected() {
    assert!(matches!(HashTable::new(0), Err(TableError::ZeroCapacity)));
    let cfg = TableConfig::with_capacity(8).max_load_factor(0.0);
    assert!(matches!(
        HashTable::with_config(cfg, CharSum),
        Err(TableError::InvalidLoadFactor(_))
    ));
}

// Test: a borrowed strategy works as a strategy.
#[test]
fn strategy_by_reference() {
    let strategy = WeightedCharSum;
    let mut t = HashTable::with_hasher(4, &strategy).unwrap();
    t.put("ref", 1);
    assert!(t.contains_key("ref"));
    assert_eq!(t.hasher().hash_key("ab"), WeightedCharSum.hash_key("ab"));
}
