//! Did-you-mean suggestions.
//!
//! [`suggest`] scans every key of a table once, scoring each against the
//! query with [`levenshtein`], and folds the candidates into a bounded
//! [`RankedMatches`] buffer. Nothing is sorted or collected along the way;
//! a key is copied only when the buffer accepts it.

use crate::distance::levenshtein;
use crate::hashing::KeyHash;
use crate::table::HashTable;

/// Number of suggestions kept per query.
pub const SUGGESTION_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: String,
    pub distance: usize,
}

/// How a candidate displaces an entry once the buffer is full.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReplacePolicy {
    /// Replace the first entry, in buffer order, whose distance is strictly
    /// greater than the candidate's. This is not a true top-k: a close
    /// candidate may evict a good entry while a worse one survives later in
    /// the buffer.
    #[default]
    FirstWorse,
    /// Replace the entry with the greatest distance (the first such entry
    /// on ties) when the candidate is strictly better. Keeps the true best
    /// `SUGGESTION_LIMIT` matches, first-seen winning ties.
    Worst,
}

/// Fixed-capacity buffer of the best candidates seen so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedMatches {
    slots: [Option<Suggestion>; SUGGESTION_LIMIT],
    policy: ReplacePolicy,
}

impl RankedMatches {
    pub fn new(policy: ReplacePolicy) -> Self {
        Self {
            slots: Default::default(),
            policy,
        }
    }

    pub fn policy(&self) -> ReplacePolicy {
        self.policy
    }

    /// Offers a candidate. The first empty slot takes it; otherwise the
    /// policy picks a strictly worse entry to replace. Returns whether the
    /// candidate was kept.
    pub fn offer(&mut self, word: &str, distance: usize) -> bool {
        let target = match self.slots.iter().position(Option::is_none) {
            Some(empty) => Some(empty),
            None => match self.policy {
                ReplacePolicy::FirstWorse => self
                    .slots
                    .iter()
                    .position(|s| s.as_ref().is_some_and(|m| m.distance > distance)),
                ReplacePolicy::Worst => self.worst_slot().filter(|&i| {
                    self.slots[i]
                        .as_ref()
                        .is_some_and(|m| m.distance > distance)
                }),
            },
        };

        match target {
            Some(i) => {
                self.slots[i] = Some(Suggestion {
                    word: word.to_owned(),
                    distance,
                });
                true
            }
            None => false,
        }
    }

    fn worst_slot(&self) -> Option<usize> {
        let mut worst: Option<(usize, usize)> = None;
        for (i, slot) in self.slots.iter().enumerate() {
            if let Some(m) = slot {
                if worst.map_or(true, |(_, d)| m.distance > d) {
                    worst = Some((i, m.distance));
                }
            }
        }
        worst.map(|(i, _)| i)
    }

    /// Raw buffer, empty slots included.
    pub fn slots(&self) -> &[Option<Suggestion>] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Filled entries in buffer order.
    pub fn to_ordered_sequence(&self) -> Vec<Suggestion> {
        self.slots.iter().flatten().cloned().collect()
    }

    /// Filled entries sorted by ascending distance; buffer order breaks ties.
    pub fn into_sorted(self) -> Vec<Suggestion> {
        let mut out: Vec<Suggestion> = self.slots.into_iter().flatten().collect();
        out.sort_by_key(|s| s.distance);
        out
    }
}

impl Default for RankedMatches {
    fn default() -> Self {
        Self::new(ReplacePolicy::default())
    }
}

/// Scores every key in `table` against `query` and returns the ranked buffer.
pub fn suggest<H: KeyHash>(
    table: &HashTable<H>,
    query: &str,
    policy: ReplacePolicy,
) -> RankedMatches {
    let mut ranked = RankedMatches::new(policy);
    for (key, _) in table.iter() {
        ranked.offer(key, levenshtein(query, key));
    }
    log::trace!(
        "scored {} keys against {:?}, kept {}",
        table.len(),
        query,
        ranked.len()
    );
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distances(r: &RankedMatches) -> Vec<Option<usize>> {
        r.slots().iter().map(|s| s.as_ref().map(|m| m.distance)).collect()
    }

    fn filled(policy: ReplacePolicy, ds: [usize; SUGGESTION_LIMIT]) -> RankedMatches {
        let mut r = RankedMatches::new(policy);
        for (i, d) in ds.into_iter().enumerate() {
            assert!(r.offer(&format!("w{i}"), d));
        }
        r
    }

    #[test]
    fn fills_empty_slots_in_order() {
        let mut r = RankedMatches::default();
        assert!(r.is_empty());
        r.offer("a", 9);
        r.offer("b", 1);
        assert_eq!(distances(&r), [Some(9), Some(1), None, None, None]);
        assert_eq!(r.len(), 2);
    }

    /// Invariant: FirstWorse replaces the first strictly worse entry, not the worst.
    #[test]
    fn first_worse_replaces_first_strictly_greater() {
        let mut r = filled(ReplacePolicy::FirstWorse, [3, 5, 1, 1, 1]);
        assert!(r.offer("new", 2));
        assert_eq!(distances(&r), [Some(2), Some(5), Some(1), Some(1), Some(1)]);
        assert_eq!(r.slots()[0].as_ref().unwrap().word, "new");
    }

    #[test]
    fn worst_replaces_maximum() {
        let mut r = filled(ReplacePolicy::Worst, [3, 5, 1, 5, 1]);
        assert!(r.offer("new", 2));
        assert_eq!(distances(&r), [Some(3), Some(2), Some(1), Some(5), Some(1)]);
    }

    /// Invariant: equal distances never displace an earlier entry.
    #[test]
    fn ties_keep_first_seen() {
        for policy in [ReplacePolicy::FirstWorse, ReplacePolicy::Worst] {
            let mut r = filled(policy, [2, 2, 2, 2, 2]);
            assert!(!r.offer("late", 2));
            assert!(r.to_ordered_sequence().iter().all(|s| s.word != "late"));
        }
    }

    #[test]
    fn worse_candidate_dropped() {
        let mut r = filled(ReplacePolicy::FirstWorse, [1, 1, 1, 1, 1]);
        assert!(!r.offer("far", 7));
        assert_eq!(r.len(), SUGGESTION_LIMIT);
    }

    #[test]
    fn into_sorted_is_stable() {
        let mut r = RankedMatches::default();
        r.offer("c", 2);
        r.offer("a", 1);
        r.offer("b", 2);
        let words: Vec<String> = r.into_sorted().into_iter().map(|s| s.word).collect();
        assert_eq!(words, ["a", "c", "b"]);
    }

    #[test]
    fn suggest_on_small_dictionary_keeps_everything() {
        let mut t = HashTable::new(2).unwrap();
        t.put("cat", -1);
        t.put("dog", -1);
        let r = suggest(&t, "cot", ReplacePolicy::FirstWorse);
        assert_eq!(r.len(), 2);
        assert!(r.slots()[2..].iter().all(Option::is_none));
    }
}
