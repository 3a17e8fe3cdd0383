//! Key hash strategies.
//!
//! A strategy maps a key to a raw signed hash. The table reduces that value
//! into a slot index itself, so strategies never see the capacity and may
//! return negative values once wrapping arithmetic overflows.
//!
//! Byte codes are read as signed 8-bit values, so UTF-8 continuation and
//! lead bytes (0x80..=0xFF) contribute negative codes. ASCII keys are
//! unaffected.

#[inline]
fn code(b: u8) -> i32 {
    i32::from(b as i8)
}

/// Computes the raw hash of a key.
pub trait KeyHash {
    fn hash_key(&self, key: &str) -> i32;
}

/// Sum of the key's signed byte codes.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CharSum;

impl KeyHash for CharSum {
    #[inline]
    fn hash_key(&self, key: &str) -> i32 {
        key.bytes().fold(0i32, |acc, b| acc.wrapping_add(code(b)))
    }
}

/// Position-weighted sum of byte codes: `Σ (i + 1) * code`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct WeightedCharSum;

impl KeyHash for WeightedCharSum {
    #[inline]
    fn hash_key(&self, key: &str) -> i32 {
        key.bytes().enumerate().fold(0i32, |acc, (i, b)| {
            let weight = (i as i32).wrapping_add(1);
            acc.wrapping_add(weight.wrapping_mul(code(b)))
        })
    }
}

/// Runtime-selectable strategy, for callers that pick the hash from input.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum HashStrategy {
    #[default]
    CharSum,
    WeightedCharSum,
}

impl KeyHash for HashStrategy {
    fn hash_key(&self, key: &str) -> i32 {
        match self {
            HashStrategy::CharSum => CharSum.hash_key(key),
            HashStrategy::WeightedCharSum => WeightedCharSum.hash_key(key),
        }
    }
}

impl<H: KeyHash + ?Sized> KeyHash for &H {
    fn hash_key(&self, key: &str) -> i32 {
        (**self).hash_key(key)
    }
}
