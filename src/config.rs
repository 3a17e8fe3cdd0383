//! Construction parameters for [`HashTable`](crate::HashTable).

use crate::error::TableError;

/// Slot count used when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Average chain length that triggers a resize once exceeded.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    pub initial_capacity: usize,
    pub max_load_factor: f64,
}

impl TableConfig {
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Self::default()
        }
    }

    pub fn max_load_factor(mut self, max_load_factor: f64) -> Self {
        self.max_load_factor = max_load_factor;
        self
    }

    /// Rejects a zero slot count and non-positive or non-finite thresholds.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.initial_capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        if !self.max_load_factor.is_finite() || self.max_load_factor <= 0.0 {
            return Err(TableError::InvalidLoadFactor(self.max_load_factor));
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
        }
    }
}
