//! Construction parameters for `HashTable`.

use crate::error::ConfigError;

/// Bucket count a table starts with when none is given.
pub const DEFAULT_INITIAL_CAPACITY: usize = 100;

/// Fill ratio at which a table doubles its bucket count.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Initial capacity and growth threshold of a table.
///
/// The hasher is passed separately so that `TableConfig` stays `Copy`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    pub initial_capacity: usize,
    pub load_factor: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Checks `initial_capacity >= 1` and `0 < load_factor <= 1`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        // NaN fails both comparisons.
        if !(self.load_factor > 0.0 && self.load_factor <= 1.0) {
            return Err(ConfigError::InvalidLoadFactor(self.load_factor));
        }
        Ok(())
    }
}
