//! Error types returned by `HashTable`.

use thiserror::Error;

/// Returned by `popitem` when no live entry remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("hash table is empty")]
pub struct EmptyError;

/// Rejected construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("initial capacity must be at least 1")]
    ZeroCapacity,
    #[error("load factor must be in (0, 1], got {0}")]
    InvalidLoadFactor(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(EmptyError.to_string(), "hash table is empty");
        assert_eq!(
            ConfigError::ZeroCapacity.to_string(),
            "initial capacity must be at least 1"
        );
        assert_eq!(
            ConfigError::InvalidLoadFactor(1.5).to_string(),
            "load factor must be in (0, 1], got 1.5"
        );
    }
}
