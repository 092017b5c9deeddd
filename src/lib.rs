//! chain-hashmap: a single-threaded, separate-chaining hash map that can
//! remove its most recently put entry.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a plain mutable mapping (get/put/pop, membership, views) whose
//!   bucket layout and growth policy are explicit, plus `popitem`, which
//!   removes the most recently put entry that is still present.
//! - Layers:
//!   - ChainTable<K, V, S>: structural layer. Entries live in a slot arena
//!     with generational keys; buckets are chains of slot keys. Returns
//!     stable handles and walks entries in bucket-then-chain order.
//!   - InsertionStack: one handle per put, in put order. Not a set and
//!     never cleaned eagerly; stale handles are dropped when `popitem`
//!     walks past them.
//!   - HashTable<K, V, S>: public API combining the two.
//!
//! Growth
//! - Index of a key is `hash mod capacity`, where capacity is the bucket
//!   count. A put removes any existing entry for its key, then doubles the
//!   bucket count if `len >= capacity * load_factor`, then appends the new
//!   entry to its chain. Capacity never shrinks except through `clear`,
//!   which restores the initial bucket count.
//! - Each entry stores its `u64` hash, so a rehash never calls `K: Hash`.
//!
//! Absence and membership
//! - Missing keys are `None`; a stored value is never mistaken for absence,
//!   including `V = Option<T>` holding `None`.
//! - `contains_key` compares keys within the bucket. Bucket occupancy alone
//!   does not imply membership.
//!
//! Copies
//! - `copy()` re-puts every entry into a fresh table with the same
//!   configuration and hasher. `Clone` is structural and keeps the bucket
//!   layout and `popitem` order.
//!
//! Notes and non-goals
//! - Mutation takes `&mut self`; there is no interior mutability or
//!   locking. Share across threads the usual way (e.g. behind a `Mutex`).
//! - No persistence or serialization.
//! - Rehash and `clear` emit `tracing` debug events; stale insertion
//!   records discarded by `popitem` emit trace events.

pub mod chain_table;
mod config;
mod error;
mod hash_table;
mod hash_table_proptest;
mod insertion_stack;

// Public surface
pub use config::{TableConfig, DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR};
pub use error::{ConfigError, EmptyError};
pub use hash_table::{HashTable, Iter, IterMut, Keys, Values, ValuesMut};
