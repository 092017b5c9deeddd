//! HashTable: public mapping API over `ChainTable` and `InsertionStack`.

use crate::chain_table::{self, ChainTable, Handle};
use crate::config::TableConfig;
use crate::error::{ConfigError, EmptyError};
use crate::insertion_stack::InsertionStack;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::ops::Index;
use std::collections::hash_map::RandomState;

/// A separate-chaining hash map that remembers put order.
///
/// Lookups hash the key with `S`, take it modulo the bucket count, and scan
/// that bucket's chain. The bucket count doubles when a put finds the table
/// at or above its load factor. Every put is also recorded on an insertion
/// stack so that [`HashTable::popitem`] can remove the most recently put
/// entry that is still present.
///
/// ```
/// use chain_hashmap::HashTable;
///
/// let mut table = HashTable::new();
/// table.put("a", 1);
/// table.put("b", 2);
/// assert_eq!(table.put("a", 10), Some(1));
/// assert_eq!(table.get("b"), Some(&2));
/// assert_eq!(table.popitem(), Ok(10));
/// assert_eq!(table.popitem(), Ok(2));
/// assert!(table.popitem().is_err());
/// ```
#[derive(Clone)]
pub struct HashTable<K, V, S = RandomState> {
    table: ChainTable<K, V, S>,
    stack: InsertionStack,
    config: TableConfig,
}

impl<K, V> HashTable<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty table with 100 buckets and a 0.75 load factor.
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }

    pub fn with_config(config: TableConfig) -> Result<Self, ConfigError> {
        Self::with_config_and_hasher(config, Default::default())
    }

    /// Builds a table mapping every key in `keys` to a clone of `value`.
    pub fn from_keys<I>(keys: I, value: V) -> Self
    where
        I: IntoIterator<Item = K>,
        V: Clone,
    {
        let mut table = Self::new();
        table.put_all_with(keys, value);
        table
    }
}

impl<K, V> Default for HashTable<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> HashTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Creates an empty table with the default configuration and the given
    /// hasher.
    pub fn with_hasher(hasher: S) -> Self {
        let config = TableConfig::default();
        Self {
            table: ChainTable::with_capacity_and_hasher(config.initial_capacity, hasher),
            stack: InsertionStack::new(),
            config,
        }
    }

    pub fn with_config_and_hasher(config: TableConfig, hasher: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            table: ChainTable::with_capacity_and_hasher(config.initial_capacity, hasher),
            stack: InsertionStack::new(),
            config,
        })
    }

    /// Like [`HashTable::from_keys`], with explicit construction parameters.
    pub fn from_keys_with<I>(
        keys: I,
        value: V,
        config: TableConfig,
        hasher: S,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = K>,
        V: Clone,
    {
        let mut table = Self::with_config_and_hasher(config, hasher)?;
        table.put_all_with(keys, value);
        Ok(table)
    }

    fn put_all_with<I>(&mut self, keys: I, value: V)
    where
        I: IntoIterator<Item = K>,
        V: Clone,
    {
        for key in keys {
            self.put(key, value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Current bucket count. Starts at the configured initial capacity and
    /// only ever doubles.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    pub fn load_factor(&self) -> f64 {
        self.config.load_factor
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn hasher(&self) -> &S {
        self.table.hasher()
    }

    pub fn get<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get_key_value(q).map(|(_, v)| v)
    }

    pub fn get_key_value<Q>(&self, q: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = self.table.find(q)?;
        self.table.handle_entry(handle)
    }

    pub fn get_mut<Q>(&mut self, q: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = self.table.find(q)?;
        self.table.handle_value_mut(handle)
    }

    /// Whether an entry with a key equal to `q` is present.
    ///
    /// This compares keys; an occupied bucket holding only other keys does
    /// not count.
    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.find(q).is_some()
    }

    /// Whether any entry holds a value equal to `value`.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }

    /// Inserts `key -> value`, returning the value it replaces.
    ///
    /// An existing entry for the key is removed first. The growth check runs
    /// after that removal and before the new entry is added, so overwriting
    /// can trigger a rehash when the table sits exactly at its threshold.
    /// The put is always recorded for [`HashTable::popitem`], overwrite or not.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.table.make_hash(&key);
        let previous = self.table.remove_hashed(hash, &key).map(|(_, v)| v);
        self.insert_absent(hash, key, value);
        previous
    }

    fn insert_absent(&mut self, hash: u64, key: K, value: V) -> Handle {
        if self.at_load_limit() {
            self.table.grow();
        }
        let handle = self.table.insert_hashed(hash, key, value);
        self.stack.push(handle);
        handle
    }

    fn at_load_limit(&self) -> bool {
        self.table.len() as f64 >= self.table.capacity() as f64 * self.config.load_factor
    }

    /// Removes the entry for `q` and returns its value.
    ///
    /// The insertion stack is left alone; its record for the entry goes
    /// stale and `popitem` skips it.
    pub fn pop<Q>(&mut self, q: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.pop_entry(q).map(|(_, v)| v)
    }

    pub fn pop_entry<Q>(&mut self, q: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.table.make_hash(q);
        self.table.remove_hashed(hash, q)
    }

    /// Removes the most recently put entry that is still present and returns
    /// its value.
    ///
    /// Stale insertion records met on the way are discarded, so a run of
    /// overwrites or pops costs at most one extra step each, paid here.
    ///
    /// ```
    /// use chain_hashmap::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.put(1, "one");
    /// table.put(2, "two");
    /// table.put(3, "three");
    /// table.pop(&3);
    /// table.put(1, "uno");
    /// assert_eq!(table.popitem(), Ok("uno"));
    /// assert_eq!(table.popitem(), Ok("two"));
    /// assert_eq!(table.popitem().unwrap_err().to_string(), "hash table is empty");
    /// ```
    pub fn popitem(&mut self) -> Result<V, EmptyError> {
        self.popitem_entry().map(|(_, v)| v)
    }

    pub fn popitem_entry(&mut self) -> Result<(K, V), EmptyError> {
        let table = &self.table;
        let handle = self
            .stack
            .pop_live(|h| table.contains_handle(h))
            .ok_or(EmptyError)?;
        self.table.remove(handle).ok_or(EmptyError)
    }

    /// Removes every entry and shrinks back to the initial bucket count.
    pub fn clear(&mut self) {
        let dropped = self.table.len();
        self.table.reset(self.config.initial_capacity);
        self.stack.clear();
        tracing::debug!(
            dropped,
            capacity = self.config.initial_capacity,
            "cleared hash table"
        );
    }

    /// Returns the value for `key`, first inserting `value` if the key is
    /// absent. A present key keeps its value and `value` is dropped.
    pub fn setdefault(&mut self, key: K, value: V) -> &mut V {
        let hash = self.table.make_hash(&key);
        let handle = match self.table.find_hashed(hash, &key) {
            Some(h) => h,
            None => self.insert_absent(hash, key, value),
        };
        self.table
            .handle_value_mut(handle)
            .expect("handle from find or insert must be live")
    }

    /// Value-level copy: a fresh table with the same configuration and
    /// hasher, filled by putting each entry in iteration order.
    ///
    /// The copy's bucket count starts from the initial capacity and its
    /// `popitem` order follows this table's iteration order, not its put
    /// order. Use `clone` for a structural copy that keeps both.
    pub fn copy(&self) -> Self
    where
        K: Clone,
        V: Clone,
        S: Clone,
    {
        let mut copy = Self {
            table: ChainTable::with_capacity_and_hasher(
                self.config.initial_capacity,
                self.table.hasher().clone(),
            ),
            stack: InsertionStack::new(),
            config: self.config,
        };
        for (k, v) in self.iter() {
            copy.put(k.clone(), v.clone());
        }
        copy
    }

    /// Entries in bucket order, collected.
    pub fn items(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }

    /// Entries in bucket-then-chain order. The order changes on rehash.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.table.iter(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.table.iter_mut(),
        }
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.iter_mut(),
        }
    }
}

/// Iterator over `(&K, &V)` in bucket order.
pub struct Iter<'a, K, V> {
    inner: chain_table::Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// Iterator over `(&K, &mut V)` in bucket order.
pub struct IterMut<'a, K, V> {
    inner: chain_table::IterMut<'a, K, V>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}

impl<'a, K, V, S> IntoIterator for &'a HashTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut HashTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, S> Extend<(K, V)> for HashTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::with_hasher(S::default());
        table.extend(iter);
        table
    }
}

impl<K, Q, V, S> Index<&Q> for HashTable<K, V, S>
where
    K: Eq + Hash + Borrow<Q>,
    Q: ?Sized + Eq + Hash,
    S: BuildHasher,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, V, S> PartialEq for HashTable<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    /// Same entries, regardless of bucket layout or put order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K, V, S> Eq for HashTable<K, V, S>
where
    K: Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}

/// Renders `{k: v, ...}` in bucket order.
impl<K, V, S> fmt::Debug for HashTable<K, V, S>
where
    K: fmt::Debug + Eq + Hash,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::hash::Hasher;
    use std::collections::BTreeSet;

    #[derive(Clone, Default)]
    struct ConstBuildHasher;
    struct ConstHasher;
    impl BuildHasher for ConstBuildHasher {
        type Hasher = ConstHasher;
        fn build_hasher(&self) -> Self::Hasher {
            ConstHasher
        }
    }
    impl Hasher for ConstHasher {
        fn write(&mut self, _bytes: &[u8]) {}
        fn finish(&self) -> u64 {
            0
        } // force all keys into the same bucket
    }

    fn small(capacity: usize, load_factor: f64) -> HashTable<u32, u32> {
        HashTable::with_config(
            TableConfig::new()
                .initial_capacity(capacity)
                .load_factor(load_factor),
        )
        .unwrap()
    }

    /// Invariant: distinct-key puts count each key once and get returns the
    /// last value put.
    #[test]
    fn distinct_puts_and_get() {
        let mut t = HashTable::new();
        for i in 0..50u32 {
            assert_eq!(t.put(i, i * 2), None);
        }
        assert_eq!(t.len(), 50);
        for i in 0..50u32 {
            assert_eq!(t.get(&i), Some(&(i * 2)));
        }
        assert_eq!(t.get(&50), None);
    }

    /// Invariant: overwriting keeps `len`, returns the old value, and the new
    /// value is visible.
    #[test]
    fn overwrite_keeps_len() {
        let mut t = HashTable::new();
        t.put("k".to_string(), 1);
        t.put("j".to_string(), 2);
        assert_eq!(t.put("k".to_string(), 3), Some(1));
        assert_eq!(t.len(), 2);
        assert_eq!(t.get("k"), Some(&3));
    }

    /// Invariant: growth happens once `len >= capacity * load_factor` at put
    /// time, doubles the bucket count, and keeps every key reachable.
    #[test]
    fn grows_by_doubling_at_threshold() {
        let mut t = small(4, 0.75);
        for i in 0..3 {
            t.put(i, i);
        }
        // 3 >= 4 * 0.75 is only checked on the next put.
        assert_eq!(t.capacity(), 4);
        t.put(3, 3);
        assert_eq!(t.capacity(), 8);
        for i in 4..7 {
            t.put(i, i);
        }
        assert_eq!(t.capacity(), 16);
        for i in 0..7 {
            assert_eq!(t.get(&i), Some(&i));
        }
    }

    /// Invariant: the growth check runs after the overwrite's removal, so an
    /// overwrite at the threshold does not grow but a fresh key does.
    #[test]
    fn overwrite_at_threshold_checks_after_removal() {
        let mut t = small(2, 1.0);
        t.put(0, 0);
        t.put(1, 1);
        assert_eq!(t.capacity(), 2);
        // Removal drops len to 1 < 2 before the check.
        t.put(1, 10);
        assert_eq!(t.capacity(), 2);
        t.put(2, 2);
        assert_eq!(t.capacity(), 4);
        assert_eq!(t.len(), 3);
    }

    /// Invariant: pop returns the value and shrinks `len`; popping an absent
    /// key changes nothing.
    #[test]
    fn pop_present_and_absent() {
        let mut t = HashTable::new();
        t.put(1, "a");
        t.put(2, "b");
        assert_eq!(t.pop(&1), Some("a"));
        assert_eq!(t.len(), 1);
        assert_eq!(t.pop(&1), None);
        assert_eq!(t.pop(&9), None);
        assert_eq!(t.len(), 1);
        assert_eq!(t.pop_entry(&2), Some((2, "b")));
        assert!(t.is_empty());
    }

    /// Invariant: popitem skips entries removed by pop and by overwrite.
    #[test]
    fn popitem_skips_stale_records() {
        let mut t = HashTable::new();
        t.put('a', 1);
        t.put('b', 2);
        t.put('c', 3);
        t.put('a', 4);
        t.pop(&'c');
        assert_eq!(t.popitem_entry(), Ok(('a', 4)));
        assert_eq!(t.popitem_entry(), Ok(('b', 2)));
        assert_eq!(t.popitem_entry(), Err(EmptyError));
        assert_eq!(t.popitem(), Err(EmptyError));
    }

    /// Invariant: clear empties the table, restores the initial bucket count,
    /// and leaves no insertion records behind.
    #[test]
    fn clear_resets_to_initial_capacity() {
        let mut t = small(2, 0.5);
        for i in 0..10 {
            t.put(i, i);
        }
        assert!(t.capacity() > 2);
        t.clear();
        assert_eq!(t.len(), 0);
        assert_eq!(t.capacity(), 2);
        for i in 0..10 {
            assert_eq!(t.get(&i), None);
        }
        assert_eq!(t.popitem(), Err(EmptyError));
        t.put(42, 1);
        assert_eq!(t.popitem(), Ok(1));
    }

    /// Invariant: `contains_key` compares keys. A colliding absent key is not
    /// reported present just because its bucket is occupied.
    #[test]
    fn contains_key_ignores_bucket_occupancy() {
        let mut t: HashTable<&str, i32, ConstBuildHasher> =
            HashTable::with_hasher(ConstBuildHasher);
        t.put("a", 1);
        assert!(t.contains_key("a"));
        assert!(!t.contains_key("b"));
        t.put("b", 2);
        assert_eq!(t.get("a"), Some(&1));
        assert_eq!(t.get("b"), Some(&2));
    }

    /// Invariant: `contains_value` finds a value under any key.
    #[test]
    fn contains_value_scans_all_entries() {
        let t: HashTable<u32, &str> = [(1, "x"), (2, "y")].into_iter().collect();
        assert!(t.contains_value(&"x"));
        assert!(t.contains_value(&"y"));
        assert!(!t.contains_value(&"z"));
    }

    /// Invariant: setdefault inserts only when absent and records the put.
    #[test]
    fn setdefault_inserts_once() {
        let mut t = HashTable::new();
        assert_eq!(*t.setdefault("k", 1), 1);
        assert_eq!(*t.setdefault("k", 2), 1);
        *t.setdefault("k", 3) += 10;
        assert_eq!(t.get("k"), Some(&11));
        assert_eq!(t.len(), 1);
        assert_eq!(t.popitem(), Ok(11));
        assert_eq!(t.popitem(), Err(EmptyError));
    }

    /// Invariant: `Option` values are stored as-is; `None` as a value is
    /// distinct from a missing key.
    #[test]
    fn none_value_is_not_absence() {
        let mut t: HashTable<&str, Option<i32>> = HashTable::from_keys(["a", "b"], None);
        assert_eq!(t.len(), 2);
        assert_eq!(t.get("a"), Some(&None));
        assert_eq!(t.get("c"), None);
        assert!(t.contains_key("b"));
        assert_eq!(t.put("a", Some(1)), Some(None));
        assert_eq!(t.len(), 2);
        assert_eq!(t.popitem(), Ok(Some(1)));
        assert_eq!(t.popitem(), Ok(None));
    }

    /// Invariant: `from_keys_with` validates its configuration and maps every
    /// key to the value.
    #[test]
    fn from_keys_with_config() {
        let t = HashTable::from_keys_with(
            ["a", "b", "c"],
            7,
            TableConfig::new().initial_capacity(1).load_factor(1.0),
            RandomState::new(),
        )
        .unwrap();
        assert_eq!(t.len(), 3);
        for k in ["a", "b", "c"] {
            assert_eq!(t[k], 7);
        }
        assert_eq!(t.capacity(), 4);

        let bad = HashTable::<&str, i32>::from_keys_with(
            ["a"],
            1,
            TableConfig::new().initial_capacity(0),
            RandomState::new(),
        );
        assert_eq!(bad.err(), Some(ConfigError::ZeroCapacity));
    }

    /// Invariant: `copy` carries entries and configuration but starts from the
    /// initial bucket count; `clone` keeps layout and popitem order.
    #[test]
    fn copy_and_clone() {
        let mut t = small(2, 0.5);
        for i in 0..6 {
            t.put(i, i * i);
        }
        let c = t.copy();
        assert_eq!(c, t);
        assert_eq!(c.config(), t.config());
        assert_eq!(c.len(), 6);

        let mut structural = t.clone();
        assert_eq!(structural.capacity(), t.capacity());
        let order: Vec<u32> = core::iter::from_fn(|| structural.popitem().ok()).collect();
        assert_eq!(order, vec![25, 16, 9, 4, 1, 0]);
        assert_eq!(t.len(), 6);
    }

    /// Invariant: keys, values and items agree with iteration, entry for entry.
    #[test]
    fn views_follow_iteration_order() {
        let mut t = HashTable::new();
        for i in 0..20u32 {
            t.put(i, i + 100);
        }
        let items: Vec<(u32, u32)> = t.items().into_iter().map(|(k, v)| (*k, *v)).collect();
        let keys: Vec<u32> = t.keys().copied().collect();
        let values: Vec<u32> = t.values().copied().collect();
        assert_eq!(items.len(), 20);
        assert_eq!(keys, items.iter().map(|p| p.0).collect::<Vec<_>>());
        assert_eq!(values, items.iter().map(|p| p.1).collect::<Vec<_>>());
        assert_eq!(t.keys().len(), 20);

        for v in t.values_mut() {
            *v -= 100;
        }
        let distinct: BTreeSet<u32> = t.values().copied().collect();
        assert_eq!(distinct, (0..20).collect());
        for (k, v) in &t {
            assert_eq!(k, v);
        }
    }

    /// Invariant: Debug prints a map literal in iteration order.
    #[test]
    fn debug_renders_map() {
        let mut t: HashTable<&str, i32, ConstBuildHasher> =
            HashTable::with_hasher(ConstBuildHasher);
        assert_eq!(format!("{:?}", t), "{}");
        t.put("a", 1);
        t.put("b", 2);
        assert_eq!(format!("{:?}", t), r#"{"a": 1, "b": 2}"#);
    }

    #[test]
    #[should_panic(expected = "no entry found for key")]
    fn index_panics_on_missing_key() {
        let t: HashTable<u32, u32> = HashTable::new();
        let _ = t[&1];
    }
}
