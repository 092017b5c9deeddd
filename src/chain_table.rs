//! ChainTable: separate-chaining structural layer with stable handles.
//!
//! Entries live in a generational slot arena; each bucket is a chain of
//! slot keys. A `Handle` names one inserted entry and stops resolving once
//! that entry is removed, even if its slot is later reused.

use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use slotmap::{DefaultKey, SecondaryMap, SlotMap};
use std::collections::hash_map::RandomState;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Handle(DefaultKey);

impl Handle {
    pub(crate) fn new(k: DefaultKey) -> Self {
        Handle(k)
    }
    pub(crate) fn raw_handle(&self) -> DefaultKey {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
    hash: u64,
}

#[derive(Clone)]
pub struct ChainTable<K, V, S = RandomState> {
    hasher: S,
    buckets: Vec<Vec<DefaultKey>>,
    slots: SlotMap<DefaultKey, Entry<K, V>>, // storage using generational keys
}

#[inline]
fn bucket_index(hash: u64, capacity: usize) -> usize {
    (hash % capacity as u64) as usize
}

fn empty_buckets(capacity: usize) -> Vec<Vec<DefaultKey>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Vec::new);
    buckets
}

/// Iterator over entries in bucket-then-chain order.
pub struct Iter<'a, K, V> {
    buckets: core::slice::Iter<'a, Vec<DefaultKey>>,
    chain: core::slice::Iter<'a, DefaultKey>,
    slots: &'a SlotMap<DefaultKey, Entry<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (Handle, &'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(&k) = self.chain.next() {
                if let Some(e) = self.slots.get(k) {
                    self.remaining -= 1;
                    return Some((Handle::new(k), &e.key, &e.value));
                }
                continue;
            }
            self.chain = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// Iterator over mutable entries, in the same order as `Iter`.
pub struct IterMut<'a, K, V> {
    it: std::vec::IntoIter<(Handle, &'a K, &'a mut V)>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (Handle, &'a K, &'a mut V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K, V, S> ChainTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// `capacity` is the bucket count and must be non-zero.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        debug_assert!(capacity > 0, "bucket count must be non-zero");
        Self {
            hasher,
            buckets: empty_buckets(capacity.max(1)),
            slots: SlotMap::with_key(),
        }
    }

    pub(crate) fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn find<Q>(&self, q: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.find_hashed(self.make_hash(q), q)
    }

    /// Scans the chain for `hash`; the first equal key wins.
    pub(crate) fn find_hashed<Q>(&self, hash: u64, q: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.buckets[bucket_index(hash, self.capacity())]
            .iter()
            .copied()
            .find(|&k| {
                self.slots
                    .get(k)
                    .map(|e| e.key.borrow() == q)
                    .unwrap_or(false)
            })
            .map(Handle::new)
    }

    /// Appends an entry to the end of its chain. The caller guarantees that
    /// no live entry has an equal key.
    pub(crate) fn insert_hashed(&mut self, hash: u64, key: K, value: V) -> Handle {
        let idx = bucket_index(hash, self.capacity());
        let k = self.slots.insert(Entry { key, value, hash });
        self.buckets[idx].push(k);
        Handle::new(k)
    }

    pub fn remove(&mut self, handle: Handle) -> Option<(K, V)> {
        let k = handle.raw_handle();

        // Remove slot
        let entry = self.slots.remove(k)?;

        // Unlink from its chain, keeping the order of the rest
        let idx = bucket_index(entry.hash, self.buckets.len());
        let chain = &mut self.buckets[idx];
        let pos = chain.iter().position(|&kk| kk == k);
        debug_assert!(pos.is_some(), "live slot missing from its bucket");
        if let Some(pos) = pos {
            chain.remove(pos);
        }

        Some((entry.key, entry.value))
    }

    pub(crate) fn remove_hashed<Q>(&mut self, hash: u64, q: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let handle = self.find_hashed(hash, q)?;
        self.remove(handle)
    }

    /// Doubles the bucket count and redistributes every entry by its stored
    /// hash. Buckets are drained in index order, chains front to back.
    pub(crate) fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity * 2;
        let old = core::mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        for k in old.into_iter().flatten() {
            if let Some(e) = self.slots.get(k) {
                self.buckets[bucket_index(e.hash, new_capacity)].push(k);
            }
        }
        tracing::debug!(
            old_capacity,
            new_capacity,
            len = self.len(),
            "rehashed chain table"
        );
    }

    /// Drops every entry and replaces the buckets with `capacity` empty ones.
    pub(crate) fn reset(&mut self, capacity: usize) {
        self.slots.clear();
        self.buckets = empty_buckets(capacity.max(1));
    }

    pub(crate) fn contains_handle(&self, h: Handle) -> bool {
        self.slots.contains_key(h.raw_handle())
    }

    pub(crate) fn handle_entry(&self, h: Handle) -> Option<(&K, &V)> {
        self.slots.get(h.raw_handle()).map(|e| (&e.key, &e.value))
    }

    pub(crate) fn handle_value_mut(&mut self, h: Handle) -> Option<&mut V> {
        self.slots.get_mut(h.raw_handle()).map(|e| &mut e.value)
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: [].iter(),
            slots: &self.slots,
            remaining: self.slots.len(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        let mut by_slot: SecondaryMap<DefaultKey, &mut Entry<K, V>> =
            SecondaryMap::with_capacity(self.slots.len());
        for (k, e) in self.slots.iter_mut() {
            by_slot.insert(k, e);
        }
        let mut ordered = Vec::with_capacity(by_slot.len());
        for &k in self.buckets.iter().flatten() {
            if let Some(e) = by_slot.remove(k) {
                let Entry { key, value, .. } = e;
                ordered.push((Handle::new(k), &*key, value));
            }
        }
        IterMut {
            it: ordered.into_iter(),
        }
    }
}
