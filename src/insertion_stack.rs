//! InsertionStack: one record per put, in put order.
//!
//! Records are never removed when their entry goes away; an overwrite or
//! a `pop` just leaves a stale record behind. Stale records are discarded
//! when `pop_live` walks past them.

use crate::chain_table::Handle;
use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub(crate) struct InsertionStack {
    records: VecDeque<Handle>,
}

impl InsertionStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, h: Handle) {
        self.records.push_back(h);
    }

    /// Records held, stale ones included.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Pops from the tail until `is_live` accepts a record. Every rejected
    /// record is dropped for good. Returns `None` once the stack is exhausted.
    pub fn pop_live<F>(&mut self, mut is_live: F) -> Option<Handle>
    where
        F: FnMut(Handle) -> bool,
    {
        while let Some(h) = self.records.pop_back() {
            if is_live(h) {
                return Some(h);
            }
            tracing::trace!(handle = ?h, "discarding stale insertion record");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::{DefaultKey, SlotMap};

    fn handles(n: usize) -> (SlotMap<DefaultKey, ()>, Vec<Handle>) {
        let mut slots = SlotMap::new();
        let hs = (0..n).map(|_| Handle::new(slots.insert(()))).collect();
        (slots, hs)
    }

    /// Invariant: live records come back newest first.
    #[test]
    fn pops_newest_first() {
        let (slots, hs) = handles(3);
        let mut s = InsertionStack::new();
        for &h in &hs {
            s.push(h);
        }
        let live = |h: Handle| slots.contains_key(h.raw_handle());
        assert_eq!(s.pop_live(live), Some(hs[2]));
        assert_eq!(s.pop_live(live), Some(hs[1]));
        assert_eq!(s.pop_live(live), Some(hs[0]));
        assert_eq!(s.pop_live(live), None);
    }

    /// Invariant: stale records above a live one are discarded by the same
    /// call and never returned later.
    #[test]
    fn skips_and_discards_stale_records() {
        let (mut slots, hs) = handles(4);
        let mut s = InsertionStack::new();
        for &h in &hs {
            s.push(h);
        }
        slots.remove(hs[3].raw_handle());
        slots.remove(hs[2].raw_handle());

        assert_eq!(s.pop_live(|h| slots.contains_key(h.raw_handle())), Some(hs[1]));
        assert_eq!(s.len(), 1);
        assert_eq!(s.pop_live(|h| slots.contains_key(h.raw_handle())), Some(hs[0]));
        assert_eq!(s.pop_live(|h| slots.contains_key(h.raw_handle())), None);
        assert_eq!(s.len(), 0);
    }

    /// Invariant: a stack of only stale records is drained to empty.
    #[test]
    fn all_stale_drains_to_empty() {
        let (_slots, hs) = handles(3);
        let mut s = InsertionStack::new();
        for &h in &hs {
            s.push(h);
            s.push(h);
        }
        assert_eq!(s.len(), 6);
        assert_eq!(s.pop_live(|_| false), None);
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn clear_drops_records() {
        let (_slots, hs) = handles(2);
        let mut s = InsertionStack::new();
        s.push(hs[0]);
        s.push(hs[1]);
        s.clear();
        assert_eq!(s.len(), 0);
        assert_eq!(s.pop_live(|_| true), None);
    }
}
