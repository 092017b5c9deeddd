#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can check
// internal layout (bucket count) alongside the public behavior.

use crate::config::TableConfig;
use crate::error::EmptyError;
use crate::hash_table::HashTable;
use hashbrown::HashMap;
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::fmt;

// Key newtype with Borrow<str> to exercise borrowed lookup.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
struct Key(String);
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
impl std::borrow::Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
    Pop(usize),
    Get(usize),
    PopItem,
    SetDefault(usize, i32),
    Contains(String),
    ContainsValue(i32),
    Clear,
    Iterate,
}

fn key_from(pool: &[String], i: usize) -> Key {
    Key(pool[i].clone())
}

fn arb_config() -> impl Strategy<Value = TableConfig> {
    (1usize..=8, proptest::sample::select(vec![0.25, 0.5, 0.75, 1.0])).prop_map(|(cap, lf)| {
        TableConfig::new().initial_capacity(cap).load_factor(lf)
    })
}

fn arb_scenario() -> impl Strategy<Value = (TableConfig, Vec<String>, Vec<OpI>)> {
    let pools = proptest::collection::vec("[a-z]{0,5}", 1..=12);
    (arb_config(), pools).prop_flat_map(|(cfg, pool)| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            4 => (idx.clone(), -20i32..20).prop_map(|(i, v)| OpI::Put(i, v)),
            2 => idx.clone().prop_map(OpI::Pop),
            1 => idx.clone().prop_map(OpI::Get),
            2 => Just(OpI::PopItem),
            1 => (idx.clone(), -20i32..20).prop_map(|(i, v)| OpI::SetDefault(i, v)),
            1 => prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            1 => (-20i32..20).prop_map(OpI::ContainsValue),
            1 => Just(OpI::Clear),
            1 => Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (cfg, pool.clone(), ops))
    })
}

// Model popitem: newest put record whose key is still present in the model.
fn model_popitem(model: &mut HashMap<Key, i32>, order: &mut Vec<Key>) -> Option<(Key, i32)> {
    while let Some(k) = order.pop() {
        if let Some(v) = model.remove(&k) {
            return Some((k, v));
        }
    }
    None
}

// Property: State-machine equivalence against a hashbrown::HashMap plus a
// put-order log.
// Invariants exercised across random operation sequences:
// - put returns the replaced value; len tracks distinct live keys.
// - get/contains_key parity with the model, including borrowed `&str` lookup.
// - pop returns the model's value and leaves the put log alone.
// - popitem returns the newest live put, skipping stale records, and fails
//   with EmptyError exactly when the model is empty.
// - capacity is initial * 2^n and never shrinks except through clear.
// - iteration yields each live entry exactly once.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((cfg, pool, ops) in arb_scenario()) {
        let mut sut: HashTable<Key, i32> = HashTable::with_config(cfg).unwrap();
        let mut model: HashMap<Key, i32> = HashMap::new();
        let mut order: Vec<Key> = Vec::new();
        let mut last_capacity = sut.capacity();

        for op in ops {
            match op {
                OpI::Put(i, v) => {
                    let k = key_from(&pool, i);
                    let prev = sut.put(k.clone(), v);
                    prop_assert_eq!(prev, model.insert(k.clone(), v));
                    order.push(k);
                }
                OpI::Pop(i) => {
                    let k = key_from(&pool, i);
                    prop_assert_eq!(sut.pop(&k), model.remove(&k));
                }
                OpI::Get(i) => {
                    let k = key_from(&pool, i);
                    prop_assert_eq!(sut.get(&k), model.get(&k));
                    prop_assert_eq!(sut.get(k.0.as_str()), model.get(&k));
                }
                OpI::PopItem => {
                    let expected = model_popitem(&mut model, &mut order);
                    match sut.popitem_entry() {
                        Ok(pair) => prop_assert_eq!(Some(pair), expected),
                        Err(EmptyError) => prop_assert!(expected.is_none()),
                    }
                }
                OpI::SetDefault(i, v) => {
                    let k = key_from(&pool, i);
                    if !model.contains_key(&k) {
                        model.insert(k.clone(), v);
                        order.push(k.clone());
                    }
                    let got = *sut.setdefault(k.clone(), v);
                    prop_assert_eq!(Some(&got), model.get(&k));
                }
                OpI::Contains(s) => {
                    let has_model = model.keys().any(|k| k.0 == s);
                    prop_assert_eq!(sut.contains_key(s.as_str()), has_model);
                }
                OpI::ContainsValue(v) => {
                    let has_model = model.values().any(|&mv| mv == v);
                    prop_assert_eq!(sut.contains_value(&v), has_model);
                }
                OpI::Clear => {
                    sut.clear();
                    model.clear();
                    order.clear();
                    prop_assert_eq!(sut.capacity(), cfg.initial_capacity);
                    last_capacity = sut.capacity();
                }
                OpI::Iterate => {
                    let seen: Vec<Key> = sut.keys().cloned().collect();
                    let unique: BTreeSet<Key> = seen.iter().cloned().collect();
                    prop_assert_eq!(unique.len(), seen.len(), "iteration repeats a key");
                    let expected: BTreeSet<Key> = model.keys().cloned().collect();
                    prop_assert_eq!(unique, expected);
                    for (k, v) in sut.iter() {
                        prop_assert_eq!(Some(v), model.get(k));
                    }
                }
            }

            let cap = sut.capacity();
            prop_assert!(cap >= last_capacity, "capacity shrank outside clear");
            prop_assert!(cap % cfg.initial_capacity == 0);
            prop_assert!((cap / cfg.initial_capacity).is_power_of_two());
            last_capacity = cap;

            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
        }

        // Draining with popitem visits every remaining entry once, newest first.
        let mut drained = Vec::new();
        while let Ok(pair) = sut.popitem_entry() {
            drained.push(pair);
        }
        let mut expected = Vec::new();
        while let Some(pair) = model_popitem(&mut model, &mut order) {
            expected.push(pair);
        }
        prop_assert_eq!(drained, expected);
        prop_assert!(sut.is_empty());
    }
}

// Property: copy() is a value-level copy with the source's configuration.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_copy_preserves_entries(
        cfg in arb_config(),
        entries in proptest::collection::vec((0u16..64, any::<i32>()), 0..100),
    ) {
        let mut sut: HashTable<u16, i32> = HashTable::with_config(cfg).unwrap();
        sut.extend(entries.iter().copied());
        let copy = sut.copy();
        prop_assert_eq!(copy.len(), sut.len());
        prop_assert_eq!(copy.config(), sut.config());
        for (k, v) in sut.iter() {
            prop_assert_eq!(copy.get(k), Some(v));
        }
        prop_assert!(copy == sut);
    }
}
