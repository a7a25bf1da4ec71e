#![cfg(test)]

// Property tests for ByteTable kept inside the crate alongside the unit
// tests, mirroring how the chain engine is exercised elsewhere.

use crate::key::{byte_eq, fnv1a, HashFn};
use crate::status::{last_status, Error};
use crate::table::{ByteTable, TableBuilder};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, u64),
    Remove(usize),
    Get(usize),
    Contains(usize),
    Mutate(usize, u64),
    Iterate,
    Clear,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<Vec<u8>>, Vec<OpI>)> {
    proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..6), 1..=8).prop_flat_map(
        |pool| {
            let idxs: Vec<usize> = (0..pool.len()).collect();
            let idx = proptest::sample::select(idxs);
            let op = prop_oneof![
                4 => (idx.clone(), any::<u64>()).prop_map(|(i, v)| OpI::Insert(i, v)),
                2 => idx.clone().prop_map(OpI::Remove),
                2 => idx.clone().prop_map(OpI::Get),
                2 => idx.clone().prop_map(OpI::Contains),
                2 => (idx.clone(), any::<u64>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
                1 => Just(OpI::Iterate),
                1 => Just(OpI::Clear),
            ];
            proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
        },
    )
}

fn fresh_table(hash_fn: HashFn, capacity: usize) -> ByteTable<u64> {
    TableBuilder::new()
        .capacity(capacity)
        .hash_fn(hash_fn)
        .eq_fn(byte_eq)
        .build()
        .unwrap()
}

fn const_hash(_key: &[u8]) -> u64 {
    0
}

// Shared state-machine driver checked against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - Duplicate keys are rejected, hand the value back, and leave the table
//   untouched.
// - get/get_mut/contains_key/remove presence parity with the model.
// - iter yields each live key exactly once.
// - len/is_empty parity after each op; capacity never decreases, clears
//   included.
fn check_scenario(
    mut sut: ByteTable<u64>,
    pool: &[Vec<u8>],
    ops: &[OpI],
) -> Result<(), TestCaseError> {
    let mut model: HashMap<Vec<u8>, u64> = HashMap::new();
    let mut max_capacity = sut.capacity();

    for op in ops {
        match op {
            OpI::Insert(i, v) => {
                let k = &pool[*i];
                let already = model.contains_key(k);
                match sut.insert(k, *v) {
                    Ok(()) => {
                        prop_assert!(!already, "insert must fail on duplicate");
                        model.insert(k.clone(), *v);
                    }
                    Err(rejected) => {
                        prop_assert!(already, "duplicate error only when key exists");
                        prop_assert_eq!(rejected.error, Error::KeyExists);
                        prop_assert_eq!(rejected.value, *v, "rejected value rides back");
                        prop_assert_eq!(last_status(), Some(Error::KeyExists));
                    }
                }
            }
            OpI::Remove(i) => {
                let k = &pool[*i];
                match (sut.remove(k), model.remove(k)) {
                    (Ok(v), Some(mv)) => prop_assert_eq!(v, mv),
                    (Err(e), None) => prop_assert_eq!(e, Error::NotFound),
                    (got, want) => {
                        return Err(TestCaseError::fail(format!(
                            "remove presence mismatch: {:?} vs {:?}",
                            got, want
                        )))
                    }
                }
            }
            OpI::Get(i) => {
                let k = &pool[*i];
                match (sut.get(k), model.get(k)) {
                    (Ok(v), Some(mv)) => prop_assert_eq!(v, mv),
                    (Err(e), None) => prop_assert_eq!(e, Error::NotFound),
                    (got, want) => {
                        return Err(TestCaseError::fail(format!(
                            "get presence mismatch: {:?} vs {:?}",
                            got, want
                        )))
                    }
                }
            }
            OpI::Contains(i) => {
                let k = &pool[*i];
                prop_assert_eq!(sut.contains_key(k), model.contains_key(k));
            }
            OpI::Mutate(i, d) => {
                let k = &pool[*i];
                match sut.get_mut(k) {
                    Ok(v) => {
                        *v = v.wrapping_add(*d);
                        let mv = model.get_mut(k).expect("model tracks the key");
                        *mv = mv.wrapping_add(*d);
                    }
                    Err(e) => {
                        prop_assert_eq!(e, Error::NotFound);
                        prop_assert!(!model.contains_key(k));
                    }
                }
            }
            OpI::Iterate => {
                let sut_keys: BTreeSet<Vec<u8>> = sut.iter().map(|(k, _)| k.to_vec()).collect();
                let model_keys: BTreeSet<Vec<u8>> = model.keys().cloned().collect();
                prop_assert_eq!(sut_keys, model_keys);
            }
            OpI::Clear => {
                sut.clear();
                model.clear();
            }
        }

        // Post-conditions after each op
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert!(sut.capacity() >= max_capacity, "capacity must not shrink");
        max_capacity = sut.capacity();
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    // Property: state-machine equivalence starting from a small table so
    // random runs cross the growth threshold repeatedly.
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        check_scenario(fresh_table(fnv1a, 4), &pool, &ops)?;
    }

    // Property: same invariants under worst-case collisions (constant
    // hash), stressing chain probing, unlink, and rehash order.
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        check_scenario(fresh_table(const_hash, 1), &pool, &ops)?;
    }
}
