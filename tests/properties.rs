// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

use grow_vec::GrowVec;
use proptest::prelude::*;

fn build(values: &[i64]) -> GrowVec<i64> {
    let mut v = GrowVec::new();
    for &x in values {
        v.push(x).unwrap();
    }
    v
}

proptest! {
    #[test]
    fn with_len_holds_n_elements(n in 0usize..2048) {
        let v: GrowVec<u8> = GrowVec::with_len(n).unwrap();
        prop_assert_eq!(v.len(), n);
        prop_assert!(v.capacity() >= n);
        if n == 0 {
            prop_assert_eq!(v.capacity(), 0);
        } else {
            prop_assert!(v.capacity().is_power_of_two());
            prop_assert!(v.capacity() / 2 < n);
        }
    }

    #[test]
    fn pushed_values_are_indexable_in_order(values in prop::collection::vec(any::<i64>(), 0..300)) {
        let v = build(&values);
        prop_assert_eq!(v.len(), values.len());
        for (i, x) in values.iter().enumerate() {
            prop_assert_eq!(v[i], *x);
            prop_assert_eq!(v.get(i), Some(x));
        }
        prop_assert_eq!(v.get(values.len()), None);
    }

    #[test]
    fn growth_events_double_and_preserve_prefix(values in prop::collection::vec(any::<i64>(), 1..300)) {
        let mut v = GrowVec::new();
        let mut expected_cap = 0usize;
        for (i, &x) in values.iter().enumerate() {
            v.push(x).unwrap();
            if i == expected_cap {
                expected_cap = if expected_cap == 0 { 1 } else { expected_cap * 2 };
            }
            prop_assert_eq!(v.capacity(), expected_cap);
            prop_assert_eq!(v.as_slice(), &values[..=i]);
        }
    }

    #[test]
    fn copies_are_independent(
        values in prop::collection::vec(any::<i64>(), 0..100),
        extra in any::<i64>(),
    ) {
        let original = build(&values);
        let mut copy = original.try_clone().unwrap();
        prop_assert_eq!(&copy, &original);
        if values.is_empty() {
            prop_assert_eq!(copy.capacity(), 0);
        } else {
            prop_assert_eq!(copy.capacity(), original.capacity());
        }

        copy.push(extra).unwrap();
        if let Some(first) = copy.get_mut(0) {
            *first = first.wrapping_add(1);
        }
        prop_assert_eq!(original.as_slice(), &values[..]);

        let mut assigned = build(&[1, 2, 3]);
        assigned.assign(&original).unwrap();
        prop_assert_eq!(assigned.as_slice(), &values[..]);
    }

    #[test]
    fn clear_retains_capacity(
        values in prop::collection::vec(any::<i64>(), 1..100),
        next in any::<i64>(),
    ) {
        let mut v = build(&values);
        let cap = v.capacity();
        v.clear();
        prop_assert_eq!(v.len(), 0);
        prop_assert_eq!(v.capacity(), cap);
        v.push(next).unwrap();
        prop_assert_eq!(v.capacity(), cap);
        prop_assert_eq!(v.as_slice(), &[next]);
    }

    #[test]
    fn cursor_walk_matches_insertion_order(values in prop::collection::vec(any::<i64>(), 0..100)) {
        let v = build(&values);
        let mut seen = Vec::new();
        let mut it = v.begin();
        let end = v.end();
        while it != end {
            seen.push(*it.post_advance());
        }
        prop_assert_eq!(seen, values);
    }
}

#[test]
fn copy_then_push_leaves_original_len() {
    let original = build(&[1, 2, 3]);
    let mut copy = original.clone();
    copy.push(4).unwrap();
    assert_eq!(original.len(), 3);
    assert_eq!(copy.len(), 4);
}

#[test]
fn empty_vector_cursors_meet() {
    let v: GrowVec<i64> = GrowVec::new();
    assert!(v.begin() == v.end());
}
