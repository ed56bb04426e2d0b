// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the reorder engine.

use proptest::prelude::*;
use understory_reorder::{Axis, Edge, destination_index, reorder_with_edge};

fn edge() -> impl Strategy<Value = Option<Edge>> {
    prop_oneof![
        Just(None),
        Just(Some(Edge::Top)),
        Just(Some(Edge::Right)),
        Just(Some(Edge::Bottom)),
        Just(Some(Edge::Left)),
    ]
}

fn axis() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::Horizontal), Just(Axis::Vertical)]
}

fn list_and_indices() -> impl Strategy<Value = (Vec<u16>, usize, usize)> {
    prop::collection::vec(any::<u16>(), 1..32).prop_flat_map(|list| {
        let len = list.len();
        (Just(list), 0..len, 0..len)
    })
}

proptest! {
    #[test]
    fn preserves_length_and_multiset(
        (list, start, target) in list_and_indices(),
        edge in edge(),
        axis in axis(),
    ) {
        let out = reorder_with_edge(&list, start, target, edge, axis).unwrap();
        prop_assert_eq!(out.len(), list.len());
        let mut a = list.clone();
        let mut b = out.clone();
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn moved_item_lands_at_destination(
        (list, start, target) in list_and_indices(),
        edge in edge(),
        axis in axis(),
    ) {
        let out = reorder_with_edge(&list, start, target, edge, axis).unwrap();
        let dest = destination_index(start, target, edge, axis);
        prop_assert!(dest < list.len());
        prop_assert_eq!(out[dest], list[start]);
    }

    #[test]
    fn equal_indices_are_identity(
        (list, start, _t) in list_and_indices(),
        edge in edge(),
        axis in axis(),
    ) {
        let out = reorder_with_edge(&list, start, start, edge, axis).unwrap();
        prop_assert_eq!(out, list);
    }

    #[test]
    fn out_of_range_never_clamps(
        list in prop::collection::vec(any::<u16>(), 0..16),
        extra in 0_usize..8,
        edge in edge(),
    ) {
        let bad = list.len() + extra;
        prop_assert!(reorder_with_edge(&list, 0, bad, edge, Axis::Horizontal).is_err());
    }
}
