// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index arithmetic for moving one item of a sequence.
//!
//! All functions here take the sequence by shared reference and return a new
//! `Vec`; the input is never modified. Indices are validated against the
//! sequence length and never clamped.

use alloc::vec::Vec;

use crate::edge::{Axis, Edge};

/// Errors produced by the reorder functions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReorderError {
    /// An index does not address an element of the sequence.
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },
}

fn check(index: usize, len: usize) -> Result<(), ReorderError> {
    if index < len {
        Ok(())
    } else {
        Err(ReorderError::IndexOutOfRange { index, len })
    }
}

/// Move the element at `start` so that it ends up at `finish`.
///
/// Both indices refer to positions in `list`. The element is removed first
/// and then inserted, so `finish` is the final index of the moved element.
///
/// ```
/// use understory_reorder::reorder;
///
/// let out = reorder(&["a", "b", "c"], 0, 2).unwrap();
/// assert_eq!(out, ["b", "c", "a"]);
/// ```
pub fn reorder<T: Clone>(list: &[T], start: usize, finish: usize) -> Result<Vec<T>, ReorderError> {
    check(start, list.len())?;
    check(finish, list.len())?;
    let mut out = list.to_vec();
    let item = out.remove(start);
    out.insert(finish, item);
    Ok(out)
}

/// Final index of an item dragged from `start` and dropped on `edge` of the
/// item at `target`.
///
/// The removal of the dragged item shifts every later index down by one, so
/// forward moves land one slot earlier than backward moves for the same edge.
/// Without an edge the item takes the target's slot.
///
/// ```
/// use understory_reorder::{Axis, Edge, destination_index};
///
/// // Forward onto the right edge of index 2: lands at 2.
/// assert_eq!(destination_index(0, 2, Some(Edge::Right), Axis::Horizontal), 2);
/// // Forward onto the left edge of index 2: lands at 1.
/// assert_eq!(destination_index(0, 2, Some(Edge::Left), Axis::Horizontal), 1);
/// // Backward onto the right edge of index 0: lands at 1.
/// assert_eq!(destination_index(3, 0, Some(Edge::Right), Axis::Horizontal), 1);
/// ```
pub fn destination_index(start: usize, target: usize, edge: Option<Edge>, axis: Axis) -> usize {
    if start == target {
        return start;
    }
    let Some(edge) = edge else {
        return target;
    };
    let after = edge.is_after(axis);
    if start < target {
        // `target > start >= 0`, so this cannot underflow.
        if after { target } else { target - 1 }
    } else if after {
        target + 1
    } else {
        target
    }
}

/// Move the item at `start` next to the item at `target`, on the side given by `edge`.
///
/// Fails with [`ReorderError::IndexOutOfRange`] if either index is outside
/// `list`. Equal `start` and `target` yield an unchanged copy.
///
/// ```
/// use understory_reorder::{Axis, Edge, reorder_with_edge};
///
/// let list = ["a", "b", "c", "d"];
/// let out = reorder_with_edge(&list, 0, 2, Some(Edge::Right), Axis::Horizontal).unwrap();
/// assert_eq!(out, ["b", "c", "a", "d"]);
///
/// let out = reorder_with_edge(&list, 3, 0, Some(Edge::Left), Axis::Horizontal).unwrap();
/// assert_eq!(out, ["d", "a", "b", "c"]);
/// ```
pub fn reorder_with_edge<T: Clone>(
    list: &[T],
    start: usize,
    target: usize,
    edge: Option<Edge>,
    axis: Axis,
) -> Result<Vec<T>, ReorderError> {
    check(start, list.len())?;
    check(target, list.len())?;
    reorder(list, start, destination_index(start, target, edge, axis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const ABCD: [char; 4] = ['a', 'b', 'c', 'd'];

    #[test]
    fn forward_right_edge() {
        let out = reorder_with_edge(&ABCD, 0, 2, Some(Edge::Right), Axis::Horizontal).unwrap();
        assert_eq!(out, vec!['b', 'c', 'a', 'd']);
    }

    #[test]
    fn forward_left_edge() {
        let out = reorder_with_edge(&ABCD, 0, 2, Some(Edge::Left), Axis::Horizontal).unwrap();
        assert_eq!(out, vec!['b', 'a', 'c', 'd']);
    }

    #[test]
    fn backward_left_edge() {
        let out = reorder_with_edge(&ABCD, 3, 0, Some(Edge::Left), Axis::Horizontal).unwrap();
        assert_eq!(out, vec!['d', 'a', 'b', 'c']);
    }

    #[test]
    fn backward_right_edge() {
        let out = reorder_with_edge(&ABCD, 3, 0, Some(Edge::Right), Axis::Horizontal).unwrap();
        assert_eq!(out, vec!['a', 'd', 'b', 'c']);
    }

    #[test]
    fn forward_onto_last_right_edge() {
        let out = reorder_with_edge(&ABCD, 1, 3, Some(Edge::Right), Axis::Horizontal).unwrap();
        assert_eq!(out, vec!['a', 'c', 'd', 'b']);
    }

    #[test]
    fn vertical_axis_uses_bottom_as_after() {
        let out = reorder_with_edge(&ABCD, 0, 1, Some(Edge::Bottom), Axis::Vertical).unwrap();
        assert_eq!(out, vec!['b', 'a', 'c', 'd']);
        let out = reorder_with_edge(&ABCD, 0, 1, Some(Edge::Top), Axis::Vertical).unwrap();
        assert_eq!(out, ABCD.to_vec());
    }

    #[test]
    fn cross_axis_edge_inserts_before() {
        let out = reorder_with_edge(&ABCD, 3, 1, Some(Edge::Bottom), Axis::Horizontal).unwrap();
        assert_eq!(out, vec!['a', 'd', 'b', 'c']);
    }

    #[test]
    fn no_edge_takes_target_slot() {
        let out = reorder_with_edge(&ABCD, 0, 2, None, Axis::Horizontal).unwrap();
        assert_eq!(out, vec!['b', 'c', 'a', 'd']);
    }

    #[test]
    fn equal_indices_is_identity() {
        for edge in Edge::ALL {
            let out = reorder_with_edge(&ABCD, 2, 2, Some(edge), Axis::Horizontal).unwrap();
            assert_eq!(out, ABCD.to_vec());
        }
    }

    #[test]
    fn input_is_left_untouched() {
        let list = vec!['a', 'b', 'c'];
        let out = reorder(&list, 0, 2).unwrap();
        assert_eq!(list, vec!['a', 'b', 'c']);
        assert_eq!(out, vec!['b', 'c', 'a']);
    }

    #[test]
    fn out_of_range_target_fails() {
        let err = reorder_with_edge(&ABCD, 0, 4, Some(Edge::Left), Axis::Horizontal).unwrap_err();
        assert_eq!(err, ReorderError::IndexOutOfRange { index: 4, len: 4 });
    }

    #[test]
    fn out_of_range_start_fails() {
        let err = reorder_with_edge(&ABCD, 9, 0, None, Axis::Horizontal).unwrap_err();
        assert_eq!(err, ReorderError::IndexOutOfRange { index: 9, len: 4 });
    }

    #[test]
    fn empty_sequence_rejects_everything() {
        let empty: [u8; 0] = [];
        assert!(reorder_with_edge(&empty, 0, 0, None, Axis::Horizontal).is_err());
        assert!(reorder(&empty, 0, 0).is_err());
    }

    #[test]
    fn destination_without_edge_is_target() {
        assert_eq!(destination_index(1, 3, None, Axis::Horizontal), 3);
        assert_eq!(destination_index(3, 1, None, Axis::Vertical), 1);
    }
}
