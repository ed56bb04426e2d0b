// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A list model that applies drops.

use alloc::vec::Vec;

use crate::edge::{Axis, Edge};
use crate::reorder::{ReorderError, reorder_with_edge};

/// A completed drop: the item at `source` was released over `edge` of the item at `target`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ListDrop {
    /// Index of the dragged item.
    pub source: usize,
    /// Index of the item under the pointer at release.
    pub target: usize,
    /// Closest edge of the target, if one was computed.
    pub edge: Option<Edge>,
}

/// An ordered sequence of items that is reordered by drops.
///
/// Every successful mutation replaces the stored `Vec` with a freshly built
/// one, so a slice obtained from [`SortableList::items`] before a drop is a
/// consistent snapshot of the old order.
///
/// ```
/// use understory_reorder::{Edge, ListDrop, SortableList};
///
/// let mut fruit = SortableList::new(vec!["apple", "orange", "banana", "grape"]);
/// fruit.push("pear");
///
/// let moved = fruit
///     .apply_drop(ListDrop { source: 4, target: 0, edge: Some(Edge::Left) })
///     .unwrap();
/// assert!(moved);
/// assert_eq!(fruit.items(), ["pear", "apple", "orange", "banana", "grape"]);
///
/// // Dropping an item onto itself is refused.
/// assert!(!fruit.apply_drop(ListDrop { source: 1, target: 1, edge: None }).unwrap());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortableList<T> {
    items: Vec<T>,
    axis: Axis,
}

impl<T: Clone> SortableList<T> {
    /// Create a horizontal list.
    pub fn new(items: Vec<T>) -> Self {
        Self::with_axis(items, Axis::Horizontal)
    }

    /// Create a list laid out along `axis`.
    pub fn with_axis(items: Vec<T>, axis: Axis) -> Self {
        Self { items, axis }
    }

    /// The current order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the list and return its items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Layout axis used to interpret drop edges.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item at the end.
    pub fn push(&mut self, item: T) {
        let mut next = Vec::with_capacity(self.items.len() + 1);
        next.extend_from_slice(&self.items);
        next.push(item);
        self.items = next;
    }

    /// Whether the item at `target` accepts a drop of the item at `source`.
    ///
    /// An item never accepts itself.
    pub fn can_drop(&self, source: usize, target: usize) -> bool {
        source != target
    }

    /// Apply a drop.
    ///
    /// Returns `Ok(false)` and leaves the list alone when the drop was refused
    /// by [`SortableList::can_drop`]. Out-of-range indices fail with
    /// [`ReorderError`] and also leave the list unchanged.
    pub fn apply_drop(&mut self, drop: ListDrop) -> Result<bool, ReorderError> {
        if !self.can_drop(drop.source, drop.target) {
            #[cfg(feature = "tracing")]
            tracing::trace!(index = drop.source, "drop onto self refused");
            return Ok(false);
        }
        let next = reorder_with_edge(&self.items, drop.source, drop.target, drop.edge, self.axis)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            source = drop.source,
            target = drop.target,
            edge = ?drop.edge,
            "drop applied"
        );
        self.items = next;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn fruit() -> SortableList<&'static str> {
        SortableList::new(vec!["apple", "orange", "banana", "grape"])
    }

    #[test]
    fn drop_moves_item() {
        let mut list = fruit();
        let moved = list
            .apply_drop(ListDrop {
                source: 0,
                target: 2,
                edge: Some(Edge::Right),
            })
            .unwrap();
        assert!(moved);
        assert_eq!(list.items(), ["orange", "banana", "apple", "grape"]);
    }

    #[test]
    fn self_drop_is_refused() {
        let mut list = fruit();
        let before = list.clone();
        let moved = list
            .apply_drop(ListDrop {
                source: 2,
                target: 2,
                edge: Some(Edge::Right),
            })
            .unwrap();
        assert!(!moved);
        assert_eq!(list, before);
    }

    #[test]
    fn failed_drop_leaves_list_intact() {
        let mut list = fruit();
        let err = list
            .apply_drop(ListDrop {
                source: 0,
                target: 10,
                edge: None,
            })
            .unwrap_err();
        assert_eq!(err, ReorderError::IndexOutOfRange { index: 10, len: 4 });
        assert_eq!(list, fruit());
    }

    #[test]
    fn push_then_drop_new_item() {
        let mut list = fruit();
        list.push("pear");
        assert_eq!(list.len(), 5);
        list.apply_drop(ListDrop {
            source: 4,
            target: 1,
            edge: Some(Edge::Left),
        })
        .unwrap();
        assert_eq!(
            list.into_items(),
            vec!["apple", "pear", "orange", "banana", "grape"]
        );
    }

    #[test]
    fn vertical_list_reads_bottom_edge() {
        let mut list = SortableList::with_axis(vec![1, 2, 3], Axis::Vertical);
        assert_eq!(list.axis(), Axis::Vertical);
        list.apply_drop(ListDrop {
            source: 0,
            target: 1,
            edge: Some(Edge::Bottom),
        })
        .unwrap();
        assert_eq!(list.items(), [2, 1, 3]);
    }

    #[test]
    fn empty_list() {
        let list: SortableList<u8> = SortableList::default();
        assert!(list.is_empty());
        assert_eq!(list.axis(), Axis::Horizontal);
    }
}
