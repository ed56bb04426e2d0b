// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw pointer input as delivered by the host.

use kurbo::Point;

/// Kind of a raw pointer event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Button pressed over a draggable.
    Down,
    /// Pointer moved anywhere in the document.
    Move,
    /// Pointer entered a draggable.
    Over,
    /// Button released anywhere in the document.
    Up,
    /// Pointer left the document.
    Leave,
}

/// A pointer event in page coordinates.
///
/// `target` names the draggable the event was delivered to. It is required for
/// [`PointerKind::Down`] and [`PointerKind::Over`] and ignored otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent<K> {
    /// What happened.
    pub kind: PointerKind,
    /// Draggable under the pointer, if the event was delivered to one.
    pub target: Option<K>,
    /// Pointer position in page coordinates.
    pub position: Point,
}

impl<K> PointerEvent<K> {
    fn new(kind: PointerKind, target: Option<K>, position: Point) -> Self {
        Self {
            kind,
            target,
            position,
        }
    }

    /// Press on `target`.
    pub fn down(target: K, position: Point) -> Self {
        Self::new(PointerKind::Down, Some(target), position)
    }

    /// Document-level move.
    pub fn moved(position: Point) -> Self {
        Self::new(PointerKind::Move, None, position)
    }

    /// Pointer entered `target`.
    pub fn over(target: K, position: Point) -> Self {
        Self::new(PointerKind::Over, Some(target), position)
    }

    /// Document-level release.
    pub fn up(position: Point) -> Self {
        Self::new(PointerKind::Up, None, position)
    }

    /// Pointer left the document.
    pub fn leave(position: Point) -> Self {
        Self::new(PointerKind::Leave, None, position)
    }
}
