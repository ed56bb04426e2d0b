// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observable drag state.

use alloc::string::String;

use kurbo::{Point, Vec2};

/// Phase of a [`DragSession`](crate::DragSession).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A registered element is being dragged.
    Dragging,
}

/// Point-in-time view of a drag session.
///
/// Outside of a drag every optional field is `None` and `offset` is zero.
/// While dragging, `dragged_over` is never equal to `dragged`.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSnapshot<K> {
    /// Element being dragged.
    pub dragged: Option<K>,
    /// Element most recently entered by the pointer during the drag.
    pub dragged_over: Option<K>,
    /// Kind tag of the dragged element.
    pub dragged_kind: Option<String>,
    /// Kind tag of the hovered element.
    pub dragged_over_kind: Option<String>,
    /// Pointer position at press time.
    pub anchor: Option<Point>,
    /// Pointer travel since the press; the dragged element's translation.
    pub offset: Vec2,
}

impl<K> DragSnapshot<K> {
    /// The snapshot of a session with no drag in progress.
    pub const fn idle() -> Self {
        Self {
            dragged: None,
            dragged_over: None,
            dragged_kind: None,
            dragged_over_kind: None,
            anchor: None,
            offset: Vec2::ZERO,
        }
    }

    /// The phase this snapshot describes.
    pub fn state(&self) -> DragState {
        if self.dragged.is_some() {
            DragState::Dragging
        } else {
            DragState::Idle
        }
    }
}

impl<K> Default for DragSnapshot<K> {
    fn default() -> Self {
        Self::idle()
    }
}
