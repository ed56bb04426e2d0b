// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between a drag session and the rendering layer.

/// Side effects a [`DragSession`](crate::DragSession) asks of its host.
///
/// `H` is the element handle stored in the [`Registry`](crate::Registry).
/// Handles are non-owning: an id, a node key, or a weak reference.
///
/// The session calls [`attach_listeners`](Self::attach_listeners) once when
/// a drag starts and [`detach_listeners`](Self::detach_listeners) once when it
/// ends, is cancelled, or the session is dropped. Calls strictly alternate.
pub trait DragHost<H> {
    /// Lift the dragged element above its siblings and stop it from
    /// intercepting pointer input for the duration of the drag.
    fn raise(&mut self, handle: &H);

    /// Undo [`raise`](Self::raise).
    fn restore(&mut self, handle: &H);

    /// Insert a placeholder for `dragged` directly after `hovered`.
    ///
    /// Called once per hover enter.
    fn insert_marker_after(&mut self, hovered: &H, dragged: &H) {
        let _ = (hovered, dragged);
    }

    /// Remove every placeholder inserted during the drag.
    fn clear_markers(&mut self) {}

    /// Start delivering document-level move, up, and leave events.
    fn attach_listeners(&mut self);

    /// Stop delivering document-level events.
    fn detach_listeners(&mut self);
}

/// A host with no side effects.
///
/// Useful when only the session state (transform, hover) is consumed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoopHost;

impl<H> DragHost<H> for NoopHost {
    fn raise(&mut self, _: &H) {}
    fn restore(&mut self, _: &H) {}
    fn attach_listeners(&mut self) {}
    fn detach_listeners(&mut self) {}
}
