// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notification for drag sessions.
//!
//! A host that re-renders on change subscribes a callback and receives every
//! [`DragChange`] in the order the session produced it. Callbacks run
//! synchronously inside the event handler that caused the change.

use alloc::boxed::Box;

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::state::DragSnapshot;

/// A change in drag state.
#[derive(Clone, Debug, PartialEq)]
pub enum DragChange<K> {
    /// A drag started on `id` with the pointer at `anchor`.
    Started {
        /// The dragged element.
        id: K,
        /// Press position.
        anchor: Point,
    },
    /// The dragged element's translation changed.
    Transform(Vec2),
    /// The hovered element changed; `None` when a drag that had a hovered
    /// element ends or is cancelled, just before `Ended`/`Cancelled`.
    Hover(Option<K>),
    /// The drag completed; carries the state just before reset.
    Ended(DragSnapshot<K>),
    /// The drag was abandoned without completing.
    Cancelled(DragSnapshot<K>),
}

/// Handle returned by [`Observers::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u32);

type Callback<K> = Box<dyn FnMut(&DragChange<K>)>;

/// A list of change subscribers.
pub struct Observers<K> {
    next: u32,
    subscribers: SmallVec<[(SubscriptionId, Callback<K>); 2]>,
}

impl<K> core::fmt::Debug for Observers<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl<K> Default for Observers<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Observers<K> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            next: 0,
            subscribers: SmallVec::new(),
        }
    }

    /// Register `f` to be called on every change.
    pub fn subscribe(&mut self, f: impl FnMut(&DragChange<K>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next);
        self.next = self.next.wrapping_add(1);
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Remove a subscriber. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Number of live subscribers.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Whether there are no subscribers.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Deliver `change` to every subscriber in subscription order.
    pub fn notify(&mut self, change: &DragChange<K>) {
        for (_, f) in &mut self.subscribers {
            f(change);
        }
    }
}
