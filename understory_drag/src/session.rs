// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag session state machine.
//!
//! ## States
//!
//! | State | Event | Action | Next |
//! |---|---|---|---|
//! | Idle | down on registered id | record anchor, raise element, attach listeners | Dragging |
//! | Dragging | move | `offset = pointer - anchor` | Dragging |
//! | Dragging | over other registered id | set hover, insert marker | Dragging |
//! | Dragging | up, or leave | fire completion callback, reset, restore, detach | Idle |
//! | Dragging | down | cancel the stale drag, then start a new one | Dragging |
//!
//! Events that do not apply in the current state are ignored.
//!
//! ## Listener lifetime
//!
//! Document-level listeners are acquired when a drag starts and released on
//! every path out of it: release, leaving the document, [`DragSession::cancel`],
//! a fresh press during a drag, and dropping the session. The host sees
//! strictly alternating attach/detach calls. Each of these paths also restores
//! the dragged element and clears placeholders.

use alloc::string::String;
use core::fmt::Debug;
use core::hash::Hash;

use kurbo::{Point, Vec2};

use crate::error::DragError;
use crate::event::{PointerEvent, PointerKind};
use crate::host::DragHost;
use crate::observer::{DragChange, Observers, SubscriptionId};
use crate::registry::{DragEndCallback, DraggableOptions, Registry};
use crate::state::{DragSnapshot, DragState};

/// Session behaviour switches.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DragConfig {
    /// End the drag, as if released, when the pointer leaves the document.
    pub end_on_leave: bool,
    /// Ask the host to insert a placeholder after each newly hovered element.
    pub insert_marker: bool,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            end_on_leave: true,
            insert_marker: true,
        }
    }
}

/// What a dispatched event did.
#[derive(Clone, Debug, PartialEq)]
pub enum Handled<K> {
    /// Nothing changed.
    Ignored,
    /// A drag started.
    Started,
    /// The dragged element's translation changed.
    Moved(Vec2),
    /// The hovered element changed.
    Hovered(K),
    /// The drag completed with this final state.
    Ended(DragSnapshot<K>),
}

struct Active<K> {
    id: K,
    kind: Option<String>,
    anchor: Point,
    offset: Vec2,
    over: Option<(K, Option<String>)>,
    on_drag_end: Option<DragEndCallback<K>>,
}

impl<K: Clone> Active<K> {
    fn snapshot(&self) -> DragSnapshot<K> {
        let (over, over_kind) = match &self.over {
            Some((id, kind)) => (Some(id.clone()), kind.clone()),
            None => (None, None),
        };
        DragSnapshot {
            dragged: Some(self.id.clone()),
            dragged_over: over,
            dragged_kind: self.kind.clone(),
            dragged_over_kind: over_kind,
            anchor: Some(self.anchor),
            offset: self.offset,
        }
    }
}

/// One drag session shared by every draggable in a container.
///
/// The session owns the [`Registry`], the host, and the subscriber list. Hosts
/// register each draggable when it mounts and forward raw pointer events to
/// the `on_*` methods (or [`DragSession::dispatch`]).
///
/// ```
/// use kurbo::{Point, Vec2};
/// use understory_drag::{DragSession, DraggableOptions, NoopHost, PointerEvent};
///
/// let mut session: DragSession<u32, u32, NoopHost> = DragSession::new(NoopHost);
/// session.register(1, 1, DraggableOptions::default()).unwrap();
/// session.register(2, 2, DraggableOptions::default()).unwrap();
///
/// session.on_down(1, &PointerEvent::down(1, Point::new(10.0, 10.0)));
/// session.on_move(&PointerEvent::moved(Point::new(25.0, 12.0)));
/// assert_eq!(session.transform(), Vec2::new(15.0, 2.0));
///
/// session.on_over(2);
/// assert_eq!(session.dragged_over(), Some(&2));
///
/// let done = session.on_up(&PointerEvent::up(Point::new(25.0, 12.0))).unwrap();
/// assert_eq!(done.dragged, Some(1));
/// assert_eq!(done.dragged_over, Some(2));
/// assert_eq!(session.transform(), Vec2::ZERO);
/// assert!(session.dragged().is_none());
/// ```
pub struct DragSession<K: Eq + Hash, H, D: DragHost<H>> {
    registry: Registry<K, H>,
    host: D,
    observers: Observers<K>,
    config: DragConfig,
    active: Option<Active<K>>,
    listeners_attached: bool,
}

impl<K: Debug + Eq + Hash, H, D: DragHost<H>> Debug for DragSession<K, H, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DragSession")
            .field("config", &self.config)
            .field("dragged", &self.active.as_ref().map(|a| &a.id))
            .field("listeners_attached", &self.listeners_attached)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}

impl<K, H, D> DragSession<K, H, D>
where
    K: Clone + Eq + Hash + Debug,
    H: Clone,
    D: DragHost<H>,
{
    /// Create an idle session with the default [`DragConfig`].
    pub fn new(host: D) -> Self {
        Self::with_config(host, DragConfig::default())
    }

    /// Create an idle session.
    pub fn with_config(host: D, config: DragConfig) -> Self {
        Self {
            registry: Registry::new(),
            host,
            observers: Observers::new(),
            config,
            active: None,
            listeners_attached: false,
        }
    }

    /// Session configuration.
    pub fn config(&self) -> DragConfig {
        self.config
    }

    /// Replace the configuration. Takes effect on the next event.
    pub fn set_config(&mut self, config: DragConfig) {
        self.config = config;
    }

    /// The host.
    pub fn host(&self) -> &D {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut D {
        &mut self.host
    }

    /// The element registry.
    pub fn registry(&self) -> &Registry<K, H> {
        &self.registry
    }

    /// Register a draggable. See [`Registry::register`].
    ///
    /// Does not affect a drag in progress.
    pub fn register(
        &mut self,
        id: K,
        handle: H,
        options: DraggableOptions<K>,
    ) -> Result<(), DragError<K>> {
        self.registry.register(id, handle, options)
    }

    /// Rebind the element handle of a registered draggable.
    pub fn set_handle(&mut self, id: &K, handle: H) -> Result<H, DragError<K>> {
        self.registry.set_handle(id, handle)
    }

    /// Unregister a draggable, returning its handle.
    ///
    /// Removing the dragged element mid-drag is allowed: later moves skip the
    /// transform update, and the completion callback still fires on release.
    pub fn unregister(&mut self, id: &K) -> Option<H> {
        self.registry.unregister(id)
    }

    /// Subscribe to state changes.
    pub fn subscribe(&mut self, f: impl FnMut(&DragChange<K>) + 'static) -> SubscriptionId {
        self.observers.subscribe(f)
    }

    /// Remove a subscriber.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Current phase.
    pub fn state(&self) -> DragState {
        if self.active.is_some() {
            DragState::Dragging
        } else {
            DragState::Idle
        }
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Id of the dragged element.
    pub fn dragged(&self) -> Option<&K> {
        self.active.as_ref().map(|a| &a.id)
    }

    /// Id of the hovered element.
    pub fn dragged_over(&self) -> Option<&K> {
        self.active
            .as_ref()
            .and_then(|a| a.over.as_ref())
            .map(|(id, _)| id)
    }

    /// Translation to apply to the dragged element; zero when idle.
    pub fn transform(&self) -> Vec2 {
        self.active.as_ref().map_or(Vec2::ZERO, |a| a.offset)
    }

    /// Whether document-level listeners are currently attached.
    pub fn listeners_attached(&self) -> bool {
        self.listeners_attached
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> DragSnapshot<K> {
        self.active
            .as_ref()
            .map_or_else(DragSnapshot::idle, Active::snapshot)
    }

    /// Route a raw event to the matching handler.
    pub fn dispatch(&mut self, event: &PointerEvent<K>) -> Handled<K> {
        match event.kind {
            PointerKind::Down => match &event.target {
                Some(id) if self.on_down(id.clone(), event) => Handled::Started,
                _ => Handled::Ignored,
            },
            PointerKind::Move => self.on_move(event).map_or(Handled::Ignored, Handled::Moved),
            PointerKind::Over => match &event.target {
                Some(id) if self.on_over(id.clone()) => Handled::Hovered(id.clone()),
                _ => Handled::Ignored,
            },
            PointerKind::Up => self.on_up(event).map_or(Handled::Ignored, Handled::Ended),
            PointerKind::Leave => self
                .on_leave(event)
                .map_or(Handled::Ignored, Handled::Ended),
        }
    }

    /// Press on `id`. Returns `true` if a drag started.
    ///
    /// Presses on unregistered ids are ignored. A press during a drag cancels
    /// that drag first, without firing its completion callback.
    pub fn on_down(&mut self, id: K, event: &PointerEvent<K>) -> bool {
        if !self.registry.contains(&id) {
            #[cfg(feature = "tracing")]
            tracing::trace!(?id, "press on unregistered element ignored");
            return false;
        }
        if self.active.is_some() {
            #[cfg(feature = "tracing")]
            tracing::debug!(?id, "press during drag; cancelling stale drag");
            self.finish(None);
        }

        let Some(entry) = self.registry.entry_mut(&id) else {
            return false;
        };
        let handle = entry.handle.clone();
        self.active = Some(Active {
            id: id.clone(),
            kind: entry.kind.clone(),
            anchor: event.position,
            offset: Vec2::ZERO,
            over: None,
            on_drag_end: entry.on_drag_end.take(),
        });
        self.acquire_listeners();
        self.host.raise(&handle);

        #[cfg(feature = "tracing")]
        tracing::debug!(?id, x = event.position.x, y = event.position.y, "drag started");
        self.observers.notify(&DragChange::Started {
            id,
            anchor: event.position,
        });
        true
    }

    /// Pointer moved. Returns the new translation if it was updated.
    ///
    /// Ignored when idle, and skipped while the dragged element is not in the
    /// registry.
    pub fn on_move(&mut self, event: &PointerEvent<K>) -> Option<Vec2> {
        let active = self.active.as_mut()?;
        if !self.registry.contains(&active.id) {
            #[cfg(feature = "tracing")]
            tracing::trace!(id = ?active.id, "dragged element not registered; transform skipped");
            return None;
        }
        let offset = event.position - active.anchor;
        active.offset = offset;
        self.observers.notify(&DragChange::Transform(offset));
        Some(offset)
    }

    /// Pointer entered `id`. Returns `true` if the hovered element changed.
    ///
    /// Entering the dragged element itself, an unregistered element, or the
    /// element already hovered does nothing.
    pub fn on_over(&mut self, id: K) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if active.id == id || active.over.as_ref().is_some_and(|(over, _)| *over == id) {
            return false;
        }
        if !self.registry.contains(&id) {
            return false;
        }
        active.over = Some((id.clone(), self.registry.kind(&id).map(String::from)));
        debug_assert!(
            active.over.as_ref().is_none_or(|(over, _)| *over != active.id),
            "hovered element must differ from the dragged element"
        );

        if self.config.insert_marker {
            if let (Some(hovered), Some(dragged)) =
                (self.registry.handle(&id), self.registry.handle(&active.id))
            {
                self.host.insert_marker_after(hovered, dragged);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(?id, "hover changed");
        self.observers.notify(&DragChange::Hover(Some(id)));
        true
    }

    /// Pointer released. Returns the final state if a drag completed.
    pub fn on_up(&mut self, event: &PointerEvent<K>) -> Option<DragSnapshot<K>> {
        self.finish(Some(event))
    }

    /// Pointer left the document.
    ///
    /// Completes the drag like [`on_up`](Self::on_up) when
    /// [`DragConfig::end_on_leave`] is set.
    pub fn on_leave(&mut self, event: &PointerEvent<K>) -> Option<DragSnapshot<K>> {
        if self.config.end_on_leave {
            self.finish(Some(event))
        } else {
            None
        }
    }

    /// Abandon the drag in progress without firing its completion callback.
    pub fn cancel(&mut self) -> Option<DragSnapshot<K>> {
        self.finish(None)
    }

    /// Tear down the active drag. `event` is `Some` for a completed drag and
    /// `None` for a cancelled one.
    fn finish(&mut self, event: Option<&PointerEvent<K>>) -> Option<DragSnapshot<K>> {
        let mut active = self.active.take()?;
        let snapshot = active.snapshot();

        if let (Some(event), Some(callback)) = (event, active.on_drag_end.as_mut()) {
            callback(event, &snapshot);
        }

        if let Some(entry) = self.registry.entry_mut(&active.id) {
            self.host.restore(&entry.handle);
            if entry.on_drag_end.is_none() {
                entry.on_drag_end = active.on_drag_end.take();
            }
        }
        self.host.clear_markers();
        self.release_listeners();

        if active.over.is_some() {
            self.observers.notify(&DragChange::Hover(None));
        }
        let change = if event.is_some() {
            #[cfg(feature = "tracing")]
            tracing::debug!(id = ?active.id, over = ?snapshot.dragged_over, "drag ended");
            DragChange::Ended(snapshot.clone())
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(id = ?active.id, "drag cancelled");
            DragChange::Cancelled(snapshot.clone())
        };
        self.observers.notify(&change);
        Some(snapshot)
    }

    fn acquire_listeners(&mut self) {
        if !self.listeners_attached {
            self.host.attach_listeners();
            self.listeners_attached = true;
        }
    }

    fn release_listeners(&mut self) {
        if self.listeners_attached {
            self.host.detach_listeners();
            self.listeners_attached = false;
        }
    }
}

impl<K: Eq + Hash, H, D: DragHost<H>> Drop for DragSession<K, H, D> {
    fn drop(&mut self) {
        if let Some(active) = self.active.take() {
            if let Some(handle) = self.registry.handle(&active.id) {
                self.host.restore(handle);
            }
            self.host.clear_markers();
        }
        if self.listeners_attached {
            self.host.detach_listeners();
            self.listeners_attached = false;
        }
    }
}
