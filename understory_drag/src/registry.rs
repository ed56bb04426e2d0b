// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Id-to-element lookup for a drag session.
//!
//! The registry is bookkeeping only: adding or removing entries never changes
//! drag state. Hosts register an element when it mounts and unregister it when
//! it unmounts. The registry stores whatever handle the host gives it and does
//! not keep the element alive.

use alloc::boxed::Box;
use alloc::string::String;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::error::DragError;
use crate::event::PointerEvent;
use crate::state::DragSnapshot;

/// Callback invoked once when a drag of the owning element completes.
///
/// Receives the event that ended the drag and the session state just before
/// it was reset.
pub type DragEndCallback<K> = Box<dyn FnMut(&PointerEvent<K>, &DragSnapshot<K>)>;

/// Per-draggable settings supplied at registration.
pub struct DraggableOptions<K> {
    /// Free-form kind tag reported in [`DragSnapshot`].
    pub kind: Option<String>,
    /// Completion callback.
    pub on_drag_end: Option<DragEndCallback<K>>,
}

impl<K> Default for DraggableOptions<K> {
    fn default() -> Self {
        Self {
            kind: None,
            on_drag_end: None,
        }
    }
}

impl<K> core::fmt::Debug for DraggableOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DraggableOptions")
            .field("kind", &self.kind)
            .field("on_drag_end", &self.on_drag_end.is_some())
            .finish()
    }
}

impl<K> DraggableOptions<K> {
    /// Set the kind tag.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Set the completion callback.
    #[must_use]
    pub fn on_drag_end(
        mut self,
        f: impl FnMut(&PointerEvent<K>, &DragSnapshot<K>) + 'static,
    ) -> Self {
        self.on_drag_end = Some(Box::new(f));
        self
    }
}

pub(crate) struct Entry<K, H> {
    pub(crate) handle: H,
    pub(crate) kind: Option<String>,
    // Taken by the session for the duration of a drag.
    pub(crate) on_drag_end: Option<DragEndCallback<K>>,
}

/// Mapping from drag id to element handle.
pub struct Registry<K, H> {
    entries: HashMap<K, Entry<K, H>>,
}

impl<K: core::fmt::Debug, H: core::fmt::Debug> core::fmt::Debug for Registry<K, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, e)| (k, &e.handle)))
            .finish()
    }
}

impl<K, H> Default for Registry<K, H> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, H> Registry<K, H> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `id` to `handle`.
    ///
    /// Fails with [`DragError::DuplicateId`] if `id` is already bound; the
    /// existing entry is kept.
    pub fn register(
        &mut self,
        id: K,
        handle: H,
        options: DraggableOptions<K>,
    ) -> Result<(), DragError<K>> {
        if self.entries.contains_key(&id) {
            return Err(DragError::DuplicateId(id));
        }
        self.entries.insert(
            id,
            Entry {
                handle,
                kind: options.kind,
                on_drag_end: options.on_drag_end,
            },
        );
        Ok(())
    }

    /// Replace the handle bound to `id`, returning the previous one.
    pub fn set_handle(&mut self, id: &K, handle: H) -> Result<H, DragError<K>> {
        match self.entries.get_mut(id) {
            Some(entry) => Ok(core::mem::replace(&mut entry.handle, handle)),
            None => Err(DragError::UnknownId(id.clone())),
        }
    }

}

impl<K: Eq + Hash, H> Registry<K, H> {
    /// Remove `id`, returning its handle.
    pub fn unregister(&mut self, id: &K) -> Option<H> {
        self.entries.remove(id).map(|e| e.handle)
    }

    /// Handle bound to `id`.
    pub fn handle(&self, id: &K) -> Option<&H> {
        self.entries.get(id).map(|e| &e.handle)
    }

    /// Kind tag of `id`.
    pub fn kind(&self, id: &K) -> Option<&str> {
        self.entries.get(id).and_then(|e| e.kind.as_deref())
    }

    /// Whether `id` is bound.
    pub fn contains(&self, id: &K) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of bound ids.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over ids and handles in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &H)> {
        self.entries.iter().map(|(k, e)| (k, &e.handle))
    }

    pub(crate) fn entry_mut(&mut self, id: &K) -> Option<&mut Entry<K, H>> {
        self.entries.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_lookup() {
        let mut reg: Registry<u32, &'static str> = Registry::new();
        reg.register(1, "card-1", DraggableOptions::default().with_kind("card"))
            .unwrap();
        assert!(reg.contains(&1));
        assert_eq!(reg.handle(&1), Some(&"card-1"));
        assert_eq!(reg.kind(&1), Some("card"));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn duplicate_id_is_rejected_and_original_kept() {
        let mut reg: Registry<u32, &'static str> = Registry::new();
        reg.register(1, "a", DraggableOptions::default()).unwrap();
        let err = reg.register(1, "b", DraggableOptions::default()).unwrap_err();
        assert_eq!(err, DragError::DuplicateId(1));
        assert_eq!(reg.handle(&1), Some(&"a"));
    }

    #[test]
    fn set_handle_replaces_or_fails() {
        let mut reg: Registry<u32, u64> = Registry::new();
        reg.register(7, 100, DraggableOptions::default()).unwrap();
        assert_eq!(reg.set_handle(&7, 200), Ok(100));
        assert_eq!(reg.handle(&7), Some(&200));
        assert_eq!(reg.set_handle(&8, 1), Err(DragError::UnknownId(8)));
    }

    #[test]
    fn unregister_removes_entry() {
        let mut reg: Registry<u32, u64> = Registry::new();
        reg.register(1, 10, DraggableOptions::default()).unwrap();
        assert_eq!(reg.unregister(&1), Some(10));
        assert_eq!(reg.unregister(&1), None);
        assert!(reg.is_empty());
        assert_eq!(reg.handle(&1), None);
    }

    #[test]
    fn options_debug_hides_callback_body() {
        let opts: DraggableOptions<u32> = DraggableOptions::default().on_drag_end(|_, _| {});
        let s = alloc::format!("{opts:?}");
        assert!(s.contains("on_drag_end: true"));
    }
}
