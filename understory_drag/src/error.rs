// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while wiring draggables into a session.

/// Setup-time misuse of a [`DragSession`](crate::DragSession) or [`Registry`](crate::Registry).
///
/// Pointer events never produce errors; events that cannot be applied are
/// ignored and leave the session unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DragError<K> {
    /// The id is already bound to another element in this session.
    #[error("drag id {0:?} is already registered; ids must be unique within a session")]
    DuplicateId(K),
    /// The id has not been registered in this session.
    #[error("drag id {0:?} is not registered; register the draggable before using it")]
    UnknownId(K),
}
