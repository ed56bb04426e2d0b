// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drag --heading-base-level=0

//! Understory Drag: a renderer-agnostic pointer drag session.
//!
//! ## Overview
//!
//! A [`DragSession`] turns raw pointer input into drag state for a group of
//! sibling draggables: which element is being dragged, how far the pointer has
//! travelled since the press (the element's translation), and which other
//! element the pointer is currently over.
//!
//! The crate does no hit testing and owns no elements. The host:
//!
//! - registers each draggable with an id and a non-owning element handle when
//!   it mounts, and unregisters it when it unmounts ([`Registry`]);
//! - forwards pointer events ([`PointerEvent`]) to the session;
//! - implements [`DragHost`] to perform the visual side effects the session
//!   requests (raising the dragged element, inserting placeholders, attaching
//!   document-level listeners);
//! - reads [`DragSession::transform`] and [`DragSession::dragged_over`], or
//!   subscribes to [`DragChange`] notifications, to re-render.
//!
//! ## Lifecycle
//!
//! 1) Press on a registered element starts a drag. The press position becomes
//!    the anchor, the element is raised, and listeners are attached.
//! 2) Each move sets the translation to `pointer - anchor`.
//! 3) Entering another registered element makes it the hovered element and
//!    inserts a placeholder after it, once per enter.
//! 4) Release, or leaving the document, fires the dragged element's
//!    completion callback with the final [`DragSnapshot`], then resets the
//!    state, restores the element, and detaches listeners.
//!
//! Only one drag runs at a time. A press during a drag cancels the stale drag
//! before starting the new one, so listeners never stack up.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::Point;
//! use understory_drag::{DragSession, DraggableOptions, NoopHost, PointerEvent};
//!
//! let drops: Rc<RefCell<Vec<(u32, Option<u32>)>>> = Rc::default();
//! let mut session: DragSession<u32, (), NoopHost> = DragSession::new(NoopHost);
//! for id in 0..4 {
//!     let drops = drops.clone();
//!     session
//!         .register(
//!             id,
//!             (),
//!             DraggableOptions::default().on_drag_end(move |_, snap| {
//!                 if let Some(dragged) = snap.dragged {
//!                     drops.borrow_mut().push((dragged, snap.dragged_over));
//!                 }
//!             }),
//!         )
//!         .unwrap();
//! }
//!
//! for event in [
//!     PointerEvent::down(0, Point::new(10.0, 10.0)),
//!     PointerEvent::moved(Point::new(120.0, 12.0)),
//!     PointerEvent::over(2, Point::new(120.0, 12.0)),
//!     PointerEvent::up(Point::new(120.0, 12.0)),
//! ] {
//!     session.dispatch(&event);
//! }
//!
//! assert_eq!(*drops.borrow(), [(0, Some(2))]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` float math for `kurbo`.
//! - `tracing`: emit `tracing` events when drags start, end, or are cancelled.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod event;
mod host;
mod observer;
mod registry;
mod session;
mod state;

pub use error::DragError;
pub use event::{PointerEvent, PointerKind};
pub use host::{DragHost, NoopHost};
pub use observer::{DragChange, Observers, SubscriptionId};
pub use registry::{DragEndCallback, DraggableOptions, Registry};
pub use session::{DragConfig, DragSession, Handled};
pub use state::{DragSnapshot, DragState};
