// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_reorder --heading-base-level=0

//! Understory Reorder: edge-aware reordering for drag-and-drop lists.
//!
//! ## Overview
//!
//! A sortable list needs two answers when a dragged item is released over
//! another item: which side of the target the pointer was on, and where the
//! dragged item ends up once it has been taken out of the sequence. This
//! crate answers both, independently of any widget toolkit.
//!
//! - [`closest_edge`] picks the [`Edge`] of a target [`kurbo::Rect`] nearest
//!   to the pointer, restricted to a set of allowed edges (usually
//!   [`Axis::edges`]).
//! - [`destination_index`] turns `(start, target, edge)` into the final index
//!   of the moved item, compensating for the shift caused by its removal.
//! - [`reorder_with_edge`] applies that move to a slice and returns a new
//!   `Vec`. Out-of-range indices fail with [`ReorderError`]; nothing is clamped.
//! - [`SortableList`] owns a sequence and applies [`ListDrop`]s to it,
//!   refusing drops of an item onto itself.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_reorder::{Axis, closest_edge, reorder_with_edge};
//!
//! let cards = ["apple", "orange", "banana", "grape"];
//! // Layout of the card at index 2.
//! let banana = Rect::new(200.0, 0.0, 300.0, 40.0);
//!
//! // "apple" is released near the right side of "banana".
//! let edge = closest_edge(banana, Point::new(290.0, 20.0), Axis::Horizontal.edges());
//! let next = reorder_with_edge(&cards, 0, 2, edge, Axis::Horizontal).unwrap();
//! assert_eq!(next, ["orange", "banana", "apple", "grape"]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` float math for `kurbo`.
//! - `tracing`: emit `tracing` events when [`SortableList`] applies or refuses a drop.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod edge;
mod list;
mod reorder;

pub use edge::{Axis, Edge, closest_edge};
pub use list::{ListDrop, SortableList};
pub use reorder::{ReorderError, destination_index, reorder, reorder_with_edge};
