// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edges of a drop target and closest-edge detection.
//!
//! A drop target is described by its bounding [`Rect`]. While a pointer hovers
//! the target, [`closest_edge`] picks which of the allowed edges the pointer is
//! nearest to. That edge decides whether the dragged item lands before or
//! after the target (see [`Edge::is_after`]).
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_reorder::{Axis, Edge, closest_edge};
//!
//! let card = Rect::new(0.0, 0.0, 100.0, 40.0);
//!
//! // Pointer in the right third of a card in a horizontal list.
//! let edge = closest_edge(card, Point::new(80.0, 20.0), Axis::Horizontal.edges());
//! assert_eq!(edge, Some(Edge::Right));
//! assert!(Edge::Right.is_after(Axis::Horizontal));
//! ```

use kurbo::{Point, Rect};

/// Side of a drop target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Top edge (`y0`).
    Top,
    /// Right edge (`x1`).
    Right,
    /// Bottom edge (`y1`).
    Bottom,
    /// Left edge (`x0`).
    Left,
}

/// Layout direction of a list.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Items flow left to right.
    #[default]
    Horizontal,
    /// Items flow top to bottom.
    Vertical,
}

impl Axis {
    /// The two edges that separate neighbours along this axis, leading edge first.
    pub const fn edges(self) -> &'static [Edge] {
        match self {
            Self::Horizontal => &[Edge::Left, Edge::Right],
            Self::Vertical => &[Edge::Top, Edge::Bottom],
        }
    }
}

impl Edge {
    /// All four edges in clockwise order starting at the top.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The axis along which this edge separates neighbours.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Horizontal,
            Self::Top | Self::Bottom => Axis::Vertical,
        }
    }

    /// The edge on the other side of the target.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Whether dropping on this edge places the item after the target.
    ///
    /// Only the trailing edge of `axis` counts as "after". An edge that belongs
    /// to the other axis is treated as "before".
    pub const fn is_after(self, axis: Axis) -> bool {
        matches!(
            (axis, self),
            (Axis::Horizontal, Self::Right) | (Axis::Vertical, Self::Bottom)
        )
    }

    /// Distance from `point` to this edge of `rect`, measured inward.
    ///
    /// Negative when the point lies outside the rect on this side.
    pub fn distance(self, rect: Rect, point: Point) -> f64 {
        match self {
            Self::Top => point.y - rect.y0,
            Self::Right => rect.x1 - point.x,
            Self::Bottom => rect.y1 - point.y,
            Self::Left => point.x - rect.x0,
        }
    }
}

/// Find the allowed edge of `rect` nearest to `point`.
///
/// Ties resolve to the edge listed first in `allowed`. Returns `None` when
/// `allowed` is empty.
pub fn closest_edge(rect: Rect, point: Point, allowed: &[Edge]) -> Option<Edge> {
    let mut best: Option<(Edge, f64)> = None;
    for &edge in allowed {
        let d = edge.distance(rect, point);
        match best {
            Some((_, bd)) if bd <= d => {}
            _ => best = Some((edge, d)),
        }
    }
    best.map(|(edge, _)| edge)
}
