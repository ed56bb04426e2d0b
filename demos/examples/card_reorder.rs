// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-reorder a horizontal row of cards.
//!
//! This example shows how to combine:
//! - `understory_drag` to track a press-move-release gesture over the cards,
//! - `understory_reorder` to pick the closest edge of the card under the
//!   pointer and move the dragged card next to it.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example card_reorder`

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_drag::{DragChange, DragHost, DragSession, DraggableOptions, PointerEvent};
use understory_reorder::{Axis, ListDrop, SortableList, closest_edge};

const CARD_WIDTH: f64 = 100.0;
const CARD_HEIGHT: f64 = 40.0;
const GAP: f64 = 10.0;

/// Slot rectangles for a row of `n` cards.
fn layout(n: usize) -> Vec<Rect> {
    (0..n)
        .map(|i| {
            let x0 = i as f64 * (CARD_WIDTH + GAP);
            Rect::new(x0, 0.0, x0 + CARD_WIDTH, CARD_HEIGHT)
        })
        .collect()
}

/// Host that logs the visual side effects a renderer would perform.
///
/// Handles are card labels; the host never owns the cards.
#[derive(Debug, Default)]
struct ConsoleHost {
    listening: bool,
}

impl DragHost<&'static str> for ConsoleHost {
    fn raise(&mut self, card: &&'static str) {
        tracing::info!(card, "raise: z-index 999, pointer-events none");
    }

    fn restore(&mut self, card: &&'static str) {
        tracing::info!(card, "restore: z-index 0, pointer-events all");
    }

    fn insert_marker_after(&mut self, hovered: &&'static str, dragged: &&'static str) {
        tracing::info!(hovered, dragged, "placeholder inserted");
    }

    fn clear_markers(&mut self) {
        tracing::info!("placeholders cleared");
    }

    fn attach_listeners(&mut self) {
        self.listening = true;
        tracing::info!("document listeners attached");
    }

    fn detach_listeners(&mut self) {
        self.listening = false;
        tracing::info!("document listeners detached");
    }
}

/// A finished gesture waiting to be applied to the list.
type Pending = Rc<RefCell<Option<(&'static str, &'static str, Point)>>>;

fn register_card(
    session: &mut DragSession<&'static str, &'static str, ConsoleHost>,
    card: &'static str,
    pending: &Pending,
) -> anyhow::Result<()> {
    let pending = pending.clone();
    session.register(
        card,
        card,
        DraggableOptions::default()
            .with_kind("card")
            .on_drag_end(move |event, snap| {
                if let (Some(dragged), Some(over)) = (snap.dragged, snap.dragged_over) {
                    *pending.borrow_mut() = Some((dragged, over, event.position));
                }
            }),
    )?;
    Ok(())
}

/// Resolve the drop recorded by the completion callback against the current layout.
fn apply_pending(list: &mut SortableList<&'static str>, pending: &Pending) -> anyhow::Result<()> {
    let Some((dragged, over, release)) = pending.borrow_mut().take() else {
        println!("no drop target; order unchanged");
        return Ok(());
    };
    let position = |card: &str| {
        list.items()
            .iter()
            .position(|c| *c == card)
            .with_context(|| format!("card {card} is not in the list"))
    };
    let source = position(dragged)?;
    let target = position(over)?;
    let slots = layout(list.len());
    let edge = closest_edge(slots[target], release, Axis::Horizontal.edges());
    list.apply_drop(ListDrop {
        source,
        target,
        edge,
    })?;
    println!("{dragged} dropped on {edge:?} of {over}: {:?}", list.items());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut list = SortableList::new(vec!["apple", "orange", "banana", "grape"]);
    let pending: Pending = Rc::default();
    let mut session = DragSession::new(ConsoleHost::default());
    session.subscribe(|change| {
        if let DragChange::Transform(offset) = change {
            println!("  translate({:.0}px, {:.0}px)", offset.x, offset.y);
        }
    });
    for card in list.items().to_vec() {
        register_card(&mut session, card, &pending)?;
    }

    println!("== drag apple past banana's right edge ==");
    let slots = layout(list.len());
    let press = slots[0].center();
    let release = Point::new(slots[2].x1 - 10.0, press.y);
    for event in [
        PointerEvent::down("apple", press),
        PointerEvent::moved(Point::new(press.x + 60.0, press.y)),
        PointerEvent::over("orange", Point::new(press.x + 60.0, press.y)),
        PointerEvent::moved(release),
        PointerEvent::over("banana", release),
        PointerEvent::up(release),
    ] {
        session.dispatch(&event);
    }
    apply_pending(&mut list, &pending)?;

    println!("\n== add pear, then drag it onto orange's left edge ==");
    list.push("pear");
    register_card(&mut session, "pear", &pending)?;
    let slots = layout(list.len());
    let press = slots[4].center();
    let target = list
        .items()
        .iter()
        .position(|c| *c == "orange")
        .context("orange is in the list")?;
    let release = Point::new(slots[target].x0 + 5.0, press.y);
    for event in [
        PointerEvent::down("pear", press),
        PointerEvent::moved(release),
        PointerEvent::over("orange", release),
        PointerEvent::up(release),
    ] {
        session.dispatch(&event);
    }
    apply_pending(&mut list, &pending)?;

    println!("\n== drag grape and leave the window ==");
    let slots = layout(list.len());
    let press = slots[3].center();
    session.dispatch(&PointerEvent::down("grape", press));
    session.dispatch(&PointerEvent::moved(Point::new(press.x, press.y + 300.0)));
    session.dispatch(&PointerEvent::leave(Point::new(press.x, press.y + 300.0)));
    apply_pending(&mut list, &pending)?;

    println!("\nfinal order: {:?}", list.items());
    assert!(!session.host().listening);
    Ok(())
}
