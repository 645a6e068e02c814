// Copyright 2026 the Sortable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A full drag-to-reorder gesture over a vertical list, including a
//! mid-gesture scroll.
//!
//! The host simulated here owns the item collection and the drag store; the
//! controller only ever sees counts, geometry, and drag state, and hands
//! back orderings and a drop event for the host to apply.
//!
//! Run:
//! - `cargo run -p sortable_demos --example drag_reorder`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Rect, Vec2};
use sortable_core::{DragInfo, DropEvent, SortableController};

fn main() {
    let mut items = vec!["backdrop", "cat", "ball", "banner"];

    // Four rows of 40px inside a 200px-tall container.
    let mut sortable: SortableController<Rect, Rect, Rc<Cell<Vec2>>> = SortableController::new();
    sortable.set_container(Rect::new(0.0, 0.0, 160.0, 200.0));
    let scroll = Rc::new(Cell::new(Vec2::ZERO));
    sortable.set_scroll(Rc::clone(&scroll));
    for i in 0..items.len() {
        let top = i as f64 * 45.0;
        sortable.add_item(Rect::new(0.0, top, 160.0, top + 40.0));
    }

    // Pick up "cat" (index 1) and drag toward the top of the list.
    let info = DragInfo::dragging(1, Point::new(80.0, 60.0)).with_type("sprite");
    let eval = sortable.evaluate(items.len(), &info).unwrap();
    println!("== picked up {:?} ==", items[1]);
    println!("  hover {:?}, ordering {:?}", eval.hover_index, eval.ordering);

    let info = info.moved_to(Point::new(80.0, 10.0));
    let eval = sortable.evaluate(items.len(), &info).unwrap();
    println!("== moved to the top ==");
    println!("  hover {:?}, ordering {:?}", eval.hover_index, eval.ordering);
    assert_eq!(eval.hover_index, Some(0));
    assert_eq!(eval.ordering, vec![1, 0, 2, 3]);

    // The list scrolls down 45px mid-gesture; the pointer stays put but now
    // rests over what was the second row when the snapshot was taken.
    scroll.set(Vec2::new(0.0, 45.0));
    sortable.handle_scroll();
    let eval = sortable.evaluate(items.len(), &info).unwrap();
    println!("== scrolled down one row ==");
    println!("  hover {:?}, ordering {:?}", eval.hover_index, eval.ordering);
    assert_eq!(eval.hover_index, Some(1));

    // Release. The drop event tells the host where the item landed.
    let eval = sortable.evaluate(items.len(), &DragInfo::idle()).unwrap();
    let DropEvent { info, new_index } = eval.drop.expect("released over the list");
    let source = info.index.expect("a drag always has a source");
    let moved = items.remove(source);
    items.insert(new_index.min(items.len()), moved);
    println!("== dropped at slot {new_index} ==");
    println!("  items are now {items:?}");
    assert_eq!(items, vec!["backdrop", "cat", "ball", "banner"]);
}
