// Copyright 2026 the Sortable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading-order slot resolution over a two-column grid.
//!
//! Registers item handles in an arena (out of display order, with one
//! removed again before capture), snapshots their geometry, and sweeps a
//! pointer through rows, columns, and the gaps between them.
//!
//! Run:
//! - `cargo run -p sortable_demos --example grid_hover`

use kurbo::{Point, Rect};
use sortable_arena::ItemArena;
use sortable_geometry::BoxSnapshot;

fn main() {
    // A 2x2 grid of 40x20 tiles with 10px gutters, registered bottom row
    // first. Registration order never matters: the snapshot sorts by
    // reading order.
    let mut arena: ItemArena<Rect> = ItemArena::new();
    arena.insert(Rect::new(0.0, 30.0, 40.0, 50.0));
    arena.insert(Rect::new(50.0, 30.0, 90.0, 50.0));
    let stray = arena.insert(Rect::new(500.0, 500.0, 510.0, 510.0));
    arena.insert(Rect::new(0.0, 0.0, 40.0, 20.0));
    arena.insert(Rect::new(50.0, 0.0, 90.0, 20.0));

    // The stray tile unmounts before the drag begins.
    arena.remove(stray);

    let snapshot = BoxSnapshot::capture(arena.iter().map(|(_, r)| r));
    println!("== snapshot ({} tiles) ==", snapshot.len());
    for (slot, b) in snapshot.boxes().iter().enumerate() {
        println!("  slot {slot}: top {:>2} left {:>2}", b.y0, b.x0);
    }

    let probes = [
        ("above everything", Point::new(45.0, -10.0), 0),
        ("first tile, left half", Point::new(10.0, 10.0), 0),
        ("first tile, right half", Point::new(30.0, 10.0), 1),
        ("gutter between columns", Point::new(45.0, 10.0), 1),
        ("right of the first row", Point::new(120.0, 10.0), 2),
        ("gutter between rows", Point::new(10.0, 25.0), 2),
        ("second row, second tile", Point::new(80.0, 40.0), 4),
        ("below everything", Point::new(10.0, 90.0), 4),
    ];

    println!("== probes ==");
    for (label, pos, expected) in probes {
        let slot = snapshot.slot_for(pos);
        println!("  {label:<24} ({:>5}, {:>5}) -> slot {slot}", pos.x, pos.y);
        assert_eq!(slot, expected, "{label}");
    }
}
