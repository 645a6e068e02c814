// Copyright 2026 the Sortable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sortable Geometry: box snapshots and reading-order slot resolution.
//!
//! This crate is the pure geometry half of a drag-to-reorder list: given the
//! bounding rectangles of the rendered items, frozen at the instant a drag
//! begins, it answers "which display slot does this pointer position fall
//! into?" under the list's reading-order convention (top-to-bottom rows,
//! left-to-right within a row).
//!
//! - [`MeasureRect`]: the measurement seam. Anything that can report an
//!   axis-aligned bounding [`Rect`] — or decline to, when it is not currently
//!   renderable — can feed a snapshot.
//! - [`BoxSnapshot`]: captures and sorts item rectangles once per drag
//!   gesture and stays immutable for its lifetime.
//! - [`slot_for_point`]: maps a pointer position to a slot in `[0, len]`
//!   against a reading-order-sorted slice of rectangles.
//!
//! No state, no events: the enclosing controller decides *when* to capture
//! and what to do with the resolved slot.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use sortable_geometry::BoxSnapshot;
//!
//! // Two rows of one item each, registered out of display order.
//! let items = [
//!     Rect::new(0.0, 50.0, 100.0, 90.0),
//!     Rect::new(0.0, 0.0, 100.0, 40.0),
//! ];
//! let snapshot = BoxSnapshot::capture(&items);
//!
//! // The snapshot is reading-order sorted, so a point in the gap between
//! // the rows resolves to the slot between the two items.
//! assert_eq!(snapshot.slot_for(Point::new(50.0, 45.0)), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod measure;
mod slot;
mod snapshot;

pub use measure::MeasureRect;
pub use slot::slot_for_point;
pub use snapshot::BoxSnapshot;
