// Copyright 2026 the Sortable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sortable Core: the logic layer behind a drag-to-reorder list.
//!
//! ## Overview
//!
//! During an interactive reorder gesture, this crate computes which display
//! slot the dragged item currently hovers over and the resulting display
//! order of all items — without ever touching the caller's item collection.
//! Geometry is frozen once at drag start (see
//! [`sortable_geometry::BoxSnapshot`]); the live pointer position, corrected
//! for any scrolling since the gesture began, is resolved against that frozen
//! geometry on every evaluation.
//!
//! ## Workflow
//!
//! 1) Register rendered item handles with
//!    [`SortableController::add_item`] as they mount, and set the container
//!    and scroll ancestor refs.
//! 2) Feed scroll events via [`SortableController::handle_scroll`].
//! 3) On every drag-state change, pointer move, or render pass, call
//!    [`SortableController::evaluate`] with the current [`DragInfo`]. The
//!    returned [`Evaluation`] carries the ordering permutation, the hover
//!    index, and — on the evaluation that ends a gesture over a valid slot —
//!    a [`DropEvent`] for the host to apply to its collection.
//!
//! The controller computes values; it does not invoke callbacks. A
//! higher-level layer applies the [`DropEvent`] and reflows items from the
//! ordering (for a flexbox-style host, the `order` of item `n` is
//! `ordering.iter().position(|&i| i == n)`).
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect, Vec2};
//! use sortable_core::{DragInfo, SortableController};
//!
//! let mut sortable: SortableController<Rect, Rect, Vec2> =
//!     SortableController::new();
//! sortable.set_container(Rect::new(0.0, 0.0, 100.0, 100.0));
//! sortable.set_scroll(Vec2::ZERO);
//! for i in 0..3 {
//!     let top = i as f64 * 30.0;
//!     sortable.add_item(Rect::new(0.0, top, 100.0, top + 20.0));
//! }
//!
//! // Pick up item 0 and hover over the last slot.
//! let dragging = DragInfo::dragging(0, Point::new(50.0, 85.0));
//! let eval = sortable.evaluate(3, &dragging).unwrap();
//! assert_eq!(eval.hover_index, Some(3));
//! assert_eq!(eval.ordering, vec![1, 2, 0]);
//!
//! // Release: the drop event carries the final slot.
//! let eval = sortable.evaluate(3, &DragInfo::idle()).unwrap();
//! assert_eq!(eval.drop.unwrap().new_index, 3);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod controller;
pub mod drag;
pub mod ordering;
pub mod scroll;

pub use controller::{DropEvent, Evaluation, SortableController, SortableError};
pub use drag::DragInfo;
pub use ordering::compute_ordering;
pub use scroll::{ScrollOffset, ScrollTracker};
