// Copyright 2026 the Sortable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller implementation.
//!
//! ## Overview
//!
//! Owns the drag lifecycle for one mounted sortable container: the registry
//! of rendered item handles, the container and scroll ancestor refs, the
//! scroll tracker, and — while a gesture is live — the per-gesture context
//! (frozen box snapshot, scroll baseline, last-seen drag state).
//!
//! ## Lifecycle
//!
//! - **Idle**: no gesture context. Evaluations report no hover and the
//!   identity ordering.
//! - **Idle → dragging**: the first evaluation with `dragging = true`
//!   captures the box snapshot over all live item handles, then requires the
//!   container and scroll refs (a missing ref is a wiring bug in the host and
//!   fails the evaluation), then records the scroll baseline.
//! - **Dragging**: each evaluation resolves the hover slot from the live
//!   pointer, the live container rect, and the frozen snapshot.
//! - **Dragging → idle**: the first evaluation with `dragging = false`
//!   resolves the hover one last time from the gesture's last-seen pointer;
//!   a valid slot yields a [`DropEvent`], and the gesture context is
//!   discarded either way.
//!
//! All of this is synchronous and single-threaded: the snapshot exists
//! before any hover math for its gesture runs because both happen inside the
//! same `evaluate` call sequence.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect, Vec2};

use sortable_arena::{ItemArena, ItemId};
use sortable_geometry::{BoxSnapshot, MeasureRect};

use crate::drag::DragInfo;
use crate::ordering::compute_ordering;
use crate::scroll::{ScrollOffset, ScrollTracker};

/// Contract violations raised when a drag starts against a misconfigured
/// controller.
///
/// These signal wiring bugs in the integrating layer, not runtime
/// conditions: hover geometry is undefined without the container and scroll
/// refs, so the gesture must not proceed. Everything recoverable (pointer
/// outside the container, unmeasurable items, no drop target) is expressed
/// as an absent value instead.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SortableError {
    /// A drag began before a container ref was assigned to the sortable area.
    MissingContainer,
    /// A drag began before a scroll ref was assigned to the scrollable area.
    MissingScroll,
}

impl core::fmt::Display for SortableError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingContainer => {
                write!(f, "a container ref must be assigned to the sortable area")
            }
            Self::MissingScroll => {
                write!(f, "a scroll ref must be assigned to the scrollable area")
            }
        }
    }
}

impl core::error::Error for SortableError {}

/// The result of one completed drag gesture over a valid slot.
///
/// Produced at most once per gesture, on the evaluation that observes the
/// dragging → idle transition. The host applies it to its item collection;
/// the controller never mutates the collection itself.
#[derive(Clone, Debug, PartialEq)]
pub struct DropEvent {
    /// The drag state as of the last evaluation while the gesture was live.
    pub info: DragInfo,
    /// The display slot the item was dropped into.
    pub new_index: usize,
}

/// Outputs of one [`SortableController::evaluate`] tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// Display ordering: `ordering[slot]` is the source index of the item
    /// that should visually occupy `slot`. The identity permutation whenever
    /// no reorder is in flight.
    pub ordering: Vec<usize>,
    /// The slot the dragged item currently hovers over, if the pointer is
    /// over a valid target.
    pub hover_index: Option<usize>,
    /// Passthrough of the source item's index from [`DragInfo`].
    pub dragging_index: Option<usize>,
    /// Passthrough of the dragged payload kind from [`DragInfo`].
    pub dragging_type: Option<String>,
    /// The drop result, present only on the evaluation that ends a gesture
    /// over a valid slot.
    pub drop: Option<DropEvent>,
}

// Per-gesture context: created when a drag begins, dropped when it ends, so
// no geometry state outlives the gesture it belongs to.
#[derive(Clone, Debug)]
struct Gesture {
    snapshot: BoxSnapshot,
    scroll_origin: Vec2,
    last_info: DragInfo,
}

/// Drag-lifecycle orchestrator for one sortable container.
///
/// Generic over the three host-provided handle kinds: `H` for registered
/// item handles and `C` for the container ref (both [`MeasureRect`]), and
/// `S` for the scroll ancestor ref ([`ScrollOffset`]).
///
/// ## Usage
///
/// - Register item handles with [`add_item`](Self::add_item) /
///   [`remove_item`](Self::remove_item) as items mount and unmount; this is
///   independent of drag state.
/// - Assign the two ancestor refs with [`set_container`](Self::set_container)
///   and [`set_scroll`](Self::set_scroll) before the first drag.
/// - Call [`handle_scroll`](Self::handle_scroll) from the host's scroll
///   listener and [`evaluate`](Self::evaluate) on every drag-state change,
///   pointer move, or render pass.
pub struct SortableController<H, C, S> {
    items: ItemArena<H>,
    container: Option<C>,
    scroll: Option<S>,
    tracker: ScrollTracker,
    gesture: Option<Gesture>,
}

impl<H, C, S> core::fmt::Debug for SortableController<H, C, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SortableController")
            .field("items", &self.items.len())
            .field("has_container", &self.container.is_some())
            .field("has_scroll", &self.scroll.is_some())
            .field("dragging", &self.gesture.is_some())
            .finish_non_exhaustive()
    }
}

impl<H, C, S> Default for SortableController<H, C, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H, C, S> SortableController<H, C, S> {
    /// Create a controller with no items and no ancestor refs.
    pub const fn new() -> Self {
        Self {
            items: ItemArena::new(),
            container: None,
            scroll: None,
            tracker: ScrollTracker::new(),
            gesture: None,
        }
    }

    /// Register a rendered item handle. May be called at any time, including
    /// mid-gesture; the live snapshot is unaffected until the next drag.
    pub fn add_item(&mut self, handle: H) -> ItemId {
        self.items.insert(handle)
    }

    /// Deregister an item handle by identity. Stale ids are ignored.
    pub fn remove_item(&mut self, id: ItemId) -> Option<H> {
        self.items.remove(id)
    }

    /// Assign the container ref (the sortable area whose bounds gate hover).
    pub fn set_container(&mut self, container: C) {
        self.container = Some(container);
    }

    /// Assign the scroll ref (the scrollable ancestor whose offset is
    /// baselined at drag start).
    pub fn set_scroll(&mut self, scroll: S) {
        self.scroll = Some(scroll);
    }

    /// Whether a gesture is currently live.
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }
}

impl<H, C, S> SortableController<H, C, S>
where
    H: MeasureRect,
    C: MeasureRect,
    S: ScrollOffset,
{
    /// Record the scroll ref's current offset. Call from the host's scroll
    /// listener; a no-op until a scroll ref is assigned.
    pub fn handle_scroll(&mut self) {
        if let Some(scroll) = self.scroll.as_ref() {
            self.tracker.observe(scroll.scroll_offset());
        }
    }

    /// Run one synchronous evaluation against the host's current drag state.
    ///
    /// `item_count` is the length of the caller's item collection (the
    /// ordering is a permutation of `0..item_count`; the registry may be
    /// shorter if some items failed to measure).
    ///
    /// Drives the drag lifecycle: observes idle ↔ dragging transitions of
    /// `info.dragging`, captures or discards the gesture context
    /// accordingly, and returns the current [`Evaluation`]. Fails only on
    /// the evaluation that starts a gesture against missing ancestor refs.
    pub fn evaluate(
        &mut self,
        item_count: usize,
        info: &DragInfo,
    ) -> Result<Evaluation, SortableError> {
        if info.dragging && self.gesture.is_none() {
            self.begin_gesture(info)?;
        }

        let mut drop = None;
        if !info.dragging
            && let Some(gesture) = self.gesture.take()
        {
            // The ending DragInfo no longer carries a pointer; the final
            // hover comes from the last state seen while the gesture was
            // live.
            let final_hover = self.hover_for(&gesture, gesture.last_info.current_offset);
            if let Some(new_index) = final_hover {
                drop = Some(DropEvent {
                    info: gesture.last_info,
                    new_index,
                });
            }
        }

        if let Some(gesture) = self.gesture.as_mut() {
            gesture.last_info = info.clone();
        }
        let hover_index = match self.gesture.as_ref() {
            Some(gesture) => self.hover_for(gesture, info.current_offset),
            None => None,
        };

        Ok(Evaluation {
            ordering: compute_ordering(item_count, info.index, hover_index),
            hover_index,
            dragging_index: info.index,
            dragging_type: info.drag_type.clone(),
            drop,
        })
    }

    // Idle → dragging side effects, in order: snapshot capture over the live
    // registry, ancestor ref contract checks, scroll baseline. The gesture
    // is fully constructed before any hover resolution for it can run.
    fn begin_gesture(&mut self, info: &DragInfo) -> Result<(), SortableError> {
        let snapshot = BoxSnapshot::capture(self.items.iter().map(|(_, handle)| handle));
        if self.container.is_none() {
            return Err(SortableError::MissingContainer);
        }
        let scroll = self.scroll.as_ref().ok_or(SortableError::MissingScroll)?;
        let origin = scroll.scroll_offset();
        // Seed the tracker so a gesture that sees no scroll events reads a
        // zero delta.
        self.tracker.observe(origin);
        self.gesture = Some(Gesture {
            snapshot,
            scroll_origin: origin,
            last_info: info.clone(),
        });
        Ok(())
    }

    // Resolve the hover slot for one pointer position, or `None` when there
    // is no valid drop target.
    //
    // Containment is tested with the raw viewport point against the live
    // container rect (same coordinate space); the scroll delta then maps the
    // point into the snapshot's pre-scroll space for slot resolution. Only
    // the vertical delta is applied — see [`ScrollTracker`].
    fn hover_for(&self, gesture: &Gesture, offset: Option<Point>) -> Option<usize> {
        let pos = offset?;
        let bounds = self.container.as_ref()?.bounding_rect()?;
        if !contains_closed(&bounds, pos) {
            return None;
        }
        let delta = self.tracker.delta_from(gesture.scroll_origin);
        let adjusted = Point::new(pos.x, pos.y + delta.y);
        if gesture.snapshot.is_empty() {
            return Some(0);
        }
        Some(gesture.snapshot.slot_for(adjusted))
    }
}

// `kurbo::Rect::contains` is half-open; the container test is closed on all
// four edges so a pointer resting exactly on the bottom or right edge still
// targets the list.
fn contains_closed(bounds: &Rect, pos: Point) -> bool {
    pos.x >= bounds.x0 && pos.x <= bounds.x1 && pos.y >= bounds.y0 && pos.y <= bounds.y1
}
