// Copyright 2026 the Sortable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frozen, reading-order-sorted item geometry for one drag gesture.

use core::cmp::Ordering;

use alloc::vec::Vec;
use kurbo::{Point, Rect};

use crate::measure::MeasureRect;
use crate::slot::slot_for_point;

/// The frozen set of item bounding rectangles for one drag gesture.
///
/// Captured exactly once, at the instant a drag begins; capturing later would
/// fold in-flight layout changes into the geometry and make hover resolution
/// inconsistent across the gesture. The snapshot is never re-sorted or
/// mutated after capture.
///
/// Handles that fail to measure are skipped, so the snapshot may be shorter
/// than the number of registered items; slot resolution and ordering
/// tolerate that.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoxSnapshot {
    boxes: Vec<Rect>,
}

impl BoxSnapshot {
    /// Capture a snapshot from the currently registered item handles.
    ///
    /// Registration order is irrelevant: measured rectangles are stable-sorted
    /// into reading order, top coordinate ascending with ties broken by left
    /// coordinate ascending.
    pub fn capture<'a, H, I>(refs: I) -> Self
    where
        H: MeasureRect + 'a,
        I: IntoIterator<Item = &'a H>,
    {
        let mut boxes: Vec<Rect> = refs
            .into_iter()
            .filter_map(MeasureRect::bounding_rect)
            .collect();
        // Sort top-to-bottom, left-to-right. Coordinates are assumed finite;
        // NaN compares as equal, which keeps the stable sort total.
        boxes.sort_by(|a, b| {
            cmp_f64(a.y0, b.y0).then_with(|| cmp_f64(a.x0, b.x0))
        });
        Self { boxes }
    }

    /// The captured rectangles in reading order.
    pub fn boxes(&self) -> &[Rect] {
        &self.boxes
    }

    /// Number of rectangles that measured successfully.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether nothing measured successfully.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Resolve the display slot for a pointer position against this snapshot.
    ///
    /// See [`slot_for_point`] for the reading-order convention.
    pub fn slot_for(&self, pos: Point) -> usize {
        slot_for_point(pos, &self.boxes)
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
