// Copyright 2026 the Sortable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll offset tracking for the list's scrollable ancestor.

use core::cell::Cell;

use alloc::rc::Rc;
use kurbo::Vec2;

/// Report the current scroll offset of a scrollable element.
///
/// This is the `scrollLeft`/`scrollTop` readout of the host toolkit. The
/// controller reads it once when a gesture begins (the baseline) and on each
/// scroll notification thereafter.
pub trait ScrollOffset {
    /// The element's current scroll offset.
    fn scroll_offset(&self) -> Vec2;
}

impl ScrollOffset for Vec2 {
    #[inline]
    fn scroll_offset(&self) -> Vec2 {
        *self
    }
}

impl ScrollOffset for Cell<Vec2> {
    #[inline]
    fn scroll_offset(&self) -> Vec2 {
        self.get()
    }
}

impl<T: ScrollOffset + ?Sized> ScrollOffset for &T {
    #[inline]
    fn scroll_offset(&self) -> Vec2 {
        (**self).scroll_offset()
    }
}

impl<T: ScrollOffset + ?Sized> ScrollOffset for Rc<T> {
    #[inline]
    fn scroll_offset(&self) -> Vec2 {
        (**self).scroll_offset()
    }
}

/// Running scroll offset of the scrollable ancestor.
///
/// One tracker lives for the whole lifetime of a mounted container, fed by
/// the host's scroll events via [`observe`](Self::observe). The per-gesture
/// *baseline* does not live here: it is recorded in the gesture context at
/// drag start, so scrolling that happens before a drag never leaks into the
/// gesture's delta.
///
/// Both axes are tracked. Hover resolution currently applies only the
/// vertical component of the delta; the horizontal component is available
/// but unused because the list containers this models scroll vertically
/// only. Integrators with horizontally scrolling containers should confirm
/// whether to apply `delta.x` before relying on it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollTracker {
    current: Vec2,
}

impl ScrollTracker {
    /// Create a tracker with a zero offset.
    pub const fn new() -> Self {
        Self { current: Vec2::ZERO }
    }

    /// Record the offset carried by a scroll event.
    pub fn observe(&mut self, offset: Vec2) {
        self.current = offset;
    }

    /// The most recently observed offset.
    pub fn offset(&self) -> Vec2 {
        self.current
    }

    /// Accumulated scroll delta relative to a gesture baseline.
    pub fn delta_from(&self, baseline: Vec2) -> Vec2 {
        self.current - baseline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let tracker = ScrollTracker::new();
        assert_eq!(tracker.offset(), Vec2::ZERO);
    }

    #[test]
    fn observe_replaces_current_offset() {
        let mut tracker = ScrollTracker::new();
        tracker.observe(Vec2::new(3.0, 40.0));
        tracker.observe(Vec2::new(0.0, 55.0));
        assert_eq!(tracker.offset(), Vec2::new(0.0, 55.0));
    }

    #[test]
    fn delta_is_relative_to_baseline() {
        let mut tracker = ScrollTracker::new();
        tracker.observe(Vec2::new(0.0, 100.0));
        let baseline = tracker.offset();
        tracker.observe(Vec2::new(5.0, 130.0));
        assert_eq!(tracker.delta_from(baseline), Vec2::new(5.0, 30.0));
    }

    #[test]
    fn scrolling_back_yields_negative_delta() {
        let mut tracker = ScrollTracker::new();
        tracker.observe(Vec2::new(0.0, 80.0));
        let baseline = tracker.offset();
        tracker.observe(Vec2::new(0.0, 20.0));
        assert_eq!(tracker.delta_from(baseline), Vec2::new(0.0, -60.0));
    }

    #[test]
    fn shared_cell_source_reads_live() {
        let source = Rc::new(Cell::new(Vec2::new(0.0, 10.0)));
        let handle = Rc::clone(&source);
        assert_eq!(handle.scroll_offset(), Vec2::new(0.0, 10.0));
        source.set(Vec2::new(0.0, 25.0));
        assert_eq!(handle.scroll_offset(), Vec2::new(0.0, 25.0));
    }
}
