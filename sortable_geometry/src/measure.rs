// Copyright 2026 the Sortable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The measurement seam between rendered items and snapshot capture.

use core::cell::Cell;

use alloc::rc::Rc;
use kurbo::Rect;

/// Report an axis-aligned bounding rectangle in viewport space.
///
/// This is the geometry query a host toolkit answers with its
/// `getBoundingClientRect` equivalent. Returning `None` means the handle
/// cannot currently be measured (for example, the item unmounted between
/// registration and capture); [`BoxSnapshot::capture`](crate::BoxSnapshot::capture)
/// skips such handles instead of failing.
///
/// Impls are provided for [`Rect`] itself, `Option<Rect>`, [`Cell`] wrappers,
/// references, and [`Rc`], so hosts and tests can share mutable geometry
/// handles without a bespoke type.
pub trait MeasureRect {
    /// The handle's current bounding rectangle, if it can be measured.
    fn bounding_rect(&self) -> Option<Rect>;
}

impl MeasureRect for Rect {
    #[inline]
    fn bounding_rect(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl MeasureRect for Option<Rect> {
    #[inline]
    fn bounding_rect(&self) -> Option<Rect> {
        *self
    }
}

impl MeasureRect for Cell<Rect> {
    #[inline]
    fn bounding_rect(&self) -> Option<Rect> {
        Some(self.get())
    }
}

impl MeasureRect for Cell<Option<Rect>> {
    #[inline]
    fn bounding_rect(&self) -> Option<Rect> {
        self.get()
    }
}

impl<T: MeasureRect + ?Sized> MeasureRect for &T {
    #[inline]
    fn bounding_rect(&self) -> Option<Rect> {
        (**self).bounding_rect()
    }
}

impl<T: MeasureRect + ?Sized> MeasureRect for Rc<T> {
    #[inline]
    fn bounding_rect(&self) -> Option<Rect> {
        (**self).bounding_rect()
    }
}
