// Copyright 2026 the Sortable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state as read from the host's shared store.

use alloc::string::String;
use kurbo::Point;

/// A read-only snapshot of the host's drag state.
///
/// The host owns this state (typically in a shared store) and passes it to
/// [`SortableController::evaluate`](crate::SortableController::evaluate) on
/// every change; the controller never writes it. Absent values are modeled
/// as `Option`s rather than sentinel numbers: `index` is the dragged item's
/// position in the caller's collection before the drag, and `current_offset`
/// is the live pointer position, present only while a drag is under way.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragInfo {
    /// Whether a drag gesture is under way.
    pub dragging: bool,
    /// Source position of the dragged item in the caller's collection.
    pub index: Option<usize>,
    /// Host-defined kind of the dragged payload (e.g. an asset type).
    pub drag_type: Option<String>,
    /// Live pointer position in viewport coordinates.
    pub current_offset: Option<Point>,
}

impl DragInfo {
    /// The idle state: no gesture, no source item, no pointer.
    pub fn idle() -> Self {
        Self::default()
    }

    /// An active drag of the item at `index` with the pointer at `offset`.
    pub fn dragging(index: usize, offset: Point) -> Self {
        Self {
            dragging: true,
            index: Some(index),
            drag_type: None,
            current_offset: Some(offset),
        }
    }

    /// Same drag state with the pointer moved to `offset`.
    pub fn moved_to(&self, offset: Point) -> Self {
        Self {
            current_offset: Some(offset),
            ..self.clone()
        }
    }

    /// Same drag state with the given payload kind.
    pub fn with_type(self, drag_type: impl Into<String>) -> Self {
        Self {
            drag_type: Some(drag_type.into()),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_has_nothing_set() {
        let info = DragInfo::idle();
        assert!(!info.dragging);
        assert_eq!(info.index, None);
        assert_eq!(info.drag_type, None);
        assert_eq!(info.current_offset, None);
    }

    #[test]
    fn dragging_carries_source_and_pointer() {
        let info = DragInfo::dragging(2, Point::new(1.0, 2.0)).with_type("asset");
        assert!(info.dragging);
        assert_eq!(info.index, Some(2));
        assert_eq!(info.drag_type.as_deref(), Some("asset"));
        assert_eq!(info.current_offset, Some(Point::new(1.0, 2.0)));
    }

    #[test]
    fn moved_to_only_changes_pointer() {
        let info = DragInfo::dragging(1, Point::new(0.0, 0.0)).with_type("sound");
        let moved = info.moved_to(Point::new(9.0, 9.0));
        assert_eq!(moved.index, Some(1));
        assert_eq!(moved.drag_type.as_deref(), Some("sound"));
        assert_eq!(moved.current_offset, Some(Point::new(9.0, 9.0)));
    }
}
