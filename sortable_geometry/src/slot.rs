// Copyright 2026 the Sortable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading-order slot resolution for a pointer position.

use kurbo::{Point, Rect};

/// Resolve the display slot a pointer position falls into.
///
/// `boxes` must be sorted in reading order (top-to-bottom rows, ties
/// left-to-right), as produced by
/// [`BoxSnapshot::capture`](crate::BoxSnapshot::capture). The result is in
/// `[0, boxes.len()]`: slot `n` means "insert before the item currently in
/// reading-order position `n`", and `boxes.len()` means past the last item.
///
/// A box counts as *passed* when the position is below its vertical midline,
/// or level with its row and right of its horizontal midline. The resolved
/// slot is one past the last passed box, so positions in the gaps between
/// rows or columns snap to the nearest slot rather than requiring exact
/// containment. Pure function of its inputs.
pub fn slot_for_point(pos: Point, boxes: &[Rect]) -> usize {
    let mut slot = 0;
    for (i, b) in boxes.iter().enumerate() {
        let center = b.center();
        let below_row = pos.y > center.y;
        let level_with_row = pos.y > b.y0 && pos.y < b.y1;
        let past_column = pos.x > center.x;
        if below_row || (level_with_row && past_column) {
            slot = i + 1;
        }
    }
    slot
}
