// Copyright 2026 the Sortable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display-order permutations for an in-flight reorder.

use alloc::vec::Vec;

/// Compute the display ordering for `item_count` items while the item at
/// `source_index` hovers over `hover_index`.
///
/// The result is always a permutation of `0..item_count`: position `slot` in
/// the returned sequence holds the source index of the item that should
/// visually occupy `slot`. The caller's collection is never touched — a
/// flexbox-style host derives the `order` of item `n` as
/// `ordering.iter().position(|&i| i == n)`.
///
/// When either index is absent there is no reorder in flight and the
/// identity permutation is returned. Otherwise the element at `source_index`
/// is removed and reinserted at `hover_index`, with insertion past the end
/// appending ("pick up the item at `source_index`, drop it so it becomes
/// the item at display position `hover_index`"). A source index outside the
/// collection also yields the identity permutation, keeping the permutation
/// invariant instead of inventing an item. Pure function of its inputs.
///
/// ```
/// use sortable_core::compute_ordering;
///
/// assert_eq!(compute_ordering(4, Some(0), Some(2)), vec![1, 2, 0, 3]);
/// assert_eq!(compute_ordering(4, Some(3), Some(0)), vec![3, 0, 1, 2]);
/// assert_eq!(compute_ordering(4, None, Some(2)), vec![0, 1, 2, 3]);
/// ```
pub fn compute_ordering(
    item_count: usize,
    source_index: Option<usize>,
    hover_index: Option<usize>,
) -> Vec<usize> {
    let mut ordering: Vec<usize> = (0..item_count).collect();
    if let (Some(source), Some(hover)) = (source_index, hover_index)
        && source < item_count
    {
        ordering.remove(source);
        let slot = hover.min(ordering.len());
        ordering.insert(slot, source);
    }
    ordering
}
