// Copyright 2026 the Sortable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sortable Arena: a generational slot arena for registered item handles.
//!
//! Rendered items register themselves when they mount and deregister when
//! they unmount, independently of any drag gesture. This arena gives each
//! registration a stable, copyable [`ItemId`]; removal frees the slot in
//! O(1) without shifting later entries, and a freed slot's generation bumps
//! on reuse so stale ids never alias a different live item.
//!
//! # Example
//!
//! ```rust
//! use sortable_arena::ItemArena;
//!
//! let mut arena: ItemArena<&str> = ItemArena::new();
//! let a = arena.insert("a");
//! let b = arena.insert("b");
//!
//! assert_eq!(arena.remove(a), Some("a"));
//! assert!(!arena.is_alive(a));
//! assert!(arena.is_alive(b));
//!
//! // The freed slot is reused with a new generation; `a` stays stale.
//! let c = arena.insert("c");
//! assert_ne!(a, c);
//! assert_eq!(arena.get(a), None);
//! assert_eq!(arena.get(c), Some(&"c"));
//! ```
//!
//! This crate is `no_std`, uses `alloc`, and has no dependencies.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// Identifier for an entry in an [`ItemArena`].
///
/// A small, copyable handle consisting of a slot index and a generation
/// counter. It stays stable across unrelated insertions and removals but
/// becomes invalid when its own slot is freed.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `ItemId` that pointed to that
///   slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a
///   new, distinct `ItemId`.
///
/// Use [`ItemArena::is_alive`] to check whether an `ItemId` still refers to a
/// live entry. Stale ids never alias a different live entry because the
/// generation must match. The generation never decreases; `u32` is ample for
/// practical lifetimes and behavior on overflow is unspecified.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ItemId(u32, u32);

impl ItemId {
    const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// A slot arena of registered item handles with generational ids.
///
/// Iteration order is slot order, not registration order; callers that need
/// a spatial order sort by geometry downstream.
#[derive(Clone, Debug)]
pub struct ItemArena<T> {
    slots: Vec<Option<T>>,
    generations: Vec<u32>, // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

impl<T> Default for ItemArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ItemArena<T> {
    /// Create a new empty arena.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Register a handle, returning its stable id.
    pub fn insert(&mut self, value: T) -> ItemId {
        if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(value);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ItemId uses 32-bit indices by design."
            )]
            ItemId::new(idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(value));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ItemId uses 32-bit indices by design."
            )]
            ItemId::new((self.slots.len() - 1) as u32, generation)
        }
    }

    /// Deregister the entry for `id`, returning its handle.
    ///
    /// Returns `None` if `id` is stale. The slot is marked free without
    /// shifting any other entry.
    pub fn remove(&mut self, id: ItemId) -> Option<T> {
        if !self.is_alive(id) {
            return None;
        }
        let value = self.slots[id.idx()].take();
        self.free_list.push(id.idx());
        value
    }

    /// Whether `id` still refers to a live entry.
    pub fn is_alive(&self, id: ItemId) -> bool {
        self.slots.get(id.idx()).is_some_and(Option::is_some)
            && self.generations[id.idx()] == id.1
    }

    /// The handle registered under `id`, if it is still live.
    pub fn get(&self, id: ItemId) -> Option<&T> {
        if !self.is_alive(id) {
            return None;
        }
        self.slots[id.idx()].as_ref()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    /// Whether the arena has no live entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate live entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &T)> {
        self.slots.iter().enumerate().filter_map(|(idx, slot)| {
            let value = slot.as_ref()?;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ItemId uses 32-bit indices by design."
            )]
            Some((ItemId::new(idx as u32, self.generations[idx]), value))
        })
    }

    /// Remove every entry and forget all slots.
    ///
    /// Outstanding ids become stale; generations are reset, so ids from
    /// before the clear must not be mixed with ids issued after it.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.generations.clear();
        self.free_list.clear();
    }
}
