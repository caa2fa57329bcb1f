// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List move semantics.
//!
//! The collection belongs to the host. These functions never touch the input
//! slice; they return a new ordering and leave persisting it to the caller.

use alloc::vec::Vec;

use crate::item::{SortableItem, position_of};

/// The result of moving one element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reorder<T> {
    /// The new ordering.
    pub items: Vec<T>,
    /// The element that moved.
    pub moved: T,
    /// Index of the moved element before the move.
    pub from: usize,
    /// Index of the moved element after the move.
    pub to: usize,
}

/// Remove the element at `from` and reinsert it at `to`.
///
/// All other elements keep their relative order. Returns `None` if either index
/// is out of bounds.
#[must_use]
pub fn move_item<T: Clone>(items: &[T], from: usize, to: usize) -> Option<Vec<T>> {
    if from >= items.len() || to >= items.len() {
        return None;
    }
    let mut out = items.to_vec();
    let item = out.remove(from);
    out.insert(to, item);
    Some(out)
}

/// Move the element `lifted_id` to the position currently held by `target_id`.
///
/// Dropping an element onto itself is a no-op and returns `None`, as does an id
/// that is not in `items`. Callers must not emit a change event for `None`.
///
/// ```
/// use understory_sortable::{Sortable, compute_reorder};
///
/// let items = [
///     Sortable::new("a", "Alpha", ()),
///     Sortable::new("b", "Beta", ()),
///     Sortable::new("c", "Gamma", ()),
/// ];
/// assert!(compute_reorder(&items, "a", "a").is_none());
///
/// let reorder = compute_reorder(&items, "a", "c").unwrap();
/// let ids: Vec<_> = reorder.items.iter().map(|item| item.id.as_str()).collect();
/// assert_eq!(ids, ["b", "c", "a"]);
/// assert_eq!(reorder.moved.id, "a");
/// ```
#[must_use]
pub fn compute_reorder<T>(items: &[T], lifted_id: &str, target_id: &str) -> Option<Reorder<T>>
where
    T: SortableItem + Clone,
{
    if lifted_id == target_id {
        return None;
    }
    let from = locate(items, lifted_id)?;
    let to = locate(items, target_id)?;
    reorder_indices(items, from, to)
}

/// Move the element `lifted_id` by `offset` positions, clamped to the list.
///
/// This is the keyboard counterpart of [`compute_reorder`]: negative offsets move
/// towards the front. Returns `None` if the clamped position is unchanged.
#[must_use]
pub fn compute_reorder_by_offset<T>(
    items: &[T],
    lifted_id: &str,
    offset: isize,
) -> Option<Reorder<T>>
where
    T: SortableItem + Clone,
{
    let from = locate(items, lifted_id)?;
    let to = offset_index(from, offset, items.len());
    reorder_indices(items, from, to)
}

pub(crate) fn offset_index(from: usize, offset: isize, len: usize) -> usize {
    from.saturating_add_signed(offset).min(len.saturating_sub(1))
}

fn reorder_indices<T: Clone>(items: &[T], from: usize, to: usize) -> Option<Reorder<T>> {
    if from == to {
        return None;
    }
    let moved = items.get(from)?.clone();
    let items = move_item(items, from, to)?;
    Some(Reorder {
        items,
        moved,
        from,
        to,
    })
}

fn locate<T: SortableItem>(items: &[T], id: &str) -> Option<usize> {
    let found = position_of(items, id);
    #[cfg(feature = "tracing")]
    if found.is_none() {
        tracing::debug!(id, len = items.len(), "sortable id not found");
    }
    found
}
