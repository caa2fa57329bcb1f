// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Sortable: reorder and announcement primitives for sortable lists.
//!
//! This crate covers what happens to a list while one of its items is being
//! moved: which ordering results from a drop, and what a screen reader should
//! hear along the way. It does not know how items are drawn, how the pointer is
//! hit-tested, or how the move was started; pair it with
//! `understory_drag_handle` (or any other input layer) for that.
//!
//! - [`compute_reorder`] / [`move_item`]: list move semantics that never mutate the input.
//! - [`LiveAnnouncer`]: start / preview / commit / cancel text from host formatters,
//!   with 1-based positions.
//! - [`SortableSession`]: ties both to a lifted item, for pointer and keyboard moves.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_sortable::{Announcements, Sortable, SortableSession};
//!
//! let columns = vec![
//!     Sortable::new("name", "Name", 200.0),
//!     Sortable::new("size", "Size", 80.0),
//!     Sortable::new("date", "Modified", 120.0),
//! ];
//!
//! let mut session = SortableSession::new(Announcements::english());
//! assert_eq!(
//!     session.lift(&columns, "name").as_deref(),
//!     Some("Picked up item at position 1 of 3"),
//! );
//! session.over(&columns, Some("date"));
//!
//! let outcome = session.drop(&columns);
//! let reorder = outcome.reorder.expect("the column moved");
//! assert_eq!(reorder.moved.label, "Name");
//! assert_eq!((reorder.from, reorder.to), (0, 2));
//! // The host owns the list; it applies the new order itself.
//! assert_eq!(columns[0].id, "name");
//! ```
//!
//! ## Features
//!
//! - `hashbrown`: enable `validate_unique_ids`, a hash-based duplicate id check.
//! - `tracing`: emit `tracing` events when a lifted or target id is not in the list.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod announcer;
mod item;
mod reorder;
mod session;

pub use announcer::{AnnouncementContext, Announcements, LiveAnnouncer};
#[cfg(feature = "hashbrown")]
pub use item::{DuplicateIdError, validate_unique_ids};
pub use item::{Sortable, SortableItem, position_of};
pub use reorder::{Reorder, compute_reorder, compute_reorder_by_offset, move_item};
pub use session::{DropOutcome, SortableSession};
