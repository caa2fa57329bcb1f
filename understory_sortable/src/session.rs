// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A reorder gesture from lift to drop.
//!
//! [`SortableSession`] remembers which item is lifted and which item is the
//! current drop target, and runs the [`LiveAnnouncer`] alongside. The list
//! itself stays with the host and is passed in on every call; it must not change
//! between [`SortableSession::lift`] and the end of the session.
//!
//! ```
//! use understory_sortable::{Announcements, Sortable, SortableSession};
//!
//! let items: Vec<_> = ["a", "b", "c", "d", "e"]
//!     .into_iter()
//!     .map(|id| Sortable::new(id, id.to_uppercase(), ()))
//!     .collect();
//! let mut session = SortableSession::new(Announcements::english());
//!
//! session.lift(&items, "b");
//! // Arrow down twice.
//! session.move_by(&items, 1);
//! session.move_by(&items, 1);
//! assert_eq!(session.target_id(), Some("d"));
//!
//! let outcome = session.drop(&items);
//! let reorder = outcome.reorder.unwrap();
//! let ids: Vec<_> = reorder.items.iter().map(|item| item.id.as_str()).collect();
//! assert_eq!(ids, ["a", "c", "d", "b", "e"]);
//! assert_eq!(
//!     outcome.announcement.as_deref(),
//!     Some("Item moved from position 2 to position 4 of 5"),
//! );
//! ```

use alloc::string::String;

use crate::announcer::{Announcements, LiveAnnouncer};
use crate::item::{SortableItem, position_of};
use crate::reorder::{Reorder, compute_reorder, offset_index};

/// What happened when a lifted item was dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropOutcome<T> {
    /// The new ordering, or `None` if the item did not move.
    pub reorder: Option<Reorder<T>>,
    /// Announcement text for the drop.
    pub announcement: Option<String>,
}

impl<T> DropOutcome<T> {
    fn unchanged(announcement: Option<String>) -> Self {
        Self {
            reorder: None,
            announcement,
        }
    }
}

#[derive(Clone, Debug)]
struct Lift {
    id: String,
    target: Option<String>,
}

/// Tracks one reorder gesture at a time over a host-owned list.
#[derive(Debug, Default)]
pub struct SortableSession {
    announcer: LiveAnnouncer,
    lift: Option<Lift>,
}

impl SortableSession {
    /// Create an idle session announcing with `announcements`.
    #[must_use]
    pub fn new(announcements: Announcements) -> Self {
        Self {
            announcer: LiveAnnouncer::new(announcements),
            lift: None,
        }
    }

    /// Returns `true` while an item is lifted.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.lift.is_some()
    }

    /// Id of the lifted item.
    #[must_use]
    pub fn lifted_id(&self) -> Option<&str> {
        self.lift.as_ref().map(|lift| lift.id.as_str())
    }

    /// Id of the current drop target.
    #[must_use]
    pub fn target_id(&self) -> Option<&str> {
        self.lift.as_ref()?.target.as_deref()
    }

    /// The announcer driving this session.
    #[must_use]
    pub fn announcer(&self) -> &LiveAnnouncer {
        &self.announcer
    }

    /// Lift the item `id`, replacing any session in progress.
    ///
    /// Does nothing and returns `None` if `id` is not in `items`.
    pub fn lift<T: SortableItem>(&mut self, items: &[T], id: &str) -> Option<String> {
        let index = position_of(items, id)?;
        self.lift = Some(Lift {
            id: id.into(),
            target: Some(id.into()),
        });
        self.announcer.drag_start(index, items.len())
    }

    /// The pointer (or focus) is now over `target_id`, or over nothing.
    pub fn over<T: SortableItem>(
        &mut self,
        items: &[T],
        target_id: Option<&str>,
    ) -> Option<String> {
        let lift = self.lift.as_mut()?;
        let index = target_id.and_then(|id| position_of(items, id));
        lift.target = index.map(|i| items[i].id().into());
        self.announcer.drag_over(index)
    }

    /// Move the drop target by `offset` positions, clamped to the list.
    ///
    /// Starts from the current target, or from the lifted item when there is none.
    pub fn move_by<T: SortableItem>(&mut self, items: &[T], offset: isize) -> Option<String> {
        let lift = self.lift.as_ref()?;
        let base = lift
            .target
            .as_deref()
            .and_then(|id| position_of(items, id))
            .or_else(|| position_of(items, &lift.id))?;
        let index = offset_index(base, offset, items.len());
        let target = items[index].id();
        self.over(items, Some(target))
    }

    /// Drop the lifted item on the current target and end the session.
    pub fn drop<T: SortableItem + Clone>(&mut self, items: &[T]) -> DropOutcome<T> {
        let Some(lift) = self.lift.take() else {
            return DropOutcome::unchanged(None);
        };
        let reorder = lift
            .target
            .as_deref()
            .and_then(|target| compute_reorder(items, &lift.id, target));
        let final_index = match &reorder {
            Some(reorder) => Some(reorder.to),
            None => position_of(items, &lift.id),
        };
        let announcement = self.announcer.drag_end(final_index);
        DropOutcome {
            reorder,
            announcement,
        }
    }

    /// Abandon the session without reordering.
    pub fn cancel(&mut self) -> Option<String> {
        self.lift.take()?;
        self.announcer.drag_cancel()
    }
}
