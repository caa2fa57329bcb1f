// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live-region announcement text for drag sessions.
//!
//! The host supplies the formatters in [`Announcements`]; the announcer decides
//! which one to call and with which 1-based positions. An event without a
//! formatter yields `None`.
//!
//! ```
//! use understory_sortable::{Announcements, LiveAnnouncer};
//!
//! let mut announcer = LiveAnnouncer::new(Announcements::english());
//!
//! // Lift the second of five items.
//! assert_eq!(
//!     announcer.drag_start(1, 5).as_deref(),
//!     Some("Picked up item at position 2 of 5"),
//! );
//! // The first "over" on the lifted item itself repeats the start; it is dropped.
//! assert_eq!(announcer.drag_over(Some(1)), None);
//! assert_eq!(
//!     announcer.drag_over(Some(3)).as_deref(),
//!     Some("Moving item from position 2 to position 4 of 5"),
//! );
//! assert_eq!(
//!     announcer.drag_end(Some(3)).as_deref(),
//!     Some("Item moved from position 2 to position 4 of 5"),
//! );
//! ```

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::fmt;

type StartFormatter = Box<dyn Fn(usize, usize) -> String>;
type MoveFormatter = Box<dyn Fn(usize, usize, usize) -> String>;

/// Host-supplied announcement formatters.
///
/// Positions passed to the formatters are 1-based.
#[derive(Default)]
pub struct Announcements {
    started: Option<StartFormatter>,
    reordered: Option<MoveFormatter>,
    committed: Option<MoveFormatter>,
    discarded: Option<String>,
}

impl fmt::Debug for Announcements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Announcements")
            .field("started", &self.started.is_some())
            .field("reordered", &self.reordered.is_some())
            .field("committed", &self.committed.is_some())
            .field("discarded", &self.discarded)
            .finish()
    }
}

impl Announcements {
    /// No formatters: every event yields `None`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain English formatters for all four events.
    #[must_use]
    pub fn english() -> Self {
        Self::new()
            .with_started(|position, total| {
                format!("Picked up item at position {position} of {total}")
            })
            .with_reordered(|initial, current, total| {
                if initial == current {
                    format!("Moving item back to position {initial} of {total}")
                } else {
                    format!("Moving item from position {initial} to position {current} of {total}")
                }
            })
            .with_committed(|initial, last, total| {
                if initial == last {
                    format!("Item moved back to its original position {initial} of {total}")
                } else {
                    format!("Item moved from position {initial} to position {last} of {total}")
                }
            })
            .with_discarded("Reordering canceled")
    }

    /// Formatter for a lift: `(position, total)`.
    #[must_use]
    pub fn with_started(mut self, f: impl Fn(usize, usize) -> String + 'static) -> Self {
        self.started = Some(Box::new(f));
        self
    }

    /// Formatter for a reorder preview: `(initial, current, total)`.
    #[must_use]
    pub fn with_reordered(mut self, f: impl Fn(usize, usize, usize) -> String + 'static) -> Self {
        self.reordered = Some(Box::new(f));
        self
    }

    /// Formatter for a committed drop: `(initial, final, total)`.
    #[must_use]
    pub fn with_committed(mut self, f: impl Fn(usize, usize, usize) -> String + 'static) -> Self {
        self.committed = Some(Box::new(f));
        self
    }

    /// Fixed text for a cancelled drag.
    #[must_use]
    pub fn with_discarded(mut self, text: impl Into<String>) -> Self {
        self.discarded = Some(text.into());
        self
    }
}

/// Per-session positions, 0-based.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AnnouncementContext {
    /// Index of the lifted item when the session started.
    pub initial_index: usize,
    /// Index of the latest drop target.
    pub current_index: usize,
    /// Number of items in the collection.
    pub total: usize,
    first_over_pending: bool,
}

impl AnnouncementContext {
    /// Returns `true` until the first "over" event of the session has been seen.
    #[must_use]
    pub fn first_over_pending(&self) -> bool {
        self.first_over_pending
    }
}

/// Derives announcement text for one drag session at a time.
#[derive(Debug, Default)]
pub struct LiveAnnouncer {
    announcements: Announcements,
    context: Option<AnnouncementContext>,
}

impl LiveAnnouncer {
    /// Create an announcer using `announcements`.
    #[must_use]
    pub fn new(announcements: Announcements) -> Self {
        Self {
            announcements,
            context: None,
        }
    }

    /// The context of the current session, if one is active.
    #[must_use]
    pub fn context(&self) -> Option<&AnnouncementContext> {
        self.context.as_ref()
    }

    /// Returns `true` while a session is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.context.is_some()
    }

    /// Begin a session for the item at `initial_index` in a list of `total`.
    pub fn drag_start(&mut self, initial_index: usize, total: usize) -> Option<String> {
        self.context = Some(AnnouncementContext {
            initial_index,
            current_index: initial_index,
            total,
            first_over_pending: true,
        });
        let started = self.announcements.started.as_ref()?;
        Some(started(initial_index + 1, total))
    }

    /// The drop target changed to `target_index` (`None`: over nothing).
    ///
    /// The first call of a session is suppressed when it targets the lifted item
    /// itself, since it only repeats the start announcement.
    pub fn drag_over(&mut self, target_index: Option<usize>) -> Option<String> {
        let context = self.context.as_mut()?;
        if context.first_over_pending {
            context.first_over_pending = false;
            if target_index == Some(context.initial_index) {
                return None;
            }
        }
        let target = target_index?;
        context.current_index = target;
        let reordered = self.announcements.reordered.as_ref()?;
        Some(reordered(context.initial_index + 1, target + 1, context.total))
    }

    /// The item was dropped at `final_index` (`None`: back where it started).
    ///
    /// Ends the session.
    pub fn drag_end(&mut self, final_index: Option<usize>) -> Option<String> {
        let context = self.context.take()?;
        let last = final_index.unwrap_or(context.initial_index);
        let committed = self.announcements.committed.as_ref()?;
        Some(committed(context.initial_index + 1, last + 1, context.total))
    }

    /// The drag was cancelled. Ends the session.
    pub fn drag_cancel(&mut self) -> Option<String> {
        self.context = None;
        self.announcements.discarded.clone()
    }

    /// Forget the current session without announcing anything.
    ///
    /// Hosts call this when the drag ends through a path the announcer did not see.
    pub fn reset(&mut self) {
        self.context = None;
    }
}
