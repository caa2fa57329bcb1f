// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer samples carried by drag states.

use kurbo::{Point, Vec2};

/// A single pointer event as delivered by the host.
///
/// The state machine stores the event that produced the current `dnd-start` or
/// `dnd-active` phase and hands it to the host through
/// [`Callback::DndStart`](crate::Callback::DndStart) and
/// [`Callback::DndActive`](crate::Callback::DndActive).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Host-assigned pointer identifier.
    pub pointer_id: u64,
    /// Client coordinates of the pointer.
    pub position: Point,
    /// Occurrence time in milliseconds, monotonically increasing per host.
    pub timestamp: u64,
}

impl PointerEvent {
    /// Create a pointer event for the primary pointer.
    #[must_use]
    pub const fn new(position: Point, timestamp: u64) -> Self {
        Self {
            pointer_id: 0,
            position,
            timestamp,
        }
    }

    /// Set the pointer identifier.
    #[must_use]
    pub const fn with_pointer_id(mut self, pointer_id: u64) -> Self {
        self.pointer_id = pointer_id;
        self
    }

    /// Returns `true` if this event reports a different pointer or position than `previous`.
    ///
    /// Timestamps are ignored: a move that lands on the same coordinates is not a change.
    #[must_use]
    pub fn moved_from(&self, previous: &Self) -> bool {
        self.pointer_id != previous.pointer_id || self.position != previous.position
    }

    /// Offset of this event from `origin`.
    #[must_use]
    pub fn offset_from(&self, origin: &Self) -> Vec2 {
        self.position - origin.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_position_later_is_not_a_move() {
        let a = PointerEvent::new(Point::new(10.0, 20.0), 1);
        let b = PointerEvent::new(Point::new(10.0, 20.0), 9);
        assert!(!b.moved_from(&a));
    }

    #[test]
    fn position_or_pointer_change_is_a_move() {
        let a = PointerEvent::new(Point::new(10.0, 20.0), 1);
        let moved = PointerEvent::new(Point::new(11.0, 20.0), 2);
        let other_pointer = a.with_pointer_id(3);
        assert!(moved.moved_from(&a));
        assert!(other_pointer.moved_from(&a));
    }

    #[test]
    fn offset_is_relative_to_origin() {
        let a = PointerEvent::new(Point::new(100.0, 100.0), 0);
        let b = PointerEvent::new(Point::new(90.0, 85.0), 5);
        assert_eq!(b.offset_from(&a), Vec2::new(-10.0, -15.0));
    }
}
