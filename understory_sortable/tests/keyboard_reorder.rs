// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives a `SortableSession` from `understory_drag_handle` callbacks.
//!
//! The host owns both: it feeds key and pointer events to the handle, maps the
//! resulting callbacks onto the session, and handles arrow keys itself.

use kurbo::Point;
use understory_drag_handle::{Callback, DragHandleController, Key, PointerEvent};
use understory_sortable::{Announcements, Reorder, Sortable, SortableSession};

struct Host {
    items: Vec<Sortable<u32>>,
    handle: DragHandleController<String>,
    session: SortableSession,
    spoken: Vec<String>,
    committed: Vec<Reorder<Sortable<u32>>>,
}

impl Host {
    fn new(n: u32) -> Self {
        Self {
            items: (0..n)
                .map(|i| Sortable::new(format!("row-{i}"), format!("Row {i}"), i))
                .collect(),
            handle: DragHandleController::new(),
            session: SortableSession::new(Announcements::english()),
            spoken: Vec::new(),
            committed: Vec::new(),
        }
    }

    fn key(&mut self, name: &str, row: &str) {
        match Key::from_name(name) {
            Key::Other => {
                let offset = match name {
                    "ArrowUp" => -1,
                    "ArrowDown" => 1,
                    _ => 0,
                };
                let text = self.session.move_by(&self.items, offset);
                self.say(text);
            }
            Key::Escape if self.session.is_active() => {
                let text = self.session.cancel();
                self.say(text);
                let callbacks = self.handle.process_key_down(Key::Escape, None);
                self.run(callbacks.into_vec());
            }
            key => {
                let callbacks = self.handle.process_key_down(key, Some(row.to_owned()));
                self.run(callbacks.into_vec());
            }
        }
    }

    fn pointer_down(&mut self, row: &str, y: f64) {
        let event = PointerEvent::new(Point::new(0.0, y), 0);
        let callbacks = self.handle.process_pointer_down(event, Some(row.to_owned()));
        self.run(callbacks.into_vec());
    }

    fn pointer_move(&mut self, over: &str, y: f64) {
        let event = PointerEvent::new(Point::new(0.0, y), 1);
        for callback in self.handle.process_pointer_move(event) {
            if let Callback::DndActive { .. } = callback {
                let text = self.session.over(&self.items, Some(over));
                self.say(text);
            }
        }
    }

    fn pointer_up(&mut self, y: f64) {
        let event = PointerEvent::new(Point::new(0.0, y), 2);
        let callbacks = self.handle.process_pointer_up(event);
        self.run(callbacks.into_vec());
    }

    fn run(&mut self, callbacks: Vec<Callback<String>>) {
        for callback in callbacks {
            match callback {
                Callback::DndStart { metadata, .. } | Callback::UapActionStart { metadata } => {
                    let row = metadata.expect("rows always pass their id");
                    let text = self.session.lift(&self.items, &row);
                    self.say(text);
                }
                Callback::DndEnd | Callback::UapActionEnd => self.commit(),
                Callback::DndActive { .. } => {}
            }
        }
    }

    fn commit(&mut self) {
        let outcome = self.session.drop(&self.items);
        self.say(outcome.announcement);
        if let Some(reorder) = outcome.reorder {
            self.items.clone_from(&reorder.items);
            self.committed.push(reorder);
        }
    }

    fn say(&mut self, text: Option<String>) {
        self.spoken.extend(text);
    }

    fn order(&self) -> Vec<u32> {
        self.items.iter().map(|item| item.data).collect()
    }
}

#[test]
fn keyboard_lift_move_and_commit() {
    let mut host = Host::new(5);

    host.key("Enter", "row-1");
    host.key("ArrowDown", "row-1");
    host.key("ArrowDown", "row-1");
    host.key("Enter", "row-1");

    assert_eq!(host.order(), [0, 2, 3, 1, 4]);
    assert_eq!(
        host.spoken,
        [
            "Picked up item at position 2 of 5",
            "Moving item from position 2 to position 3 of 5",
            "Moving item from position 2 to position 4 of 5",
            "Item moved from position 2 to position 4 of 5",
        ]
    );
    assert_eq!(host.committed.len(), 1);
    assert!(!host.session.is_active());
}

#[test]
fn escape_discards_keyboard_move() {
    let mut host = Host::new(3);

    host.key("Enter", "row-0");
    host.key("ArrowDown", "row-0");
    host.key("Escape", "row-0");

    assert_eq!(host.order(), [0, 1, 2]);
    assert_eq!(host.spoken.last().map(String::as_str), Some("Reordering canceled"));
    assert!(host.committed.is_empty());
}

#[test]
fn pointer_drag_reorders_rows() {
    let mut host = Host::new(4);

    host.pointer_down("row-3", 30.0);
    host.pointer_move("row-3", 30.0);
    host.pointer_move("row-0", 0.0);
    host.pointer_up(0.0);

    assert_eq!(host.order(), [3, 0, 1, 2]);
    assert_eq!(
        host.spoken,
        [
            "Picked up item at position 4 of 4",
            "Moving item from position 4 to position 1 of 4",
            "Item moved from position 4 to position 1 of 4",
        ]
    );
}

#[test]
fn tap_then_enter_commits_in_place() {
    let mut host = Host::new(3);

    // A tap lifts through the keyboard path: the aborted drag commits nothing,
    // then the keyboard action lifts the row again.
    host.pointer_down("row-2", 20.0);
    host.pointer_up(20.0);
    assert!(host.session.is_active());

    host.key("Enter", "row-2");
    assert_eq!(host.order(), [0, 1, 2]);
    assert!(host.committed.is_empty());
    assert_eq!(
        host.spoken.last().map(String::as_str),
        Some("Item moved back to its original position 3 of 3")
    );
}
