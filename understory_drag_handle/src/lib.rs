// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Drag Handle: interaction state for drag handles.
//!
//! A drag handle can be operated two ways: by dragging it with a pointer, or by
//! activating it from the keyboard (the _universal access pattern_, UAP) and then
//! issuing explicit commands. This crate tracks which of those is happening and
//! tells the host which side effects to run. It renders nothing.
//!
//! The pieces, from the bottom up:
//!
//! - [`transition`]: a pure function from ([`InteractionState`], [`Action`]) to the next
//!   state, returning `None` when nothing changes.
//! - [`derive_callbacks`]: the [`Callback`]s a transition fires, in order.
//! - [`DragHandleController`]: owns the state of one handle, filters raw input,
//!   and returns the callbacks of each event exactly once.
//!
//! ## Pointer drag
//!
//! ```rust
//! use kurbo::Point;
//! use understory_drag_handle::{Callback, DragHandleController, InteractionPhase, PointerEvent};
//!
//! let mut handle = DragHandleController::new();
//! let at = |x: f64, t: u64| PointerEvent::new(Point::new(x, 0.0), t);
//!
//! let fired = handle.process_pointer_down(at(0.0, 0), Some("row-3"));
//! assert!(matches!(fired[0], Callback::DndStart { metadata: Some("row-3"), .. }));
//!
//! let fired = handle.process_pointer_move(at(8.0, 16));
//! assert_eq!(fired.as_slice(), &[Callback::DndActive { event: at(8.0, 16) }]);
//!
//! // Same coordinates again: nothing to report.
//! assert!(handle.process_pointer_move(at(8.0, 32)).is_empty());
//!
//! let fired = handle.process_pointer_up(at(8.0, 48));
//! assert_eq!(fired.as_slice(), &[Callback::DndEnd]);
//! assert_eq!(handle.phase(), InteractionPhase::DndEnd);
//! ```
//!
//! ## Tap to activate
//!
//! A release before any movement is not a drag. It ends the nascent drag and
//! starts the keyboard action, so clicking a handle opens the same controls the
//! keyboard would. Hosts that do not want that can opt out with
//! [`TapPolicy::EndDrag`].
//!
//! ## Features
//!
//! - `std` / `libm`: forwarded to `kurbo`.
//! - `tracing`: emit `tracing` events for applied transitions and filtered keys.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod callbacks;
mod controller;
mod error;
mod pointer;
mod state;

pub use callbacks::{Callback, Callbacks, DragHandleCallbacks, derive_callbacks};
pub use controller::DragHandleController;
pub use error::InteractionError;
pub use pointer::PointerEvent;
pub use state::{
    Action, ActionPayload, InteractionPhase, InteractionState, Key, TapPolicy, transition,
    transition_with,
};
