// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event-to-action translation for a single drag handle.
//!
//! ## Usage
//!
//! 1) Create one [`DragHandleController`] per handle element.
//! 2) Forward raw pointer, key, focus and blur events to the matching `process_*` method.
//! 3) Run the returned [`Callbacks`] (or use [`DragHandleController::dispatch_to`] with a
//!    [`DragHandleCallbacks`] implementation).
//!
//! Events must be forwarded in delivery order; each call finishes its transition
//! before returning.
//!
//! ## Minimal example
//!
//! ```
//! use understory_drag_handle::{Callback, DragHandleController, InteractionPhase, Key};
//!
//! let mut handle = DragHandleController::<()>::new();
//!
//! let callbacks = handle.process_key_down(Key::Enter, None);
//! assert_eq!(callbacks.as_slice(), &[Callback::UapActionStart { metadata: None }]);
//!
//! // Arrow keys never reach the state machine.
//! assert!(handle.process_key_down(Key::Other, None).is_empty());
//!
//! let callbacks = handle.process_key_down(Key::Escape, None);
//! assert_eq!(callbacks.as_slice(), &[Callback::UapActionEnd]);
//! assert_eq!(handle.phase(), InteractionPhase::UapActionEnd);
//! ```

use crate::callbacks::{Callbacks, DragHandleCallbacks, derive_callbacks};
use crate::error::InteractionError;
use crate::pointer::PointerEvent;
use crate::state::{
    Action, ActionPayload, InteractionPhase, InteractionState, Key, TapPolicy, transition_with,
};

/// Owns the interaction state of one drag handle.
///
/// Handles never share state: each controller is driven by the events of its
/// own element.
#[derive(Clone, Debug)]
pub struct DragHandleController<M> {
    state: InteractionState<M>,
    tap_policy: TapPolicy,
    revision: u64,
}

impl<M> Default for DragHandleController<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> DragHandleController<M> {
    /// Create an idle controller using [`TapPolicy::Activate`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: InteractionState::idle(),
            tap_policy: TapPolicy::Activate,
            revision: 0,
        }
    }

    /// Set how a release without movement is interpreted.
    #[must_use]
    pub fn with_tap_policy(mut self, tap_policy: TapPolicy) -> Self {
        self.tap_policy = tap_policy;
        self
    }

    /// The current interaction state.
    #[must_use]
    pub fn state(&self) -> &InteractionState<M> {
        &self.state
    }

    /// The current interaction phase.
    #[must_use]
    pub fn phase(&self) -> InteractionPhase {
        self.state.phase()
    }

    /// Number of transitions that changed the state so far.
    ///
    /// Ignored input leaves it unchanged, which makes it a cheap "did anything
    /// change?" marker for hosts that re-render on change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl<M: Clone> DragHandleController<M> {
    /// Apply `action` and return the callbacks it fires.
    ///
    /// Ignored actions return no callbacks and leave the state untouched.
    pub fn dispatch(&mut self, action: Action<M>) -> Callbacks<M> {
        #[cfg(feature = "tracing")]
        let name = action.name();

        let Some(next) = transition_with(self.tap_policy, &self.state, action) else {
            return Callbacks::new();
        };
        let callbacks = derive_callbacks(&self.state, &next);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            action = name,
            from = self.state.phase().as_str(),
            to = next.phase().as_str(),
            callbacks = callbacks.len(),
            "drag handle transition"
        );

        self.state = next;
        self.revision = self.revision.wrapping_add(1);
        callbacks
    }

    /// Apply `action` and deliver its callbacks to `handler`, in order.
    pub fn dispatch_to<H>(&mut self, action: Action<M>, handler: &mut H)
    where
        H: DragHandleCallbacks<M> + ?Sized,
    {
        for callback in self.dispatch(action) {
            callback.deliver(handler);
        }
    }

    /// Apply an action given by its canonical name.
    ///
    /// # Errors
    ///
    /// Returns an [`InteractionError`] if the name is unknown or the payload is
    /// incomplete; the state is left untouched.
    pub fn dispatch_named(
        &mut self,
        name: &str,
        payload: ActionPayload<M>,
    ) -> Result<Callbacks<M>, InteractionError> {
        let action = Action::from_name(name, payload)?;
        Ok(self.dispatch(action))
    }

    /// Forward a pointer-down on the handle.
    pub fn process_pointer_down(
        &mut self,
        event: PointerEvent,
        metadata: Option<M>,
    ) -> Callbacks<M> {
        self.dispatch(Action::PointerDown { event, metadata })
    }

    /// Forward a pointer move.
    pub fn process_pointer_move(&mut self, event: PointerEvent) -> Callbacks<M> {
        self.dispatch(Action::PointerMove { event })
    }

    /// Forward a pointer release.
    pub fn process_pointer_up(&mut self, event: PointerEvent) -> Callbacks<M> {
        self.dispatch(Action::PointerUp { event })
    }

    /// Forward a platform pointer cancellation.
    pub fn process_pointer_cancel(&mut self) -> Callbacks<M> {
        self.dispatch(Action::PointerCancel)
    }

    /// Forward a key press; only Enter, Space and Escape reach the state machine.
    pub fn process_key_down(&mut self, key: Key, metadata: Option<M>) -> Callbacks<M> {
        if key == Key::Other {
            #[cfg(feature = "tracing")]
            tracing::debug!(phase = self.phase().as_str(), "ignoring non-interaction key");
            return Callbacks::new();
        }
        self.dispatch(Action::KeyDown { key, metadata })
    }

    /// Forward a focus event.
    pub fn process_focus(&mut self) -> Callbacks<M> {
        self.dispatch(Action::Focus)
    }

    /// Forward a blur event.
    pub fn process_blur(&mut self) -> Callbacks<M> {
        self.dispatch(Action::Blur)
    }
}
