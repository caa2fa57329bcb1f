// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag handle interaction state machine.
//!
//! [`transition`] is a pure function from the current [`InteractionState`] and
//! an [`Action`] to the next state. It returns `None` when the action does not
//! change anything, so callers can skip downstream work (callback derivation,
//! re-rendering) without comparing states.
//!
//! ## Phases
//!
//! | From | Action | To |
//! |---|---|---|
//! | idle, `dnd-end`, `uap-action-end` | pointer down | `dnd-start` |
//! | `dnd-start` | pointer move | `dnd-active` |
//! | `dnd-active` | pointer move (moved) | `dnd-active` |
//! | `dnd-start` | pointer up | `uap-action-start` (see [`TapPolicy`]) |
//! | `dnd-active` | pointer up | `dnd-end` |
//! | `dnd-start`, `dnd-active` | pointer cancel | `dnd-end` |
//! | idle, `dnd-end`, `uap-action-end` | Enter / Space | `uap-action-start` |
//! | `dnd-start`, `dnd-active` | Enter / Space | `uap-action-start` |
//! | `uap-action-start` | Enter / Space / Escape | `uap-action-end` |
//! | `uap-action-start` | blur | `uap-action-end` |
//!
//! Every other combination, including focus, is ignored.
//!
//! ```
//! use kurbo::Point;
//! use understory_drag_handle::{
//!     Action, InteractionPhase, InteractionState, PointerEvent, transition,
//! };
//!
//! let idle = InteractionState::<&str>::idle();
//! let down = PointerEvent::new(Point::new(4.0, 4.0), 0);
//! let started = transition(&idle, Action::PointerDown { event: down, metadata: Some("resize") })
//!     .unwrap();
//! assert_eq!(started.phase(), InteractionPhase::DndStart);
//! assert_eq!(started.event(), Some(&down));
//!
//! // A release before any movement is a tap: it activates the keyboard path.
//! let tapped = transition(&started, Action::PointerUp { event: down }).unwrap();
//! assert_eq!(tapped.phase(), InteractionPhase::UapActionStart);
//! assert_eq!(tapped.metadata(), Some(&"resize"));
//! assert_eq!(tapped.event(), None);
//!
//! // Focus never changes anything.
//! assert!(transition(&tapped, Action::Focus).is_none());
//! ```

use crate::error::InteractionError;
use crate::pointer::PointerEvent;

/// The phase of a drag handle interaction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractionPhase {
    /// No interaction in progress.
    #[default]
    Idle,
    /// Pointer pressed on the handle, not moved yet.
    DndStart,
    /// Pointer drag in progress.
    DndActive,
    /// Pointer drag finished or cancelled.
    DndEnd,
    /// Keyboard (universal access) action in progress.
    UapActionStart,
    /// Keyboard action finished.
    UapActionEnd,
}

impl InteractionPhase {
    /// Returns `true` for `dnd-start` and `dnd-active`, the phases that carry a pointer event.
    #[must_use]
    pub const fn is_dragging(self) -> bool {
        matches!(self, Self::DndStart | Self::DndActive)
    }

    /// Returns `true` for phases from which a new interaction may begin.
    #[must_use]
    pub const fn is_resting(self) -> bool {
        matches!(self, Self::Idle | Self::DndEnd | Self::UapActionEnd)
    }

    /// Returns the stable string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::DndStart => "dnd-start",
            Self::DndActive => "dnd-active",
            Self::DndEnd => "dnd-end",
            Self::UapActionStart => "uap-action-start",
            Self::UapActionEnd => "uap-action-end",
        }
    }
}

/// Current interaction state of a single drag handle.
///
/// `M` is opaque caller metadata (for example, which edge a resize handle
/// controls). It is supplied with the triggering action and handed back through
/// the start callbacks.
///
/// The pointer event is present if and only if the phase is `dnd-start` or
/// `dnd-active`; the constructors keep that invariant, so the fields are private.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionState<M> {
    phase: InteractionPhase,
    event: Option<PointerEvent>,
    metadata: Option<M>,
}

impl<M> Default for InteractionState<M> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<M> InteractionState<M> {
    /// The idle state.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            phase: InteractionPhase::Idle,
            event: None,
            metadata: None,
        }
    }

    fn dragging(phase: InteractionPhase, event: PointerEvent, metadata: Option<M>) -> Self {
        debug_assert!(phase.is_dragging(), "{phase:?} does not carry a pointer event");
        Self {
            phase,
            event: Some(event),
            metadata,
        }
    }

    fn settled(phase: InteractionPhase, metadata: Option<M>) -> Self {
        debug_assert!(!phase.is_dragging(), "{phase:?} requires a pointer event");
        Self {
            phase,
            event: None,
            metadata,
        }
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> InteractionPhase {
        self.phase
    }

    /// The pointer event that produced the current drag phase, if any.
    #[must_use]
    pub fn event(&self) -> Option<&PointerEvent> {
        self.event.as_ref()
    }

    /// Caller metadata attached to the current interaction.
    #[must_use]
    pub fn metadata(&self) -> Option<&M> {
        self.metadata.as_ref()
    }

    /// Returns `true` if no interaction has happened yet.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == InteractionPhase::Idle
    }
}

/// Keys the state machine distinguishes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The Enter key.
    Enter,
    /// The space bar.
    Space,
    /// The Escape key.
    Escape,
    /// Any other key; never reaches the state machine through the controller.
    Other,
}

impl Key {
    /// Map a DOM-style key name onto a [`Key`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => Self::Enter,
            " " | "Space" | "Spacebar" => Self::Space,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }

    /// Returns `true` for keys that start a keyboard action (Enter and Space).
    #[must_use]
    pub const fn is_activation(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

/// How a release without movement (a tap) is interpreted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TapPolicy {
    /// A tap ends the nascent drag and starts the keyboard action path.
    #[default]
    Activate,
    /// A tap only ends the nascent drag.
    EndDrag,
}

/// An input to the state machine.
#[derive(Clone, Debug, PartialEq)]
pub enum Action<M> {
    /// Pointer pressed on the handle.
    PointerDown {
        /// The originating event.
        event: PointerEvent,
        /// Caller metadata for the drag that may follow.
        metadata: Option<M>,
    },
    /// Pointer moved.
    PointerMove {
        /// The originating event.
        event: PointerEvent,
    },
    /// Pointer released.
    PointerUp {
        /// The originating event.
        event: PointerEvent,
    },
    /// Pointer interaction aborted by the platform.
    PointerCancel,
    /// Key pressed while the handle has focus.
    KeyDown {
        /// The pressed key.
        key: Key,
        /// Caller metadata for the keyboard action that may start.
        metadata: Option<M>,
    },
    /// Handle gained focus.
    Focus,
    /// Handle lost focus.
    Blur,
}

/// Loose payload for [`Action::from_name`].
#[derive(Clone, Debug, PartialEq)]
pub struct ActionPayload<M> {
    /// Pointer event, required by pointer down, move and up.
    pub event: Option<PointerEvent>,
    /// Key, required by key down.
    pub key: Option<Key>,
    /// Caller metadata, used by pointer down and key down.
    pub metadata: Option<M>,
}

impl<M> Default for ActionPayload<M> {
    fn default() -> Self {
        Self {
            event: None,
            key: None,
            metadata: None,
        }
    }
}

impl<M> Action<M> {
    /// Every action name accepted by [`Action::from_name`].
    pub const NAMES: [&'static str; 7] = [
        "POINTER_DOWN",
        "POINTER_MOVE",
        "POINTER_UP",
        "POINTER_CANCEL",
        "KEY_DOWN",
        "FOCUS",
        "BLUR",
    ];

    /// The canonical name of this action.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PointerDown { .. } => "POINTER_DOWN",
            Self::PointerMove { .. } => "POINTER_MOVE",
            Self::PointerUp { .. } => "POINTER_UP",
            Self::PointerCancel => "POINTER_CANCEL",
            Self::KeyDown { .. } => "KEY_DOWN",
            Self::Focus => "FOCUS",
            Self::Blur => "BLUR",
        }
    }

    /// Build an action from its canonical name and a loose payload.
    ///
    /// Fields the action does not use are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`InteractionError::UnknownAction`] for names outside [`Action::NAMES`]
    /// and [`InteractionError::MissingPayload`] when a required field is absent.
    pub fn from_name(name: &str, payload: ActionPayload<M>) -> Result<Self, InteractionError> {
        let ActionPayload {
            event,
            key,
            metadata,
        } = payload;
        let require_event = |action: &'static str| {
            event.ok_or(InteractionError::MissingPayload {
                action,
                field: "event",
            })
        };
        Ok(match name {
            "POINTER_DOWN" => Self::PointerDown {
                event: require_event("POINTER_DOWN")?,
                metadata,
            },
            "POINTER_MOVE" => Self::PointerMove {
                event: require_event("POINTER_MOVE")?,
            },
            "POINTER_UP" => Self::PointerUp {
                event: require_event("POINTER_UP")?,
            },
            "POINTER_CANCEL" => Self::PointerCancel,
            "KEY_DOWN" => Self::KeyDown {
                key: key.ok_or(InteractionError::MissingPayload {
                    action: "KEY_DOWN",
                    field: "key",
                })?,
                metadata,
            },
            "FOCUS" => Self::Focus,
            "BLUR" => Self::Blur,
            _ => {
                return Err(InteractionError::UnknownAction { name: name.into() });
            }
        })
    }
}

/// Compute the next state with the default [`TapPolicy`].
///
/// Returns `None` when `action` leaves `state` unchanged.
#[must_use]
pub fn transition<M: Clone>(
    state: &InteractionState<M>,
    action: Action<M>,
) -> Option<InteractionState<M>> {
    transition_with(TapPolicy::default(), state, action)
}

/// Compute the next state, interpreting taps according to `policy`.
///
/// Returns `None` when `action` leaves `state` unchanged. Pointer moves and
/// releases outside a drag, keys other than Enter/Space/Escape, Escape outside a
/// keyboard action, and focus are all ignored.
#[must_use]
pub fn transition_with<M: Clone>(
    policy: TapPolicy,
    state: &InteractionState<M>,
    action: Action<M>,
) -> Option<InteractionState<M>> {
    use InteractionPhase as P;

    let kept = || state.metadata.clone();
    match (state.phase, action) {
        (phase, Action::PointerDown { event, metadata }) if phase.is_resting() => {
            Some(InteractionState::dragging(P::DndStart, event, metadata))
        }
        (P::DndStart, Action::PointerMove { event }) => {
            Some(InteractionState::dragging(P::DndActive, event, kept()))
        }
        (P::DndActive, Action::PointerMove { event }) => {
            let moved = state.event.as_ref().is_none_or(|last| event.moved_from(last));
            moved.then(|| InteractionState::dragging(P::DndActive, event, kept()))
        }
        (P::DndStart, Action::PointerUp { .. }) => {
            let next = match policy {
                TapPolicy::Activate => P::UapActionStart,
                TapPolicy::EndDrag => P::DndEnd,
            };
            Some(InteractionState::settled(next, kept()))
        }
        (P::DndActive, Action::PointerUp { .. })
        | (P::DndStart | P::DndActive, Action::PointerCancel) => {
            Some(InteractionState::settled(P::DndEnd, kept()))
        }
        (phase, Action::KeyDown { key, metadata }) if key.is_activation() => {
            if phase.is_resting() {
                Some(InteractionState::settled(P::UapActionStart, metadata))
            } else if phase.is_dragging() {
                Some(InteractionState::settled(
                    P::UapActionStart,
                    metadata.or_else(kept),
                ))
            } else {
                // Enter and Space close a running keyboard action.
                Some(InteractionState::settled(P::UapActionEnd, kept()))
            }
        }
        (P::UapActionStart, Action::KeyDown { key: Key::Escape, .. }) => {
            Some(InteractionState::settled(P::UapActionEnd, kept()))
        }
        (P::UapActionStart, Action::Blur) => {
            Some(InteractionState::settled(P::UapActionEnd, kept()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    type State = InteractionState<u32>;

    fn ev(x: f64, y: f64) -> PointerEvent {
        PointerEvent::new(Point::new(x, y), 0)
    }

    fn down(event: PointerEvent, metadata: u32) -> Action<u32> {
        Action::PointerDown {
            event,
            metadata: Some(metadata),
        }
    }

    fn key(key: Key) -> Action<u32> {
        Action::KeyDown {
            key,
            metadata: None,
        }
    }

    fn dnd_start() -> State {
        transition(&State::idle(), down(ev(0.0, 0.0), 7)).unwrap()
    }

    fn dnd_active() -> State {
        transition(&dnd_start(), Action::PointerMove { event: ev(5.0, 0.0) }).unwrap()
    }

    fn uap_start() -> State {
        transition(&State::idle(), key(Key::Enter)).unwrap()
    }

    fn all_states() -> [State; 6] {
        let dnd_end = transition(&dnd_active(), Action::PointerUp { event: ev(5.0, 0.0) }).unwrap();
        let uap_end = transition(&uap_start(), key(Key::Escape)).unwrap();
        [State::idle(), dnd_start(), dnd_active(), dnd_end, uap_start(), uap_end]
    }

    #[test]
    fn pointer_down_from_idle_captures_event_and_metadata() {
        let e = ev(1.0, 2.0);
        let next = transition(&State::idle(), down(e, 3)).unwrap();
        assert_eq!(next.phase(), InteractionPhase::DndStart);
        assert_eq!(next.event(), Some(&e));
        assert_eq!(next.metadata(), Some(&3));
    }

    #[test]
    fn pointer_down_restarts_from_end_phases() {
        for state in all_states() {
            let next = transition(&state, down(ev(9.0, 9.0), 1));
            if state.phase().is_resting() {
                assert_eq!(next.map(|s| s.phase()), Some(InteractionPhase::DndStart));
            } else {
                assert!(next.is_none(), "pointer down must be ignored in {:?}", state.phase());
            }
        }
    }

    #[test]
    fn first_move_always_activates() {
        let start = dnd_start();
        let same_spot = transition(&start, Action::PointerMove { event: ev(0.0, 0.0) }).unwrap();
        assert_eq!(same_spot.phase(), InteractionPhase::DndActive);
        assert_eq!(same_spot.metadata(), Some(&7));
    }

    #[test]
    fn active_move_updates_only_when_moved() {
        let active = dnd_active();
        assert!(transition(&active, Action::PointerMove { event: ev(5.0, 0.0) }).is_none());

        let e2 = ev(6.0, 1.0);
        let next = transition(&active, Action::PointerMove { event: e2 }).unwrap();
        assert_eq!(next.phase(), InteractionPhase::DndActive);
        assert_eq!(next.event(), Some(&e2));
    }

    #[test]
    fn tap_becomes_keyboard_action_with_metadata() {
        let next = transition(&dnd_start(), Action::PointerUp { event: ev(0.0, 0.0) }).unwrap();
        assert_eq!(next.phase(), InteractionPhase::UapActionStart);
        assert_eq!(next.metadata(), Some(&7));
        assert_eq!(next.event(), None);
    }

    #[test]
    fn tap_policy_end_drag_ends_instead() {
        let next = transition_with(
            TapPolicy::EndDrag,
            &dnd_start(),
            Action::PointerUp { event: ev(0.0, 0.0) },
        )
        .unwrap();
        assert_eq!(next.phase(), InteractionPhase::DndEnd);
    }

    #[test]
    fn release_and_cancel_end_drags() {
        let up = transition(&dnd_active(), Action::PointerUp { event: ev(5.0, 0.0) }).unwrap();
        assert_eq!(up.phase(), InteractionPhase::DndEnd);
        assert_eq!(up.event(), None);

        for state in [dnd_start(), dnd_active()] {
            let next = transition(&state, Action::PointerCancel).unwrap();
            assert_eq!(next.phase(), InteractionPhase::DndEnd);
        }
    }

    #[test]
    fn stray_pointer_input_is_ignored_outside_drags() {
        for state in all_states() {
            if state.phase().is_dragging() {
                continue;
            }
            assert!(transition(&state, Action::PointerMove { event: ev(1.0, 1.0) }).is_none());
            assert!(transition(&state, Action::PointerUp { event: ev(1.0, 1.0) }).is_none());
            assert!(transition(&state, Action::PointerCancel).is_none());
        }
    }

    #[test]
    fn activation_keys_start_keyboard_action() {
        for k in [Key::Enter, Key::Space] {
            for state in all_states() {
                let next = transition(&state, key(k)).unwrap();
                let expected = if state.phase() == InteractionPhase::UapActionStart {
                    InteractionPhase::UapActionEnd
                } else {
                    InteractionPhase::UapActionStart
                };
                assert_eq!(next.phase(), expected);
                assert_eq!(next.event(), None);
            }
        }
    }

    #[test]
    fn keyboard_interrupt_keeps_drag_metadata_unless_replaced() {
        let kept = transition(&dnd_active(), key(Key::Space)).unwrap();
        assert_eq!(kept.metadata(), Some(&7));

        let replaced = transition(
            &dnd_active(),
            Action::KeyDown {
                key: Key::Enter,
                metadata: Some(42),
            },
        )
        .unwrap();
        assert_eq!(replaced.metadata(), Some(&42));
    }

    #[test]
    fn escape_only_ends_keyboard_action() {
        for state in all_states() {
            let next = transition(&state, key(Key::Escape));
            if state.phase() == InteractionPhase::UapActionStart {
                assert_eq!(next.map(|s| s.phase()), Some(InteractionPhase::UapActionEnd));
            } else {
                assert!(next.is_none());
            }
        }
    }

    #[test]
    fn blur_cancels_keyboard_action_only() {
        for state in all_states() {
            let next = transition(&state, Action::Blur);
            if state.phase() == InteractionPhase::UapActionStart {
                assert_eq!(next.map(|s| s.phase()), Some(InteractionPhase::UapActionEnd));
            } else {
                assert!(next.is_none());
            }
        }
    }

    #[test]
    fn focus_and_other_keys_are_identity() {
        for state in all_states() {
            assert!(transition(&state, Action::Focus).is_none());
            assert!(transition(&state, key(Key::Other)).is_none());
        }
    }

    #[test]
    fn event_present_only_while_dragging() {
        for state in all_states() {
            assert_eq!(state.event().is_some(), state.phase().is_dragging());
        }
    }

    #[test]
    fn named_actions_round_trip_names() {
        let payload = ActionPayload {
            event: Some(ev(0.0, 0.0)),
            key: Some(Key::Enter),
            metadata: Some(1_u32),
        };
        for name in Action::<u32>::NAMES {
            let action = Action::from_name(name, payload.clone()).unwrap();
            assert_eq!(action.name(), name);
        }
    }

    #[test]
    fn unknown_and_incomplete_named_actions_fail() {
        let err = Action::<u32>::from_name("POINTER_HOVER", ActionPayload::default()).unwrap_err();
        assert_eq!(
            err,
            InteractionError::UnknownAction {
                name: "POINTER_HOVER".into()
            }
        );

        let err = Action::<u32>::from_name("KEY_DOWN", ActionPayload::default()).unwrap_err();
        assert_eq!(
            err,
            InteractionError::MissingPayload {
                action: "KEY_DOWN",
                field: "key"
            }
        );
    }

    #[test]
    fn key_names() {
        assert_eq!(Key::from_name("Enter"), Key::Enter);
        assert_eq!(Key::from_name(" "), Key::Space);
        assert_eq!(Key::from_name("Spacebar"), Key::Space);
        assert_eq!(Key::from_name("Esc"), Key::Escape);
        assert_eq!(Key::from_name("ArrowUp"), Key::Other);
    }
}
