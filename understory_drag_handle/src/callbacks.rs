// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Side effects fired by a state transition.
//!
//! [`derive_callbacks`] compares the state before and after a transition and
//! lists the callbacks the host should run, in order. The list is returned by
//! value; once drained it is gone, so re-processing cannot fire it twice.

use smallvec::SmallVec;

use crate::pointer::PointerEvent;
use crate::state::{InteractionPhase, InteractionState};

/// A single host callback produced by a transition.
#[derive(Clone, Debug, PartialEq)]
pub enum Callback<M> {
    /// A pointer drag may begin.
    DndStart {
        /// The pointer-down event.
        event: PointerEvent,
        /// Metadata supplied with the pointer down.
        metadata: Option<M>,
    },
    /// The pointer moved during a drag.
    DndActive {
        /// The latest pointer event.
        event: PointerEvent,
    },
    /// The pointer drag ended, completed or not.
    DndEnd,
    /// A keyboard (universal access) action started.
    UapActionStart {
        /// Metadata of the interaction that started the action.
        metadata: Option<M>,
    },
    /// The keyboard action ended.
    UapActionEnd,
}

/// Callbacks produced by one transition. A single action fires at most two.
pub type Callbacks<M> = SmallVec<[Callback<M>; 2]>;

/// Host-side receiver for drag handle callbacks.
///
/// Every method defaults to doing nothing, so hosts implement only what they need.
pub trait DragHandleCallbacks<M> {
    /// See [`Callback::DndStart`].
    fn on_dnd_start(&mut self, _event: &PointerEvent, _metadata: Option<&M>) {}
    /// See [`Callback::DndActive`].
    fn on_dnd_active(&mut self, _event: &PointerEvent) {}
    /// See [`Callback::DndEnd`].
    fn on_dnd_end(&mut self) {}
    /// See [`Callback::UapActionStart`].
    fn on_uap_action_start(&mut self, _metadata: Option<&M>) {}
    /// See [`Callback::UapActionEnd`].
    fn on_uap_action_end(&mut self) {}
}

impl<M> Callback<M> {
    /// Invoke the matching method on `handler`.
    pub fn deliver<H: DragHandleCallbacks<M> + ?Sized>(&self, handler: &mut H) {
        match self {
            Self::DndStart { event, metadata } => handler.on_dnd_start(event, metadata.as_ref()),
            Self::DndActive { event } => handler.on_dnd_active(event),
            Self::DndEnd => handler.on_dnd_end(),
            Self::UapActionStart { metadata } => handler.on_uap_action_start(metadata.as_ref()),
            Self::UapActionEnd => handler.on_uap_action_end(),
        }
    }
}

/// Compute the callbacks fired by moving from `prev` to `next`.
///
/// Ordering: a drag ending always comes before anything that starts, so a tap
/// yields `[DndEnd, UapActionStart]`.
///
/// A `dnd-active` to `dnd-active` step fires [`Callback::DndActive`] whenever
/// the pointer moved, even though the phase stays the same. Passing the same
/// state twice fires nothing.
#[must_use]
pub fn derive_callbacks<M: Clone>(
    prev: &InteractionState<M>,
    next: &InteractionState<M>,
) -> Callbacks<M> {
    use InteractionPhase as P;

    let (from, to) = (prev.phase(), next.phase());
    let mut out = Callbacks::new();

    if from.is_dragging() && !to.is_dragging() {
        out.push(Callback::DndEnd);
    }

    match (from, to, next.event()) {
        (P::DndStart, P::DndStart, _) => {}
        (_, P::DndStart, Some(event)) => out.push(Callback::DndStart {
            event: *event,
            metadata: next.metadata().cloned(),
        }),
        (P::DndStart, P::DndActive, Some(event)) => {
            out.push(Callback::DndActive { event: *event });
        }
        (P::DndActive, P::DndActive, Some(event)) => {
            if prev.event().is_none_or(|last| event.moved_from(last)) {
                out.push(Callback::DndActive { event: *event });
            }
        }
        (P::UapActionStart, P::UapActionStart, _) => {}
        (_, P::UapActionStart, _) => out.push(Callback::UapActionStart {
            metadata: next.metadata().cloned(),
        }),
        (P::UapActionStart, P::UapActionEnd, _) => out.push(Callback::UapActionEnd),
        _ => {}
    }

    out
}
