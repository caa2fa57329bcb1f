// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Invariant violations raised at the named-action boundary.

use alloc::string::String;
use core::fmt;

/// Error returned when a named action cannot be turned into an [`Action`](crate::Action).
///
/// These indicate an integration bug in the host, not a runtime condition: they
/// are reported immediately and never recovered from inside the state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InteractionError {
    /// The action name is not one the state machine understands.
    UnknownAction {
        /// The name that was supplied.
        name: String,
    },
    /// The action is known but a payload field it requires is absent.
    MissingPayload {
        /// The canonical action name.
        action: &'static str,
        /// The missing payload field.
        field: &'static str,
    },
}

impl fmt::Display for InteractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAction { name } => write!(f, "unknown interaction action {name:?}"),
            Self::MissingPayload { action, field } => {
                write!(f, "action {action} is missing its {field} payload")
            }
        }
    }
}

impl core::error::Error for InteractionError {}
