//! Task workflow status and its transition guard.

use super::{InvalidTransitionError, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a task.
///
/// Serialised variant names double as the wire representation, so renaming a
/// variant is a breaking change for stored records and API consumers alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Work has not started.
    Pending,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "InProgress",
            Self::Completed => "Completed",
        }
    }

    /// Reports whether a direct change to `target` is allowed.
    ///
    /// The single workflow guard: `Pending` may not jump straight to
    /// `Completed`. Every other combination, same-status updates included,
    /// is permitted.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        !matches!((self, target), (Self::Pending, Self::Completed))
    }

    /// Validates a direct change to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransitionError`] when the transition is forbidden.
    pub const fn ensure_transition_to(self, target: Self) -> Result<(), InvalidTransitionError> {
        if self.can_transition_to(target) {
            Ok(())
        } else {
            Err(InvalidTransitionError {
                from: self,
                to: target,
            })
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "Pending" => Ok(Self::Pending),
            "InProgress" => Ok(Self::InProgress),
            "Completed" => Ok(Self::Completed),
            other => Err(ValidationError::UnsupportedStatus(other.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
