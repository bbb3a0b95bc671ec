//! Validated textual fields for tasks.

use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum number of characters in a task title.
const TITLE_MIN_CHARS: usize = 3;

/// Maximum number of characters in a task description.
const DESCRIPTION_MAX_CHARS: usize = 500;

/// Non-empty task title of at least three characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TitleTooShort`] when the value has fewer
    /// than three characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let text = value.into();
        if text.chars().count() < TITLE_MIN_CHARS {
            return Err(ValidationError::TitleTooShort);
        }
        Ok(Self(text))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Optional free-form task description of at most 500 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Creates a validated description.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DescriptionTooLong`] when the value exceeds
    /// 500 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let text = value.into();
        if text.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(ValidationError::DescriptionTooLong);
        }
        Ok(Self(text))
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
