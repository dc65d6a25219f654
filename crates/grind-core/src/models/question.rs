//! Question model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

/// A single practice question tracked within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    /// Human readable title of the question
    pub name: String,

    /// Identifier of the question, unique within its plan
    pub id: String,

    /// Whether the question has been solved
    #[serde(default)]
    pub completed: bool,

    /// When the question was marked complete (UTC)
    #[serde(default, deserialize_with = "super::timestamp::option::deserialize")]
    pub completed_at: Option<Timestamp>,
}

impl Question {
    /// Creates an unsolved question.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` if `id` or `name` is blank.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let name = name.into();

        if id.trim().is_empty() {
            return Err(TrackerError::invalid_input("id").with_reason("Question id cannot be empty"));
        }
        if name.trim().is_empty() {
            return Err(TrackerError::invalid_input("name")
                .with_reason(format!("Question '{id}' has an empty name")));
        }

        Ok(Self {
            name,
            id,
            completed: false,
            completed_at: None,
        })
    }

    /// Marks the question as solved at `now`.
    ///
    /// Returns `false` without touching the timestamp when the question was
    /// already complete.
    pub fn mark_complete(&mut self, now: Timestamp) -> bool {
        if self.completed {
            return false;
        }
        self.completed = true;
        self.completed_at = Some(now);
        true
    }
}
