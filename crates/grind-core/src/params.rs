//! Parameter structures for tracker operations.
//!
//! These structures are free of CLI framework derives so that any interface
//! can build them. The CLI layer defines its own clap argument structs and
//! converts them into these types; validation that must happen before any
//! file is touched lives here, next to the data it checks.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrackerError},
    models::PlanKind,
    visualizer::MAX_HISTORY_DAYS,
};

/// Parameters for initializing a plan from its raw document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitPlan {
    /// Plan to initialize
    pub kind: PlanKind,
    /// Fetch the raw document from the GraphQL endpoint instead of the data
    /// directory
    #[serde(default)]
    pub fetch: bool,
}

/// Parameters for sampling unsolved questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplePlan {
    /// Plan to sample from
    pub kind: PlanKind,
    /// Number of questions requested; must be positive
    pub count: i64,
}

impl SamplePlan {
    /// Validate the requested count and return it as a `usize`.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidInput` - When `count` is zero or negative
    ///
    /// # Examples
    ///
    /// ```rust
    /// use grind_core::{params::SamplePlan, PlanKind};
    ///
    /// let params = SamplePlan { kind: PlanKind::LeetCode75, count: 3 };
    /// assert_eq!(params.validate()?, 3);
    ///
    /// let params = SamplePlan { kind: PlanKind::LeetCode75, count: 0 };
    /// assert!(params.validate().is_err());
    /// # grind_core::Result::<()>::Ok(())
    /// ```
    pub fn validate(&self) -> Result<usize> {
        if self.count <= 0 {
            return Err(TrackerError::invalid_input("n").with_reason(format!(
                "must be greater than 0, got {}",
                self.count
            )));
        }
        usize::try_from(self.count).map_err(|_| {
            TrackerError::invalid_input("n").with_reason(format!("{} is too large", self.count))
        })
    }
}

/// Parameters for marking questions complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletePlan {
    /// Plan to update
    pub kind: PlanKind,
    /// Question ids to mark complete
    pub ids: Vec<String>,
}

impl CompletePlan {
    /// Validate that at least one non-blank id was given.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidInput` - When `ids` is empty or only blanks
    pub fn validate(&self) -> Result<()> {
        if self.ids.iter().all(|id| id.trim().is_empty()) {
            return Err(TrackerError::invalid_input("ids")
                .with_reason("At least one question ID is required"));
        }
        Ok(())
    }
}

/// Parameters for the statistics report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanStats {
    /// Plan to report on
    pub kind: PlanKind,
    /// Requested history length in days
    #[serde(default = "default_history_days")]
    pub days: usize,
}

fn default_history_days() -> usize {
    MAX_HISTORY_DAYS
}
