//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of the init,
//! sample and complete operations with consistent messaging.

use std::{fmt, path::PathBuf};

use super::LocalDateTime;
use crate::models::{CompletionReport, Plan, PlanKind};

/// Wrapper type for displaying the result of initializing a plan.
///
/// # Examples
///
/// ```rust
/// use grind_core::{display::InitResult, models::{Plan, PlanKind, Question}};
///
/// let plan = Plan::new("LeetCode 75", vec![Question::new("1", "Two Sum")?])?;
/// let result = InitResult::new(PlanKind::LeetCode75, "plans/leetcode-75.json".into(), plan);
/// assert!(result.to_string().starts_with("Initialized 1 questions for leetcode-75"));
/// # grind_core::Result::<()>::Ok(())
/// ```
#[derive(Debug)]
pub struct InitResult {
    pub kind: PlanKind,
    pub path: PathBuf,
    pub plan: Plan,
}

impl InitResult {
    /// Create a new InitResult wrapper.
    pub fn new(kind: PlanKind, path: PathBuf, plan: Plan) -> Self {
        Self { kind, path, plan }
    }
}

impl fmt::Display for InitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Initialized {} questions for {} at {}",
            self.plan.total_count(),
            self.kind,
            self.path.display()
        )?;
        writeln!(f)?;
        writeln!(f, "- **Plan**: {}", self.plan.name)?;
        writeln!(f, "- **Started**: {}", LocalDateTime(&self.plan.started_at))
    }
}

/// A sampled question, id plus title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledQuestion {
    pub id: String,
    pub name: String,
}

/// Wrapper type for displaying sampled question ids.
#[derive(Debug)]
pub struct SampleResult {
    pub kind: PlanKind,
    pub questions: Vec<SampledQuestion>,
}

impl SampleResult {
    /// Create a new SampleResult wrapper.
    pub fn new(kind: PlanKind, questions: Vec<SampledQuestion>) -> Self {
        Self { kind, questions }
    }

    /// Ids of the sampled questions, in sampling order.
    pub fn ids(&self) -> Vec<&str> {
        self.questions.iter().map(|q| q.id.as_str()).collect()
    }
}

impl fmt::Display for SampleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.questions.is_empty() {
            return writeln!(f, "No unsolved questions left in {}.", self.kind);
        }

        writeln!(f, "Sampled {} question IDs:", self.questions.len())?;
        writeln!(f)?;
        for question in &self.questions {
            writeln!(f, "- {} ({})", question.id, question.name)?;
        }
        Ok(())
    }
}

/// Wrapper type for displaying the result of marking questions complete.
#[derive(Debug)]
pub struct CompletionResult {
    pub kind: PlanKind,
    pub report: CompletionReport,
}

impl CompletionResult {
    /// Create a new CompletionResult wrapper.
    pub fn new(kind: PlanKind, report: CompletionReport) -> Self {
        Self { kind, report }
    }
}

impl fmt::Display for CompletionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "✅ Marked {} question(s) as complete in {}",
            self.report.marked(),
            self.kind
        )?;

        if !self.report.already_completed.is_empty() {
            writeln!(
                f,
                "- Already complete: {}",
                self.report.already_completed.join(", ")
            )?;
        }
        if !self.report.unknown.is_empty() {
            writeln!(f, "- Not in plan: {}", self.report.unknown.join(", "))?;
        }
        Ok(())
    }
}
