//! Data models for study plans and their questions.
//!
//! This module contains the domain models of the tracker. A [`Plan`] is the
//! unit of persistence: it is created once from a raw study plan document,
//! then loaded, mutated and fully rewritten by every mutating command.
//!
//! Derived values such as [`Plan::unsolved_questions`] are plain methods and
//! never stored on the struct, so they cannot go stale after a mutation.
//!
//! # Examples
//!
//! ```rust
//! use grind_core::models::{Plan, Question};
//! use jiff::Timestamp;
//!
//! let mut plan = Plan::new(
//!     "Top Interview 150",
//!     vec![
//!         Question::new("88", "Merge Sorted Array")?,
//!         Question::new("27", "Remove Element")?,
//!     ],
//! )?;
//!
//! let report = plan.mark_complete(&["27"], Timestamp::now());
//! assert_eq!(report.marked(), 1);
//! assert_eq!(plan.unsolved_questions(), vec!["88"]);
//! # grind_core::Result::<()>::Ok(())
//! ```

pub mod kind;
pub mod plan;
pub mod question;
mod timestamp;

#[cfg(test)]
mod tests;

pub use kind::PlanKind;
pub use plan::{CompletionReport, Plan};
pub use question::Question;
