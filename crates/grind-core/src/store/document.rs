//! On-disk shape of a plan file.

use jiff::Timestamp;
use serde::Serialize;

use crate::models::{Plan, Question};

/// Serialized view of a [`Plan`] that also carries the derived unsolved ids.
///
/// Only used for writing. Loading goes straight into [`Plan`], which ignores
/// the `unsolved_questions` key.
#[derive(Debug, Serialize)]
pub(super) struct PlanDocument<'a> {
    name: &'a str,
    started_at: Timestamp,
    questions: &'a [Question],
    unsolved_questions: Vec<&'a str>,
}

impl<'a> From<&'a Plan> for PlanDocument<'a> {
    fn from(plan: &'a Plan) -> Self {
        Self {
            name: &plan.name,
            started_at: plan.started_at,
            questions: &plan.questions,
            unsolved_questions: plan.unsolved_questions(),
        }
    }
}
