//! Extraction of plans from raw LeetCode study plan documents.
//!
//! A raw document is the GraphQL response for `studyPlanV2Detail`:
//!
//! ```text
//! { "data": { "studyPlanV2Detail": {
//!     "name": "...",
//!     "planSubGroups": [ { "questions": [ { "title": "...", "id": "..." } ] } ]
//! } } }
//! ```
//!
//! Extraction flattens every sub-group's questions, in encountered order,
//! into a fresh [`Plan`] with nothing completed. It never merges with an
//! existing plan.

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::{ParseResultExt, Result, TrackerError},
    models::{Plan, Question},
};

pub mod source;

pub use source::{RawSource, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};

const RAW_CONTEXT: &str = "raw study plan";

#[derive(Debug, Deserialize)]
struct RawPlan {
    name: String,
    #[serde(rename = "planSubGroups", default)]
    sub_groups: Option<Vec<RawSubGroup>>,
}

#[derive(Debug, Deserialize)]
struct RawSubGroup {
    #[serde(default)]
    questions: Option<Vec<RawQuestion>>,
}

#[derive(Debug, Deserialize)]
struct RawQuestion {
    title: String,
    id: RawId,
}

/// LeetCode sends ids as strings, older dumps sometimes as numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

impl From<RawId> for String {
    fn from(id: RawId) -> Self {
        match id {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

/// Builds a fresh plan from a raw study plan document.
///
/// # Errors
///
/// Returns `TrackerError::Parse` if the document has no `data` object, the
/// plan object lacks a `name`, or a question record lacks `title` or `id`.
///
/// # Examples
///
/// ```rust
/// use grind_core::extract::plan_from_raw;
/// use serde_json::json;
///
/// let raw = json!({
///     "data": { "studyPlanV2Detail": {
///         "name": "LeetCode 75",
///         "planSubGroups": [
///             { "questions": [ { "title": "Two Sum", "id": "1" } ] },
///             { "questions": [] }
///         ]
///     } }
/// });
///
/// let plan = plan_from_raw(&raw)?;
/// assert_eq!(plan.name, "LeetCode 75");
/// assert_eq!(plan.unsolved_questions(), vec!["1"]);
/// # grind_core::Result::<()>::Ok(())
/// ```
pub fn plan_from_raw(raw: &Value) -> Result<Plan> {
    let data = raw
        .get("data")
        .and_then(Value::as_object)
        .ok_or_else(|| TrackerError::parse(RAW_CONTEXT).with_reason("missing top-level `data` object"))?;

    let plan_value = data
        .values()
        .next()
        .filter(|value| value.is_object())
        .ok_or_else(|| TrackerError::parse(RAW_CONTEXT).with_reason("`data` holds no plan object"))?;

    let raw_plan = RawPlan::deserialize(plan_value).parse_context(RAW_CONTEXT)?;

    let questions = raw_plan
        .sub_groups
        .unwrap_or_default()
        .into_iter()
        .flat_map(|group| group.questions.unwrap_or_default())
        .map(|q| {
            Question::new(String::from(q.id), q.title)
                .map_err(|e| TrackerError::parse(RAW_CONTEXT).with_reason(e))
        })
        .collect::<Result<Vec<_>>>()?;

    let plan = Plan::new(raw_plan.name, questions)
        .map_err(|e| TrackerError::parse(RAW_CONTEXT).with_reason(e))?;

    debug!(
        "Extracted {} questions for plan '{}'",
        plan.total_count(),
        plan.name
    );
    Ok(plan)
}
