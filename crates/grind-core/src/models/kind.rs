//! The closed set of study plans the tracker knows about.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of supported study plans.
///
/// Each kind maps to the slug LeetCode uses for the plan. The slug names the
/// progress file, the raw document file and the GraphQL `planSlug` variable,
/// so adding a plan only means adding a variant here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PlanKind {
    /// Top Interview 150
    #[serde(rename = "top-interview-150")]
    TopInterview150,

    /// LeetCode 75
    #[serde(rename = "leetcode-75")]
    LeetCode75,

    /// 30 Days of JavaScript
    #[serde(rename = "30-days-of-javascript")]
    ThirtyDaysOfJavascript,
}

impl PlanKind {
    /// Every supported plan, in display order.
    pub const ALL: [PlanKind; 3] = [
        PlanKind::TopInterview150,
        PlanKind::LeetCode75,
        PlanKind::ThirtyDaysOfJavascript,
    ];

    /// LeetCode slug for the plan.
    pub fn slug(&self) -> &'static str {
        match self {
            PlanKind::TopInterview150 => "top-interview-150",
            PlanKind::LeetCode75 => "leetcode-75",
            PlanKind::ThirtyDaysOfJavascript => "30-days-of-javascript",
        }
    }

    /// File name of the progress file for this plan.
    pub fn plan_file_name(&self) -> String {
        format!("{}.json", self.slug())
    }

    /// File name of the raw document for this plan.
    pub fn raw_file_name(&self) -> String {
        format!("{}-raw.json", self.slug())
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
