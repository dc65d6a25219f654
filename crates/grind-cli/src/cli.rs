//! Command arguments and handlers.
//!
//! Each command has a clap argument struct that converts into the matching
//! core parameter type, so core stays free of clap derives:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```

use anyhow::Result;
use clap::{Args, ValueEnum};
use grind_core::{
    params::{CompletePlan, InitPlan, PlanStats, SamplePlan},
    visualizer::MAX_HISTORY_DAYS,
    PlanKind, Tracker,
};

use crate::renderer::TerminalRenderer;

/// Study plan selector for CLI arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanArg {
    /// Top Interview 150
    #[value(name = "top-interview-150")]
    TopInterview150,
    /// LeetCode 75
    #[value(name = "leetcode-75")]
    LeetCode75,
    /// 30 Days of JavaScript
    #[value(name = "30-days-of-javascript")]
    ThirtyDaysOfJavascript,
}

impl From<PlanArg> for PlanKind {
    fn from(arg: PlanArg) -> Self {
        match arg {
            PlanArg::TopInterview150 => PlanKind::TopInterview150,
            PlanArg::LeetCode75 => PlanKind::LeetCode75,
            PlanArg::ThirtyDaysOfJavascript => PlanKind::ThirtyDaysOfJavascript,
        }
    }
}

/// Create the progress file for a plan
///
/// Reads `<plan>-raw.json` from the data directory, or fetches the plan from
/// LeetCode's GraphQL API with `--fetch`. Refuses to overwrite a plan that is
/// already in progress.
#[derive(Args)]
pub struct InitArgs {
    /// Study plan to initialize
    pub plan: PlanArg,
    /// Fetch the plan from the GraphQL endpoint instead of the data directory
    #[arg(long)]
    pub fetch: bool,
}

impl From<InitArgs> for InitPlan {
    fn from(val: InitArgs) -> Self {
        InitPlan {
            kind: val.plan.into(),
            fetch: val.fetch,
        }
    }
}

/// Pick random unsolved questions
#[derive(Args)]
pub struct SampleArgs {
    /// Study plan to sample from
    pub plan: PlanArg,
    /// Number of questions to sample
    #[arg(short = 'n', long = "count", default_value_t = 1, allow_negative_numbers = true)]
    pub n: i64,
}

impl From<SampleArgs> for SamplePlan {
    fn from(val: SampleArgs) -> Self {
        SamplePlan {
            kind: val.plan.into(),
            count: val.n,
        }
    }
}

/// Mark questions as complete
///
/// Ids not present in the plan are reported and ignored. Questions that are
/// already complete keep their original completion time.
#[derive(Args)]
pub struct CompleteArgs {
    /// Study plan to update
    pub plan: PlanArg,
    /// Question ids to mark complete
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<String>,
}

impl From<CompleteArgs> for CompletePlan {
    fn from(val: CompleteArgs) -> Self {
        CompletePlan {
            kind: val.plan.into(),
            ids: val.ids,
        }
    }
}

/// Show progress, streak and daily history
#[derive(Args)]
pub struct StatArgs {
    /// Study plan to report on
    pub plan: PlanArg,
    /// Days of history to show (at most 30)
    #[arg(short, long, default_value_t = MAX_HISTORY_DAYS)]
    pub days: usize,
}

impl From<StatArgs> for PlanStats {
    fn from(val: StatArgs) -> Self {
        PlanStats {
            kind: val.plan.into(),
            days: val.days,
        }
    }
}

/// Dispatches parsed commands to the tracker and renders the results.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub async fn init(&self, args: InitArgs) -> Result<()> {
        let result = self.tracker.init_plan(&args.into()).await?;
        self.renderer.render(&result.to_string())
    }

    pub async fn sample(&self, args: SampleArgs) -> Result<()> {
        let result = self.tracker.sample_plan(&args.into()).await?;
        self.renderer.render(&result.to_string())
    }

    pub async fn complete(&self, args: CompleteArgs) -> Result<()> {
        let result = self.tracker.complete_plan(&args.into()).await?;
        self.renderer.render(&result.to_string())
    }

    pub async fn stat(&self, args: StatArgs) -> Result<()> {
        let report = self.tracker.plan_stats(&args.into()).await?;
        self.renderer.render(&format!("{report}\n"))
    }
}
