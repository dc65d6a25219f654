use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CompleteArgs, InitArgs, SampleArgs, StatArgs};

/// Track progress through a LeetCode study plan
///
/// grind keeps one JSON progress file per study plan. Initialize a plan from
/// its raw LeetCode document, pick random unsolved questions to work on, mark
/// them complete and watch the streak grow.
#[derive(Parser)]
#[command(version, about, name = "grind")]
pub struct Args {
    /// Directory holding progress files. Defaults to
    /// $XDG_DATA_HOME/grind/plans
    #[arg(long, global = true, env = "GRIND_PLANS_DIR")]
    pub plans_dir: Option<PathBuf>,

    /// Directory holding raw `<plan>-raw.json` documents. Defaults to
    /// $XDG_DATA_HOME/grind/data
    #[arg(long, global = true, env = "GRIND_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// GraphQL endpoint used by `init --fetch`
    #[arg(long, global = true, env = "GRIND_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the grind CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Create the progress file for a plan
    Init(InitArgs),
    /// Pick random unsolved questions
    #[command(alias = "s")]
    Sample(SampleArgs),
    /// Mark questions as complete
    #[command(alias = "c")]
    Complete(CompleteArgs),
    /// Show progress, streak and daily history
    Stat(StatArgs),
}
