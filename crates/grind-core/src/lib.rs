//! Core library for the grind study plan tracker.
//!
//! This crate turns a LeetCode study plan into a local progress file and
//! offers the operations around it: sampling unsolved questions, marking
//! questions complete and reporting progress with a streak and a daily
//! histogram.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): plain data plus the plan invariants
//! - **Display Wrappers** ([`display`]): markdown formatting of operation
//!   results
//! - **Statistics** ([`visualizer`]): the progress report
//! - **Terminal Rendering**: rich or plain output via the CLI's renderer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use grind_core::{
//!     params::{CompletePlan, InitPlan, PlanStats},
//!     PlanKind, TrackerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new().build()?;
//!
//! // Reads $XDG_DATA_HOME/grind/data/leetcode-75-raw.json
//! let init = tracker
//!     .init_plan(&InitPlan { kind: PlanKind::LeetCode75, fetch: false })
//!     .await?;
//! println!("{init}");
//!
//! tracker
//!     .complete_plan(&CompletePlan {
//!         kind: PlanKind::LeetCode75,
//!         ids: vec!["1768".to_string()],
//!     })
//!     .await?;
//!
//! let report = tracker
//!     .plan_stats(&PlanStats { kind: PlanKind::LeetCode75, days: 7 })
//!     .await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod extract;
pub mod models;
pub mod params;
pub mod store;
pub mod tracker;
pub mod visualizer;

// Re-export commonly used types
pub use display::{CompletionResult, InitResult, LocalDateTime, SampleResult, SampledQuestion};
pub use error::{Result, TrackerError};
pub use extract::{plan_from_raw, RawSource};
pub use models::{CompletionReport, Plan, PlanKind, Question};
pub use params::{CompletePlan, InitPlan, PlanStats, SamplePlan};
pub use store::PlanStore;
pub use tracker::{Tracker, TrackerBuilder};
pub use visualizer::ProgressVisualizer;
