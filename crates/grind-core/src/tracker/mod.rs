//! High-level tracker API for study plans.
//!
//! [`Tracker`] is the coordinator every interface talks to. It owns the
//! resolved configuration (plans directory, raw data directory, GraphQL
//! endpoint) and exposes one async operation per command. File work runs on
//! the blocking thread pool; the only network call is the optional GraphQL
//! fetch during `init`.
//!
//! ```text
//! init      RawSource ──▶ plan_from_raw ──▶ PlanStore::create
//! sample    PlanStore::load ──▶ Plan::sample_unsolved
//! complete  PlanStore::load ──▶ Plan::mark_complete ──▶ PlanStore::save
//! stat      PlanStore::load ──▶ ProgressVisualizer::render
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use grind_core::{params::SamplePlan, PlanKind, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_plans_dir(Some("/tmp/grind/plans"))
//!     .build()?;
//!
//! let sampled = tracker
//!     .sample_plan(&SamplePlan { kind: PlanKind::LeetCode75, count: 3 })
//!     .await?;
//! println!("{sampled}");
//! # Ok(())
//! # }
//! ```

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use tokio::task;

use crate::{
    error::{Result, TrackerError},
    extract::RawSource,
    models::PlanKind,
    store::PlanStore,
};

pub mod builder;
mod ops;


pub use builder::TrackerBuilder;

/// Main tracker interface for initializing, sampling, completing and
/// reporting on study plans.
#[derive(Debug, Clone)]
pub struct Tracker {
    pub(crate) store: PlanStore,
    pub(crate) data_dir: PathBuf,
    pub(crate) endpoint: String,
    pub(crate) timeout: Duration,
}

impl Tracker {
    /// Store holding the progress files.
    pub fn store(&self) -> &PlanStore {
        &self.store
    }

    /// Directory searched for raw study plan documents.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Resolves where the raw document for `kind` is read from.
    pub fn raw_source(&self, kind: PlanKind, fetch: bool) -> RawSource {
        if fetch {
            RawSource::Remote {
                kind,
                endpoint: self.endpoint.clone(),
                timeout: self.timeout,
            }
        } else {
            RawSource::File {
                kind,
                path: self.data_dir.join(kind.raw_file_name()),
            }
        }
    }
}

/// Runs file work on the blocking pool and flattens the join error.
pub(crate) async fn blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(f)
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
}
