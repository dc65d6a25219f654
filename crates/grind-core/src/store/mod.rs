//! File persistence for plans.
//!
//! Every plan lives in its own JSON file under the plans directory, named
//! after the plan's slug. Writes always replace the whole file: the document
//! is written to a temporary file next to the target and renamed over it, so
//! a failed save leaves the previous file intact.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::{debug, warn};
use tempfile::NamedTempFile;

use crate::{
    error::{FsResultExt, ParseResultExt, Result, TrackerError},
    models::{Plan, PlanKind},
};

mod document;

use document::PlanDocument;

/// Loads and saves plans in a fixed directory.
#[derive(Debug, Clone)]
pub struct PlanStore {
    dir: PathBuf,
}

impl PlanStore {
    /// Creates a store rooted at `dir`. The directory is created lazily on the
    /// first save.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Directory holding the plan files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolves the file path for a plan.
    pub fn path_for(&self, kind: PlanKind) -> PathBuf {
        self.dir.join(kind.plan_file_name())
    }

    /// Whether a progress file exists for the plan.
    pub fn exists(&self, kind: PlanKind) -> bool {
        self.path_for(kind).is_file()
    }

    /// Loads the plan stored for `kind`.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::PlanNotFound` if no file exists,
    /// `TrackerError::Parse` if the content is not a valid plan, and
    /// `TrackerError::FileSystem` if the file cannot be read.
    pub fn load(&self, kind: PlanKind) -> Result<Plan> {
        let path = self.path_for(kind);
        if !path.is_file() {
            return Err(TrackerError::PlanNotFound { path });
        }

        let content = fs::read_to_string(&path).fs_context(&path)?;
        let plan: Plan =
            serde_json::from_str(&content).parse_context(format!("plan file {}", path.display()))?;
        plan.validate()?;

        let legacy = plan
            .questions
            .iter()
            .filter(|q| q.completed && q.completed_at.is_none())
            .count();
        if legacy > 0 {
            warn!(
                "{legacy} completed question(s) in {} have no completion time and are left out of history",
                path.display()
            );
        }

        debug!(
            "Loaded plan '{}' with {} questions from {}",
            plan.name,
            plan.total_count(),
            path.display()
        );
        Ok(plan)
    }

    /// Writes `plan` for `kind`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::FileSystem` if the plan cannot be encoded, the
    /// directory cannot be created or the file cannot be written. The previous
    /// file, if any, is left as it was.
    pub fn save(&self, plan: &Plan, kind: PlanKind) -> Result<PathBuf> {
        let path = self.path_for(kind);
        fs::create_dir_all(&self.dir).fs_context(&self.dir)?;

        let json = serde_json::to_string_pretty(&PlanDocument::from(plan))
            .map_err(io::Error::other)
            .fs_context(&path)?;

        let mut file = NamedTempFile::new_in(&self.dir).fs_context(&self.dir)?;
        file.write_all(json.as_bytes()).fs_context(file.path())?;
        file.write_all(b"\n").fs_context(file.path())?;
        file.as_file().sync_all().fs_context(file.path())?;
        file.persist(&path)
            .map_err(|e| e.error)
            .fs_context(&path)?;

        debug!("Saved plan '{}' to {}", plan.name, path.display());
        Ok(path)
    }

    /// Writes a freshly extracted plan, refusing to overwrite progress.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::AlreadyExists` if a file already exists for
    /// `kind`, otherwise the errors of [`PlanStore::save`].
    pub fn create(&self, plan: &Plan, kind: PlanKind) -> Result<PathBuf> {
        let path = self.path_for(kind);
        if path.exists() {
            return Err(TrackerError::AlreadyExists { kind, path });
        }
        self.save(plan, kind)
    }
}
