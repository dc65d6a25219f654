//! Builder for creating and configuring Tracker instances.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use log::debug;

use super::Tracker;
use crate::{
    error::{FsResultExt, Result, TrackerError},
    extract::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT},
    store::PlanStore,
};

const XDG_PREFIX: &str = "grind";

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone)]
pub struct TrackerBuilder {
    plans_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    endpoint: Option<String>,
    timeout: Duration,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            plans_dir: None,
            data_dir: None,
            endpoint: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom directory for progress files.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/grind/plans` or `~/.local/share/grind/plans`
    pub fn with_plans_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.plans_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets a custom directory for raw study plan documents.
    ///
    /// If not specified, uses `$XDG_DATA_HOME/grind/data` or
    /// `~/.local/share/grind/data`
    pub fn with_data_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the GraphQL endpoint used by `init --fetch`.
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: Option<S>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.into());
        }
        self
    }

    /// Sets the request timeout for remote fetches.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the configured tracker instance.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::XdgDirectory` if a default directory cannot be
    /// resolved, `TrackerError::FileSystem` if a directory cannot be created
    /// and `TrackerError::InvalidInput` if the endpoint is blank.
    pub fn build(self) -> Result<Tracker> {
        let plans_dir = match self.plans_dir {
            Some(path) => path,
            None => Self::default_dir("plans")?,
        };
        let data_dir = match self.data_dir {
            Some(path) => path,
            None => Self::default_dir("data")?,
        };
        let endpoint = self
            .endpoint
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        if endpoint.trim().is_empty() {
            return Err(TrackerError::invalid_input("endpoint").with_reason("cannot be empty"));
        }

        std::fs::create_dir_all(&plans_dir).fs_context(&plans_dir)?;
        debug!(
            "Tracker configured: plans in {}, raw data in {}, endpoint {endpoint}",
            plans_dir.display(),
            data_dir.display()
        );

        Ok(Tracker {
            store: PlanStore::new(plans_dir),
            data_dir,
            endpoint,
            timeout: self.timeout,
        })
    }

    /// Returns a default directory following the XDG Base Directory
    /// specification.
    fn default_dir(name: &str) -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix(XDG_PREFIX)
            .create_data_directory(name)
            .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
    }
}

impl Default for TrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
