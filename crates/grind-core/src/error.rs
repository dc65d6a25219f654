//! Error types for the tracker library.

use std::{fmt, path::PathBuf};

use thiserror::Error;

use crate::models::PlanKind;

/// Comprehensive error type for all tracker operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// No progress file exists for the requested plan
    #[error("No plan file present at: {}", path.display())]
    PlanNotFound { path: PathBuf },
    /// The raw study plan document could not be found
    #[error(
        "Raw plan for '{kind}' not available at {}. Provide the raw `studyPlanV2Detail` JSON there or run `init --fetch`",
        path.display()
    )]
    RawSourceNotFound { kind: PlanKind, path: PathBuf },
    /// A progress file already exists for the plan being initialized
    #[error(
        "Plan '{kind}' already in progress at {}. Delete it first if you want to reinitialize",
        path.display()
    )]
    AlreadyExists { kind: PlanKind, path: PathBuf },
    /// Structurally invalid plan file or raw document
    #[error("Failed to parse {context}: {reason}")]
    Parse { context: String, reason: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// The remote raw source could not be reached or answered badly
    #[error("Source unavailable at {endpoint}: {reason}")]
    SourceUnavailable { endpoint: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{}': {source}", path.display())]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TrackerError {
        TrackerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

/// Builder for creating parse errors.
pub struct ParseErrorBuilder {
    context: String,
}

impl ParseErrorBuilder {
    /// Create a new parse error builder describing what was being parsed.
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl fmt::Display) -> TrackerError {
        TrackerError::Parse {
            context: self.context,
            reason: reason.to_string(),
        }
    }
}

impl TrackerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a builder for parse errors.
    pub fn parse(context: impl Into<String>) -> ParseErrorBuilder {
        ParseErrorBuilder::new(context)
    }

    /// Creates a source-unavailable error for the given endpoint.
    pub fn source_unavailable(endpoint: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::SourceUnavailable {
            endpoint: endpoint.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether the error reports a missing plan file or raw document.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TrackerError::PlanNotFound { .. } | TrackerError::RawSourceNotFound { .. }
        )
    }
}

/// Extension trait attaching a path to I/O failures.
pub trait FsResultExt<T> {
    /// Map an I/O error to [`TrackerError::FileSystem`] for `path`.
    fn fs_context(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> FsResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| TrackerError::FileSystem {
            path: path.into(),
            source,
        })
    }
}

/// Extension trait for JSON decoding results.
pub trait ParseResultExt<T> {
    /// Map a serde_json error to [`TrackerError::Parse`] with a context.
    fn parse_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;
}

impl<T> ParseResultExt<T> for std::result::Result<T, serde_json::Error> {
    fn parse_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| TrackerError::parse(context.to_string()).with_reason(e))
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = TrackerError::invalid_input("n").with_reason("must be greater than 0");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'n': must be greater than 0"
        );
    }

    #[test]
    fn test_parse_context_maps_serde_errors() {
        let result: Result<serde_json::Value> =
            serde_json::from_str::<serde_json::Value>("{not json").parse_context("plan file");
        match result {
            Err(TrackerError::Parse { context, .. }) => assert_eq!(context, "plan file"),
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_fs_context_keeps_path() {
        let result: Result<()> = Err(std::io::Error::other("disk on fire")).fs_context("/tmp/x");
        match result {
            Err(TrackerError::FileSystem { path, .. }) => assert_eq!(path, PathBuf::from("/tmp/x")),
            other => panic!("Expected FileSystem error, got {other:?}"),
        }
    }

    #[test]
    fn test_is_not_found() {
        let err = TrackerError::PlanNotFound {
            path: PathBuf::from("plans/leetcode-75.json"),
        };
        assert!(err.is_not_found());
        assert!(err.to_string().contains("plans/leetcode-75.json"));

        let err = TrackerError::source_unavailable("https://example.com", "timed out");
        assert!(!err.is_not_found());
    }
}
