//! Display wrappers for operation results.
//!
//! Domain models stay free of presentation concerns; the tracker returns
//! these wrappers and each interface decides how to print them. All wrappers
//! produce markdown so the CLI can render them richly or as plain text.
//!
//! ## Module Organization
//!
//! - [`results`]: Operation result types (InitResult, SampleResult,
//!   CompletionResult)
//! - [`datetime`]: Date/time formatting utilities
//!
//! The statistics report is produced by [`crate::visualizer`].

pub mod datetime;
pub mod results;

pub use datetime::LocalDateTime;
pub use results::{CompletionResult, InitResult, SampleResult, SampledQuestion};
