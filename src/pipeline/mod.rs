//! Pipeline orchestration for diff operations.
//!
//! Shared read → align → report stages used by the CLI command handlers.

mod diff_stage;
mod input;
mod output;
mod report_stage;

pub use diff_stage::compute_diff;
pub use input::{read_input, InputText};
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use report_stage::output_report;

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read an input file
    #[error("Read failed for {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    /// Diff computation failed
    #[error("Diff failed: {source}")]
    DiffFailed {
        #[source]
        source: anyhow::Error,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - no changes detected (or --fail-on-change not set)
    pub const SUCCESS: i32 = 0;
    /// Changes were detected
    pub const CHANGES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}
