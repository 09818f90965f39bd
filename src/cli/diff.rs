//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two text files.

use crate::config::DiffConfig;
use crate::diff::DiffResult;
use crate::pipeline::{compute_diff, exit_codes, output_report, read_input, PipelineError};
use anyhow::Result;

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_diff(config: &DiffConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;

    let a = read_input(&config.paths.a, quiet).map_err(|source| PipelineError::ReadFailed {
        path: config.paths.a.display().to_string(),
        source,
    })?;
    let b = read_input(&config.paths.b, quiet).map_err(|source| PipelineError::ReadFailed {
        path: config.paths.b.display().to_string(),
        source,
    })?;

    let result =
        compute_diff(config, &a, &b).map_err(|source| PipelineError::DiffFailed { source })?;

    let exit_code = determine_exit_code(config, &result);

    output_report(config, &result).map_err(|source| PipelineError::ReportFailed { source })?;

    Ok(exit_code)
}

/// Determine the appropriate exit code based on diff results and config flags.
fn determine_exit_code(config: &DiffConfig, result: &DiffResult) -> i32 {
    if config.behavior.fail_on_change && result.has_changes() {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}
