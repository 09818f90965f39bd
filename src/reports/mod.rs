//! Report generation for diff results.
//!
//! This module provides multiple output formats for diff results:
//! - Console: line-numbered listing with inline word changes
//! - Summary: compact shell-friendly counts
//! - JSON: structured data for programmatic integration

mod console;
mod json;
mod summary;
mod types;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use types::{Palette, ReportConfig, ReportFormat, ReportMetadata, TextColor};

use crate::diff::DiffResult;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from diff results
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_diff_report(result, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true, Palette::default())
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
    palette: Palette,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Console => {
            let reporter = ConsoleReporter::new().palette(palette);
            if use_color {
                Box::new(reporter)
            } else {
                Box::new(reporter.no_colors())
            }
        }
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffEngine;

    #[test]
    fn test_factory_formats() {
        assert_eq!(create_reporter(ReportFormat::Auto).format(), ReportFormat::Console);
        assert_eq!(create_reporter(ReportFormat::Summary).format(), ReportFormat::Summary);
        assert_eq!(create_reporter(ReportFormat::Json).format(), ReportFormat::Json);
    }

    #[test]
    fn test_write_diff_report() {
        let result = DiffEngine::new().diff("a\nb", "a\nc");
        let reporter = create_reporter_with_options(ReportFormat::Console, false, Palette::default());
        let mut buf = Vec::new();
        reporter
            .write_diff_report(&result, &ReportConfig::default(), &mut buf)
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("L2 +A\t\t:b"));
        assert!(!text.contains('\x1b'));
    }
}
