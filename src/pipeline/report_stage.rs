//! Report output stage.

use crate::config::DiffConfig;
use crate::diff::DiffResult;
use crate::reports::{create_reporter_with_options, ReportConfig, ReportMetadata};
use anyhow::{Context, Result};

use super::{auto_detect_format, should_use_color, write_output, OutputTarget};

/// Output a diff report to the configured destination.
///
/// Resolves the format and color settings, renders the report and writes it
/// to the configured file or stdout.
pub fn output_report(config: &DiffConfig, result: &DiffResult) -> Result<()> {
    let output_target = OutputTarget::from_option(config.output.file.clone());
    let effective_output = auto_detect_format(config.output.format, &output_target);

    let report_config = ReportConfig {
        title: None,
        metadata: ReportMetadata::for_paths(
            config.paths.a.display().to_string(),
            config.paths.b.display().to_string(),
        ),
        only_changes: config.output.only_changes,
    };

    let use_color = should_use_color(config.output.no_color, &output_target);
    let reporter =
        create_reporter_with_options(effective_output, use_color, config.output.palette());
    tracing::debug!(format = %reporter.format(), use_color, "rendering report");

    let report = reporter
        .generate_diff_report(result, &report_config)
        .context("Failed to generate report")?;

    write_output(&report, &output_target, config.behavior.quiet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiffConfigBuilder;
    use crate::diff::DiffEngine;
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    #[test]
    fn test_output_report_to_file_has_no_colors() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.txt");
        let config = DiffConfigBuilder::new()
            .output_file(Some(path.clone()))
            .quiet(true)
            .build()
            .unwrap();
        let result = DiffEngine::new().diff("abcd", "1234");

        output_report(&config, &result).unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("L1 +A\t\t:abcd"), "{written}");
        assert!(written.contains("L1 +B\t\t:1234"), "{written}");
        assert!(!written.contains('\x1b'));
    }

    #[test]
    fn test_output_report_json_paths() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.json");
        let config = DiffConfigBuilder::new()
            .a_path("left.txt".into())
            .b_path("right.txt".into())
            .output_format(ReportFormat::Json)
            .output_file(Some(path.clone()))
            .quiet(true)
            .build()
            .unwrap();
        let result = DiffEngine::new().diff("x", "x");

        output_report(&config, &result).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["metadata"]["a"]["file_path"], "left.txt");
        assert_eq!(value["metadata"]["b"]["file_path"], "right.txt");
    }
}
