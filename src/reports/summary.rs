//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::DiffResult;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        "line"
    } else {
        "lines"
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let summary = &result.summary;

        lines.push(self.color("Diff Summary", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        let a_name = config.metadata.a_path.as_deref().unwrap_or("A");
        let b_name = config.metadata.b_path.as_deref().unwrap_or("B");
        lines.push(format!(
            "{}  {} → {}",
            self.color("Files:", "cyan"),
            a_name,
            b_name
        ));
        lines.push(format!(
            "{}  {} → {} lines",
            self.color("Size:", "cyan"),
            summary.lines_in_a,
            summary.lines_in_b
        ));

        lines.push(String::new());
        lines.push(self.color("Changes:", "bold"));

        if summary.lines_only_in_a > 0 {
            lines.push(format!(
                "  {} {} only in A",
                self.color(&format!("-{}", summary.lines_only_in_a), "red"),
                plural(summary.lines_only_in_a)
            ));
        }
        if summary.lines_only_in_b > 0 {
            lines.push(format!(
                "  {} {} only in B",
                self.color(&format!("+{}", summary.lines_only_in_b), "green"),
                plural(summary.lines_only_in_b)
            ));
        }
        if summary.lines_similar > 0 {
            lines.push(format!(
                "  {} {} similar",
                self.color(&format!("~{}", summary.lines_similar), "yellow"),
                plural(summary.lines_similar)
            ));
        }
        if summary.unpaired_empty_lines > 0 {
            lines.push(format!(
                "  {} empty {} without a partner",
                self.color(&format!("±{}", summary.unpaired_empty_lines), "yellow"),
                plural(summary.unpaired_empty_lines)
            ));
        }
        if !result.has_changes() {
            lines.push(format!("  {}", self.color("No changes", "dim")));
        }

        lines.push(String::new());
        let score = result.similarity_score();
        let score_color = if score > 90.0 {
            "green"
        } else if score > 70.0 {
            "yellow"
        } else {
            "red"
        };
        lines.push(format!(
            "{}  {}",
            self.color("Identical:", "cyan"),
            self.color(&format!("{score:.1}%"), score_color)
        ));

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
