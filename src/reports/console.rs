//! Line-numbered console listing.
//!
//! Every record is printed on its own line, prefixed with its line number in
//! A and/or B. Similar lines are printed once with their word changes inline.

use super::{Palette, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{DiffResult, MatchKind, NumberedLine};
use std::fmt::Write;

/// ANSI color codes
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const GREEN: &str = "\x1b[32m";
    pub const BRIGHT_YELLOW: &str = "\x1b[93m";
}

const RULE_WIDTH: usize = 69;

/// Console reporter
pub struct ConsoleReporter {
    palette: Palette,
    use_colors: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    #[must_use]
    pub fn new() -> Self {
        Self {
            palette: Palette::default(),
            use_colors: true,
        }
    }

    /// Set the colors for each side
    #[must_use]
    pub const fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Disable colors
    #[must_use]
    pub const fn no_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.use_colors {
            format!("{code}{text}{}", colors::RESET)
        } else {
            text.to_string()
        }
    }

    fn paint_a(&self, text: &str) -> String {
        self.paint(text, self.palette.a.ansi())
    }

    fn paint_b(&self, text: &str) -> String {
        self.paint(text, self.palette.b.ansi())
    }

    fn write_rule(out: &mut String) -> std::fmt::Result {
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))
    }

    fn write_line(&self, out: &mut String, line: &NumberedLine<'_>) -> std::fmt::Result {
        let a_num = line.line_a.unwrap_or_default();
        let b_num = line.line_b.unwrap_or_default();
        let record = line.record;

        match line.kind {
            Some(MatchKind::Same) => writeln!(out, "L{a_num}/{b_num} A/B\t:{}", record.a()),
            Some(MatchKind::Similar) => {
                write!(
                    out,
                    "L{a_num}/{b_num} {}A/B\t:",
                    self.paint("~", colors::BRIGHT_YELLOW)
                )?;
                for word in record.children() {
                    match word.kind() {
                        Some(MatchKind::Same) => out.push_str(word.a()),
                        Some(MatchKind::OnlyInA) => out.push_str(&self.paint_a(word.a())),
                        Some(MatchKind::OnlyInB) => out.push_str(&self.paint_b(word.b())),
                        Some(MatchKind::Similar) | None => {
                            tracing::warn!(
                                a = word.a(),
                                b = word.b(),
                                "skipping unclassified word"
                            );
                        }
                    }
                }
                writeln!(out)
            }
            Some(MatchKind::OnlyInA) => writeln!(
                out,
                "L{a_num} {}A\t\t:{}",
                self.paint("+", colors::GREEN),
                self.paint_a(record.a())
            ),
            Some(MatchKind::OnlyInB) => writeln!(
                out,
                "L{b_num} {}B\t\t:{}",
                self.paint("+", colors::GREEN),
                self.paint_b(record.b())
            ),
            None => {
                tracing::warn!(a = record.a(), b = record.b(), "skipping unclassified record");
                Ok(())
            }
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for ConsoleReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();

        Self::write_rule(&mut out)?;
        let title = config.title.as_deref().unwrap_or("Diff");
        writeln!(out, "{title} {} & {}:", self.paint_a("A"), self.paint_b("B"))?;
        Self::write_rule(&mut out)?;

        if result.records.is_empty() {
            writeln!(out, "No differences between files")?;
        }
        for line in result.numbered() {
            if config.only_changes && line.kind == Some(MatchKind::Same) {
                continue;
            }
            self.write_line(&mut out, &line)?;
        }

        Self::write_rule(&mut out)?;
        writeln!(out)?;
        Self::write_rule(&mut out)?;

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Console
    }
}
