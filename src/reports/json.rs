//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{DiffResult, DiffSummary, MatchKind, WordMatch};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Whether to only include summary
    summary_only: bool,
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            summary_only: false,
            pretty: true,
        }
    }

    /// Create a summary-only reporter
    #[must_use]
    pub const fn summary_only() -> Self {
        Self {
            summary_only: true,
            pretty: true,
        }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let records = if self.summary_only {
            None
        } else {
            Some(
                result
                    .numbered()
                    .filter(|line| !(config.only_changes && line.kind == Some(MatchKind::Same)))
                    .map(|line| JsonRecord {
                        kind: line.kind,
                        line_a: line.line_a,
                        line_b: line.line_b,
                        a: line.record.a(),
                        b: line.record.b(),
                        words: line.record.is_similar().then(|| {
                            line.record.children().iter().map(JsonWord::from).collect()
                        }),
                    })
                    .collect(),
            )
        };

        let report = JsonDiffReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: env!("CARGO_PKG_NAME"),
                    version: env!("CARGO_PKG_VERSION"),
                },
                generated_at: Utc::now().to_rfc3339(),
                a: InputInfo {
                    file_path: config.metadata.a_path.as_deref(),
                    line_count: result.summary.lines_in_a,
                },
                b: InputInfo {
                    file_path: config.metadata.b_path.as_deref(),
                    line_count: result.summary.lines_in_b,
                },
                similarity_threshold: result.threshold,
            },
            summary: &result.summary,
            similarity_score: result.similarity_score(),
            records,
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        }
        .map_err(|e| ReportError::SerializationError(e.to_string()))?;

        Ok(json)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonDiffReport<'a> {
    metadata: JsonReportMetadata<'a>,
    summary: &'a DiffSummary,
    similarity_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    records: Option<Vec<JsonRecord<'a>>>,
}

#[derive(Serialize)]
struct JsonReportMetadata<'a> {
    tool: ToolInfo,
    generated_at: String,
    a: InputInfo<'a>,
    b: InputInfo<'a>,
    similarity_threshold: f64,
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct InputInfo<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    file_path: Option<&'a str>,
    line_count: usize,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    kind: Option<MatchKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line_a: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line_b: Option<usize>,
    a: &'a str,
    b: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    words: Option<Vec<JsonWord<'a>>>,
}

#[derive(Serialize)]
struct JsonWord<'a> {
    kind: Option<MatchKind>,
    a: &'a str,
    b: &'a str,
}

impl<'a> From<&'a WordMatch> for JsonWord<'a> {
    fn from(word: &'a WordMatch) -> Self {
        Self {
            kind: word.kind(),
            a: word.a(),
            b: word.b(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffEngine;
    use crate::reports::ReportMetadata;
    use serde_json::Value;

    fn render(reporter: &JsonReporter, a: &str, b: &str, config: &ReportConfig) -> Value {
        let result = DiffEngine::new().diff(a, b);
        let json = reporter.generate_diff_report(&result, config).unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_records_and_line_numbers() {
        let value = render(
            &JsonReporter::new(),
            "abcd\n1234",
            "1234\nxyz",
            &ReportConfig::default(),
        );
        let records = value["records"].as_array().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["kind"], "only_in_a");
        assert_eq!(records[0]["line_a"], 1);
        assert!(records[0].get("line_b").is_none());
        assert_eq!(records[1]["kind"], "same");
        assert_eq!(records[1]["line_a"], 2);
        assert_eq!(records[1]["line_b"], 1);
        assert_eq!(records[2]["kind"], "only_in_b");
        assert_eq!(records[2]["b"], "xyz");
    }

    #[test]
    fn test_similar_record_has_words() {
        let value = render(
            &JsonReporter::new(),
            "the quick brown fox",
            "the quick red fox",
            &ReportConfig::default(),
        );
        let record = &value["records"][0];
        assert_eq!(record["kind"], "similar");
        let words = record["words"].as_array().unwrap();
        assert_eq!(words.len(), 8);
        assert_eq!(words[4]["kind"], "only_in_a");
        assert_eq!(words[4]["a"], "brown");
        assert_eq!(words[5]["kind"], "only_in_b");
        assert_eq!(words[5]["b"], "red");
    }

    #[test]
    fn test_summary_only_and_metadata() {
        let config = ReportConfig {
            metadata: ReportMetadata::for_paths("a.txt", "b.txt"),
            ..Default::default()
        };
        let value = render(&JsonReporter::summary_only(), "x\ny", "x\nz", &config);
        assert!(value.get("records").is_none());
        assert_eq!(value["summary"]["lines_same"], 1);
        assert_eq!(value["summary"]["total_changes"], 2);
        assert_eq!(value["metadata"]["a"]["file_path"], "a.txt");
        assert_eq!(value["metadata"]["b"]["line_count"], 2);
        assert_eq!(value["metadata"]["tool"]["name"], "diff-checker");
    }

    #[test]
    fn test_compact_output() {
        let result = DiffEngine::new().diff("a", "a");
        let json = JsonReporter::new()
            .pretty(false)
            .generate_diff_report(&result, &ReportConfig::default())
            .unwrap();
        assert!(!json.contains('\n'));
    }
}
