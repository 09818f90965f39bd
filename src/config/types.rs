//! Configuration types for diff-checker operations.

use crate::diff::DEFAULT_SIMILARITY_THRESHOLD;
use crate::reports::{Palette, ReportFormat, TextColor};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Line matching configuration
    pub matching: MatchingConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the similarity threshold.
    pub const fn similarity_threshold(mut self, threshold: f64) -> Self {
        self.config.matching.similarity_threshold = threshold;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Set the color of text only in A.
    pub const fn a_color(mut self, color: TextColor) -> Self {
        self.config.output.a_color = color;
        self
    }

    /// Set the color of text only in B.
    pub const fn b_color(mut self, color: TextColor) -> Self {
        self.config.output.b_color = color;
        self
    }

    /// Enable fail-on-change mode.
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_change = fail;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for diff operations
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Paths to compare
    pub paths: DiffPaths,
    /// Output configuration
    pub output: OutputConfig,
    /// Matching configuration
    pub matching: MatchingConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl DiffConfig {
    /// Assemble a diff configuration from the two inputs and application settings.
    #[must_use]
    pub fn from_app_config(paths: DiffPaths, config: &AppConfig) -> Self {
        Self {
            paths,
            output: config.output.clone(),
            matching: config.matching.clone(),
            behavior: config.behavior.clone(),
        }
    }
}

/// Paths for diff operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffPaths {
    /// Path to input A
    pub a: PathBuf,
    /// Path to input B
    pub b: PathBuf,
}

impl Default for DiffPaths {
    fn default() -> Self {
        Self {
            a: PathBuf::from("a.txt"),
            b: PathBuf::from("b.txt"),
        }
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Color of text only in A
    pub a_color: TextColor,
    /// Color of text only in B
    pub b_color: TextColor,
    /// Only list lines that differ
    pub only_changes: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            format: ReportFormat::Auto,
            file: None,
            no_color: false,
            a_color: palette.a,
            b_color: palette.b,
            only_changes: false,
        }
    }
}

impl OutputConfig {
    /// Colors configured for each side.
    #[must_use]
    pub const fn palette(&self) -> Palette {
        Palette {
            a: self.a_color,
            b: self.b_color,
        }
    }
}

/// Line matching configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MatchingConfig {
    /// Share of identical word tokens a line pair must exceed to count as similar
    #[schemars(range(min = 0.0, max = 1.0))]
    pub similarity_threshold: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 if the inputs differ
    pub fail_on_change: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

// ============================================================================
// Builder for DiffConfig
// ============================================================================

/// Builder for `DiffConfig`
#[derive(Debug, Default)]
pub struct DiffConfigBuilder {
    a: Option<PathBuf>,
    b: Option<PathBuf>,
    output: OutputConfig,
    matching: MatchingConfig,
    behavior: BehaviorConfig,
}

impl DiffConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn a_path(mut self, path: PathBuf) -> Self {
        self.a = Some(path);
        self
    }

    #[must_use]
    pub fn b_path(mut self, path: PathBuf) -> Self {
        self.b = Some(path);
        self
    }

    #[must_use]
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.output.format = format;
        self
    }

    #[must_use]
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.output.file = file;
        self
    }

    #[must_use]
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.output.no_color = no_color;
        self
    }

    #[must_use]
    pub const fn palette(mut self, palette: Palette) -> Self {
        self.output.a_color = palette.a;
        self.output.b_color = palette.b;
        self
    }

    #[must_use]
    pub const fn only_changes(mut self, only: bool) -> Self {
        self.output.only_changes = only;
        self
    }

    #[must_use]
    pub const fn similarity_threshold(mut self, threshold: f64) -> Self {
        self.matching.similarity_threshold = threshold;
        self
    }

    #[must_use]
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.behavior.fail_on_change = fail;
        self
    }

    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.behavior.quiet = quiet;
        self
    }

    /// Build the configuration. Missing paths fall back to `a.txt` and `b.txt`.
    pub fn build(self) -> anyhow::Result<DiffConfig> {
        let threshold = self.matching.similarity_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            anyhow::bail!("similarity threshold must be between 0.0 and 1.0, got {threshold}");
        }

        let defaults = DiffPaths::default();
        Ok(DiffConfig {
            paths: DiffPaths {
                a: self.a.unwrap_or(defaults.a),
                b: self.b.unwrap_or(defaults.b),
            },
            output: self.output,
            matching: self.matching,
            behavior: self.behavior,
        })
    }
}
