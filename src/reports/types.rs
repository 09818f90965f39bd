//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: console listing
    #[default]
    Auto,
    /// Line-numbered listing with inline word changes
    Console,
    /// Brief summary output
    Summary,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Console => write!(f, "console"),
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Terminal color for one side of the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl TextColor {
    /// Bright ANSI foreground escape for this color.
    #[must_use]
    pub const fn ansi(&self) -> &'static str {
        match self {
            Self::Black => "\x1b[90m",
            Self::Red => "\x1b[91m",
            Self::Green => "\x1b[92m",
            Self::Yellow => "\x1b[93m",
            Self::Blue => "\x1b[94m",
            Self::Magenta => "\x1b[95m",
            Self::Cyan => "\x1b[96m",
            Self::White => "\x1b[97m",
        }
    }

    /// Lowercase color name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    /// Parse a color from its name. Returns None for unrecognized values.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "black" => Some(Self::Black),
            "red" => Some(Self::Red),
            "green" => Some(Self::Green),
            "yellow" => Some(Self::Yellow),
            "blue" => Some(Self::Blue),
            "magenta" => Some(Self::Magenta),
            "cyan" => Some(Self::Cyan),
            "white" => Some(Self::White),
            _ => None,
        }
    }
}

impl std::fmt::Display for TextColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Colors used for text unique to each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub a: TextColor,
    pub b: TextColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            a: TextColor::Cyan,
            b: TextColor::Magenta,
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
    /// Only list records that differ
    pub only_changes: bool,
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Path of input A
    pub a_path: Option<String>,
    /// Path of input B
    pub b_path: Option<String>,
    /// Tool version
    pub tool_version: String,
}

impl ReportMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }

    /// Metadata for a pair of input paths.
    #[must_use]
    pub fn for_paths(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a_path: Some(a.into()),
            b_path: Some(b.into()),
            ..Self::new()
        }
    }
}
