//! Default configurations and presets for diff-checker.

use super::types::{AppConfig, BehaviorConfig, MatchingConfig, OutputConfig};
use crate::reports::ReportFormat;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Default settings: a line pair is similar when over half its tokens agree
    Default,
    /// Strict: only near-identical lines are paired as similar
    Strict,
    /// Loose: pair lines sharing a quarter of their tokens
    Loose,
    /// CI/CD: machine-readable output, fail on changes
    CiCd,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Strict => "strict",
            Self::Loose => "loose",
            Self::CiCd => "ci-cd",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "balanced" => Some(Self::Default),
            "strict" => Some(Self::Strict),
            "loose" | "permissive" => Some(Self::Loose),
            "ci-cd" | "ci" | "pipeline" => Some(Self::CiCd),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Lines are similar when more than half of their tokens agree",
            Self::Strict => "Lines are similar only when more than three quarters agree",
            Self::Loose => "Lines are similar when more than a quarter of their tokens agree",
            Self::CiCd => "JSON output without colors, exit 1 when the inputs differ",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Strict, Self::Loose, Self::CiCd]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Strict => Self::with_threshold(STRICT_SIMILARITY_THRESHOLD),
            ConfigPreset::Loose => Self::with_threshold(LOOSE_SIMILARITY_THRESHOLD),
            ConfigPreset::CiCd => Self::ci_cd_preset(),
        }
    }

    fn with_threshold(similarity_threshold: f64) -> Self {
        Self {
            matching: MatchingConfig {
                similarity_threshold,
            },
            ..Self::default()
        }
    }

    /// CI/CD pipeline preset.
    ///
    /// - JSON output for machine parsing
    /// - Fail on any changes
    /// - Quiet mode to reduce noise
    #[must_use]
    pub fn ci_cd_preset() -> Self {
        Self {
            matching: MatchingConfig::default(),
            output: OutputConfig {
                format: ReportFormat::Json,
                no_color: true,
                ..OutputConfig::default()
            },
            behavior: BehaviorConfig {
                fail_on_change: true,
                quiet: true,
            },
        }
    }
}

// ============================================================================
// Default Value Constants
// ============================================================================

/// Similarity threshold of the strict preset.
pub const STRICT_SIMILARITY_THRESHOLD: f64 = 0.75;

/// Similarity threshold of the loose preset.
pub const LOOSE_SIMILARITY_THRESHOLD: f64 = 0.25;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_from_name() {
        assert_eq!(ConfigPreset::from_name("default"), Some(ConfigPreset::Default));
        assert_eq!(ConfigPreset::from_name("STRICT"), Some(ConfigPreset::Strict));
        assert_eq!(ConfigPreset::from_name("permissive"), Some(ConfigPreset::Loose));
        assert_eq!(ConfigPreset::from_name("pipeline"), Some(ConfigPreset::CiCd));
        assert_eq!(ConfigPreset::from_name("invalid"), None);
    }

    #[test]
    fn test_preset_names_roundtrip() {
        for preset in ConfigPreset::all() {
            assert_eq!(ConfigPreset::from_name(preset.name()), Some(*preset));
        }
    }

    #[test]
    fn test_threshold_presets() {
        let strict = AppConfig::from_preset(ConfigPreset::Strict);
        let loose = AppConfig::from_preset(ConfigPreset::Loose);
        assert!(strict.matching.similarity_threshold > loose.matching.similarity_threshold);
        assert_eq!(strict.output, OutputConfig::default());
    }

    #[test]
    fn test_ci_cd_preset() {
        let config = AppConfig::from_preset(ConfigPreset::CiCd);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.output.no_color);
        assert!(config.behavior.fail_on_change);
        assert!(config.behavior.quiet);
    }
}
