//! Configuration module for diff-checker.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```
//! use diff_checker::config::{AppConfig, ConfigPreset, Validatable};
//!
//! let config = AppConfig::builder()
//!     .similarity_threshold(0.6)
//!     .fail_on_change(true)
//!     .build();
//! assert!(config.is_valid());
//!
//! let strict = AppConfig::from_preset(ConfigPreset::Strict);
//! assert!(strict.matching.similarity_threshold > config.matching.similarity_threshold);
//! ```
//!
//! # Configuration File
//!
//! Place a `.diff-checker.yaml` file in your project root or `~/.config/diff-checker/`:
//!
//! ```yaml
//! matching:
//!   similarity_threshold: 0.6
//! output:
//!   a_color: red
//!   b_color: green
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{ConfigPreset, LOOSE_SIMILARITY_THRESHOLD, STRICT_SIMILARITY_THRESHOLD};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, DiffConfig, DiffConfigBuilder, DiffPaths,
    MatchingConfig, OutputConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// The schema documents every option accepted in `.diff-checker.yaml`
/// files and can be used by editors for validation and autocompletion.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
