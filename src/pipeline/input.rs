//! Input reading stage.

use crate::error::DiffCheckerError;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// One input text together with where it was read from.
#[derive(Debug, Clone)]
pub struct InputText {
    /// Path the text was read from
    pub path: PathBuf,
    /// Full file content
    pub content: String,
}

impl InputText {
    /// Wrap already loaded content.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Number of lines the aligner will see.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }

    /// Path as displayed in reports
    #[must_use]
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

/// Read an input file with context for error messages
pub fn read_input(path: &Path, quiet: bool) -> Result<InputText> {
    if !quiet {
        tracing::info!("Reading input: {:?}", path);
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| DiffCheckerError::input(path, e))
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    let input = InputText::new(path, content);
    tracing::debug!(lines = input.line_count(), "read {}", input.display_path());
    Ok(input)
}
