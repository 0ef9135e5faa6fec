//! Litscan run configuration
//!
//! Holds the invocation parameters for one pipeline run and derives
//! the output and summary paths when they are not given explicitly.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{LitScanError, Result};

/// Default column scanned for species mentions
pub const DEFAULT_TEXT_COLUMN: &str = "abstract";

/// Default number of rows between progress messages
pub const DEFAULT_PROGRESS_INTERVAL: usize = 10;

/// Configuration for a single extraction run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Path to the input CSV file
    pub input_path: PathBuf,

    /// Name of the column containing the text to scan
    pub text_column: String,

    /// Path for the augmented output table (derived from the input
    /// path when absent)
    pub output_path: Option<PathBuf>,

    /// Optional custom taxon lexicon file
    pub lexicon_path: Option<PathBuf>,

    /// Rows between progress messages (0 disables progress logging)
    pub progress_interval: usize,
}

impl RunConfig {
    /// Create a config for an input file with default settings
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            text_column: DEFAULT_TEXT_COLUMN.to_string(),
            output_path: None,
            lexicon_path: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Set the text column to scan
    pub fn with_text_column(mut self, column: impl Into<String>) -> Self {
        self.text_column = column.into();
        self
    }

    /// Set an explicit output path
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Set a custom lexicon file
    pub fn with_lexicon_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.lexicon_path = Some(path.into());
        self
    }

    /// Set the progress interval
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Check that the input file exists before any work starts
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(LitScanError::InputNotFound(self.input_path.clone()));
        }
        Ok(())
    }

    /// Path for the augmented table: the explicit output path if given,
    /// otherwise the input path with `_with_species` before the extension
    pub fn resolved_output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => derive_sibling(&self.input_path, "_with_species"),
        }
    }

    /// Path for the species summary, derived from the output path
    pub fn summary_path(&self) -> PathBuf {
        derive_sibling(&self.resolved_output_path(), "_species_summary")
    }
}

/// Build a sibling path by inserting `suffix` before the extension
fn derive_sibling(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("csv");
    path.with_file_name(format!("{stem}{suffix}.{ext}"))
}
