//! Litscan Core - Shared error types and run configuration
//!
//! This crate defines the abstractions shared across the litscan
//! pipeline:
//! - Common error types and the crate-wide `Result` alias
//! - Run configuration (input/output paths, column selection, defaults)

pub mod config;

pub use config::RunConfig;

use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Core error types for litscan operations
#[derive(Error, Debug)]
pub enum LitScanError {
    /// The input table does not exist on disk
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// The requested text column is not part of the input table
    #[error("Column '{column}' not found in input. Available columns: {available}")]
    ColumnNotFound { column: String, available: String },

    /// The taxon recognizer could not be constructed
    #[error("Recognizer initialization failed: {0}")]
    RecognizerInit(String),

    /// CSV read/write error
    #[error("CSV error in {path}: {message}")]
    Csv { path: PathBuf, message: String },

    /// IO error with the offending path attached
    #[error("IO error for {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, LitScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_not_found_names_available_columns() {
        let err = LitScanError::ColumnNotFound {
            column: "abstract".to_string(),
            available: "title, year, doi".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'abstract'"));
        assert!(msg.contains("title, year, doi"));
    }

    #[test]
    fn test_input_not_found_message() {
        let err = LitScanError::InputNotFound(PathBuf::from("missing.csv"));
        assert_eq!(err.to_string(), "Input file not found: missing.csv");
    }
}
