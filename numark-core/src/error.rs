//! Core error types

use thiserror::Error;

/// Errors raised while loading or parsing a dataset file
#[derive(Error, Debug)]
pub enum DatasetError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input has no header row
    #[error("dataset is empty")]
    Empty,

    /// The header row lacks a required column
    #[error("missing required column '{0}'")]
    MissingColumn(String),

    /// A quoted field was opened but never closed
    #[error("unterminated quoted field starting on line {0}")]
    UnterminatedQuote(usize),

    /// A data row is shorter than the header requires
    #[error("row on line {line} has {found} fields, expected at least {expected}")]
    RaggedRow {
        /// Line the row starts on (1-based)
        line: usize,
        /// Fields found in the row
        found: usize,
        /// Minimum field count implied by the header
        expected: usize,
    },
}

/// Errors raised while loading annotator configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for the config schema
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config parsed but its values are inconsistent
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
