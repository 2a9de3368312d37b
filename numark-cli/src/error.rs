//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// The dataset loaded but holds no rows
    EmptyDataset(String),
    /// The requested category is not in the dataset
    UnknownCategory(String),
    /// A 1-based category position outside the listing
    IndexOutOfRange {
        /// Requested 1-based position
        index: usize,
        /// Number of categories present
        count: usize,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::EmptyDataset(path) => write!(f, "Dataset has no rows: {path}"),
            CliError::UnknownCategory(name) => write!(f, "Unknown category: {name}"),
            CliError::IndexOutOfRange { index, count } => {
                write!(f, "Category index {index} out of range (1..={count})")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
