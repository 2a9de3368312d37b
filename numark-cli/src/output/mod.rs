//! Output formatting module

use anyhow::Result;
use numark_core::Record;

/// A dataset row paired with its annotated description
pub struct AnnotatedRow<'a> {
    /// The underlying record
    pub record: &'a Record,
    /// The description after annotation
    pub description: String,
}

/// Trait for row output formatters
pub trait RowFormatter {
    /// Emit the category header ("Category i of n")
    fn write_header(&mut self, category: &str, position: (usize, usize)) -> Result<()>;

    /// Format and output a single row
    fn write_row(&mut self, row: &AnnotatedRow) -> Result<()>;

    /// Finalize output (e.g., close the JSON document)
    fn finish(&mut self) -> Result<()>;
}

pub mod html;
pub mod json;
pub mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;
