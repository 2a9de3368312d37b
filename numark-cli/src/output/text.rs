//! Plain text output formatter

use super::{AnnotatedRow, RowFormatter};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - one labeled block per row, separated by `---`
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> RowFormatter for TextFormatter<W> {
    fn write_header(&mut self, category: &str, position: (usize, usize)) -> Result<()> {
        let (index, count) = position;
        writeln!(self.writer, "Category {index} of {count}: {category}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_row(&mut self, row: &AnnotatedRow) -> Result<()> {
        writeln!(self.writer, "Ticker: {}", row.record.ticker)?;
        writeln!(self.writer, "Description: {}", row.description)?;
        writeln!(self.writer, "Categories: {}", row.record.categories)?;
        writeln!(self.writer, "Reason: {}", row.record.reason)?;
        writeln!(self.writer, "---")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
