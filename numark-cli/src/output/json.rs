//! JSON output formatter

use super::{AnnotatedRow, RowFormatter};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - one document with the category header and all rows
pub struct JsonFormatter<W: Write> {
    writer: W,
    category: String,
    position: (usize, usize),
    rows: Vec<serde_json::Value>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            category: String::new(),
            position: (0, 0),
            rows: Vec::new(),
        }
    }
}

impl<W: Write> RowFormatter for JsonFormatter<W> {
    fn write_header(&mut self, category: &str, position: (usize, usize)) -> Result<()> {
        self.category = category.to_string();
        self.position = position;
        Ok(())
    }

    fn write_row(&mut self, row: &AnnotatedRow) -> Result<()> {
        self.rows.push(serde_json::json!({
            "Ticker": row.record.ticker,
            "Description": row.description,
            "Categories": row.record.categories,
            "Reason": row.record.reason,
        }));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let document = serde_json::json!({
            "category": self.category,
            "position": self.position.0,
            "count": self.position.1,
            "rows": self.rows,
        });
        serde_json::to_writer_pretty(&mut self.writer, &document)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
