//! HTML fragment output formatter
//!
//! Annotated descriptions already carry their highlight spans and are
//! passed through untouched; every other field is escaped.

use super::{AnnotatedRow, RowFormatter};
use anyhow::Result;
use std::io::Write;

/// HTML formatter - one `<div>` per row with a `<hr>` between rows
pub struct HtmlFormatter<W: Write> {
    writer: W,
}

impl<W: Write> HtmlFormatter<W> {
    /// Create a new HTML formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

/// Minimal escaping for text placed inside an HTML element
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

impl<W: Write> RowFormatter for HtmlFormatter<W> {
    fn write_header(&mut self, category: &str, position: (usize, usize)) -> Result<()> {
        let (index, count) = position;
        writeln!(
            self.writer,
            "<h2>Category {index} of {count}: {}</h2>",
            escape(category)
        )?;
        Ok(())
    }

    fn write_row(&mut self, row: &AnnotatedRow) -> Result<()> {
        writeln!(self.writer, "<div class=\"row\">")?;
        writeln!(
            self.writer,
            "  <p><strong>Ticker:</strong> {}</p>",
            escape(&row.record.ticker)
        )?;
        // the annotated description is trusted markup, not escaped
        writeln!(
            self.writer,
            "  <p><strong>Description:</strong> {}</p>",
            row.description
        )?;
        writeln!(
            self.writer,
            "  <p><strong>Categories:</strong> {}</p>",
            escape(&row.record.categories)
        )?;
        writeln!(
            self.writer,
            "  <p><strong>Reason:</strong> {}</p>",
            escape(&row.record.reason)
        )?;
        writeln!(self.writer, "</div>")?;
        writeln!(self.writer, "<hr>")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numark_core::Record;

    #[test]
    fn description_markup_passes_through_other_fields_escaped() {
        let record = Record {
            ticker: "A&B".to_string(),
            description: "raw".to_string(),
            categories: "Cat<1>".to_string(),
            reason: "why".to_string(),
        };
        let mut out = Vec::new();
        {
            let mut formatter = HtmlFormatter::new(&mut out);
            formatter.write_header("Cat<1>", (1, 1)).unwrap();
            formatter
                .write_row(&AnnotatedRow {
                    record: &record,
                    description:
                        "<span style=\"background-color: yellow; color: black;\">450</span>"
                            .to_string(),
                })
                .unwrap();
            formatter.finish().unwrap();
        }
        let html = String::from_utf8(out).unwrap();
        assert!(html.contains("<h2>Category 1 of 1: Cat&lt;1&gt;</h2>"));
        assert!(html.contains("A&amp;B"));
        assert!(html.contains("Cat&lt;1&gt;"));
        assert!(html.contains(
            "<span style=\"background-color: yellow; color: black;\">450</span>"
        ));
    }
}
