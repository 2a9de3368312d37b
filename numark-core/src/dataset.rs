//! Typed access to the categorized filing dataset
//!
//! The source is a CSV file with at least the four named columns `Ticker`,
//! `Description`, `Categories`, and `Reason`; extra columns are ignored.
//! Fields may be quoted in the usual CSV way (embedded commas, newlines,
//! and doubled quotes). Rows are held in memory; per-category iteration is
//! a lazy borrow that can be restarted by filtering again.

use crate::error::DatasetError;
use std::path::Path;

/// One row of the dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Short identifier, the `Ticker` column
    pub ticker: String,
    /// Free text fed to the annotator, the `Description` column
    pub description: String,
    /// Grouping key, the `Categories` column
    pub categories: String,
    /// Free text displayed verbatim, the `Reason` column
    pub reason: String,
}

/// An in-memory dataset of [`Record`]s
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

/// Column names the header must contain
const REQUIRED_COLUMNS: [&str; 4] = ["Ticker", "Description", "Categories", "Reason"];

impl Dataset {
    /// Build a dataset from already-typed records
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Load a dataset from a CSV file
    pub fn load_csv(path: &Path) -> Result<Self, DatasetError> {
        let input = std::fs::read_to_string(path)?;
        Self::parse_csv(&input)
    }

    /// Parse a dataset from CSV text
    pub fn parse_csv(input: &str) -> Result<Self, DatasetError> {
        let input = input.strip_prefix('\u{feff}').unwrap_or(input);
        let mut rows = split_rows(input)?.into_iter();
        let header = rows.next().ok_or(DatasetError::Empty)?;

        let column = |name: &str| {
            header
                .fields
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
        };
        let ticker = column(REQUIRED_COLUMNS[0])?;
        let description = column(REQUIRED_COLUMNS[1])?;
        let categories = column(REQUIRED_COLUMNS[2])?;
        let reason = column(REQUIRED_COLUMNS[3])?;
        let expected = 1 + ticker.max(description).max(categories).max(reason);

        let mut records = Vec::new();
        for mut row in rows {
            // a blank line parses as one empty field
            if row.fields.len() == 1 && row.fields[0].is_empty() {
                continue;
            }
            if row.fields.len() < expected {
                return Err(DatasetError::RaggedRow {
                    line: row.line,
                    found: row.fields.len(),
                    expected,
                });
            }
            records.push(Record {
                ticker: std::mem::take(&mut row.fields[ticker]),
                description: std::mem::take(&mut row.fields[description]),
                categories: std::mem::take(&mut row.fields[categories]),
                reason: std::mem::take(&mut row.fields[reason]),
            });
        }
        Ok(Self { records })
    }

    /// All records in file order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unique category names in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.categories.as_str()) {
                seen.push(record.categories.as_str());
            }
        }
        seen
    }

    /// Records belonging to `category`, lazily, in file order
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Record> + 'a {
        self.records
            .iter()
            .filter(move |record| record.categories == category)
    }
}

struct Row {
    /// Line the row starts on (1-based)
    line: usize,
    fields: Vec<String>,
}

/// Split CSV text into rows of unquoted field values
fn split_rows(input: &str) -> Result<Vec<Row>, DatasetError> {
    let mut rows = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut chars = input.chars().peekable();
    let mut in_quotes = false;
    let mut line = 1;
    let mut row_line = 1;
    let mut quote_line = 1;

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
        } else {
            match c {
                '"' if field.is_empty() => {
                    in_quotes = true;
                    quote_line = line;
                }
                ',' => fields.push(std::mem::take(&mut field)),
                '\r' if chars.peek() == Some(&'\n') => {}
                '\n' => {
                    line += 1;
                    fields.push(std::mem::take(&mut field));
                    rows.push(Row {
                        line: row_line,
                        fields: std::mem::take(&mut fields),
                    });
                    row_line = line;
                }
                _ => field.push(c),
            }
        }
    }
    if in_quotes {
        return Err(DatasetError::UnterminatedQuote(quote_line));
    }
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        rows.push(Row {
            line: row_line,
            fields,
        });
    }
    Ok(rows)
}
