//! View command implementation

use crate::error::CliError;
use crate::output::{AnnotatedRow, HtmlFormatter, JsonFormatter, RowFormatter, TextFormatter};
use anyhow::Result;
use clap::Args;
use numark_core::{CategoryPager, Dataset};
use rayon::prelude::*;
use std::path::PathBuf;

/// Arguments for the view command
#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Dataset CSV file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Category to display, by name (default: the first category)
    #[arg(short, long, conflicts_with = "index")]
    pub category: Option<String>,

    /// Category to display, by 1-based position in the listing
    #[arg(long, value_name = "N")]
    pub index: Option<usize>,

    /// Signed offset applied after selection, wrapping around the listing
    #[arg(long, value_name = "N", default_value_t = 0, allow_hyphen_values = true)]
    pub step: i64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Annotator configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Labeled text blocks separated by `---`
    Text,
    /// HTML fragment, descriptions keep their highlight spans
    Html,
    /// One JSON document with category metadata and rows
    Json,
}

impl ViewArgs {
    /// Execute the view command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose);
        log::info!("Loading dataset from {}", self.input.display());

        let dataset = Dataset::load_csv(&self.input)?;
        let categories: Vec<String> = dataset
            .categories()
            .into_iter()
            .map(str::to_string)
            .collect();
        let mut pager = CategoryPager::new(categories);

        if let Some(name) = &self.category {
            if !pager.select(name) {
                return Err(CliError::UnknownCategory(name.clone()).into());
            }
        } else if let Some(index) = self.index {
            if index == 0 || index > pager.len() {
                return Err(CliError::IndexOutOfRange {
                    index,
                    count: pager.len(),
                }
                .into());
            }
            pager.set_index(index - 1);
        }
        pager.step(self.step);

        let current = pager
            .current()
            .map(str::to_string)
            .ok_or_else(|| CliError::EmptyDataset(self.input.display().to_string()))?;
        log::debug!("Selected category: {current}");

        let annotator = super::build_annotator(self.config.as_deref())?;
        let records: Vec<_> = dataset.in_category(&current).collect();
        // rows are independent, annotate them in parallel
        let rows: Vec<AnnotatedRow> = records
            .par_iter()
            .map(|&record| AnnotatedRow {
                record,
                description: annotator.annotate(&record.description),
            })
            .collect();

        let writer = super::open_output(self.output.as_deref())?;
        let mut formatter: Box<dyn RowFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Html => Box::new(HtmlFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };
        formatter.write_header(&current, pager.position())?;
        for row in &rows {
            formatter.write_row(row)?;
        }
        formatter.finish()?;

        log::info!("Rendered {} rows in category '{current}'", rows.len());
        Ok(())
    }
}
