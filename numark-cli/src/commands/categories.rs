//! Categories command implementation

use anyhow::Result;
use clap::Args;
use numark_core::Dataset;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the categories command
#[derive(Debug, Args)]
pub struct CategoriesArgs {
    /// Dataset CSV file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CategoriesArgs {
    /// Execute the categories command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose);
        log::info!("Listing categories from {}", self.input.display());

        let dataset = Dataset::load_csv(&self.input)?;
        let mut writer = super::open_output(self.output.as_deref())?;
        for (position, category) in dataset.categories().iter().enumerate() {
            let count = dataset.in_category(category).count();
            writeln!(writer, "{}. {} ({} rows)", position + 1, category, count)?;
        }
        writer.flush()?;
        Ok(())
    }
}
