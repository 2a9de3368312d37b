//! Annotate command implementation

use anyhow::Result;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the annotate command
#[derive(Debug, Args)]
pub struct AnnotateArgs {
    /// Text to annotate; reads --input or stdin when omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Input file ("-" for stdin)
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,

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

impl AnnotateArgs {
    /// Execute the annotate command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose);

        let text = match &self.text {
            Some(text) => text.clone(),
            None => crate::input::read_text(self.input.as_deref())?,
        };
        let annotator = super::build_annotator(self.config.as_deref())?;
        let annotated = annotator.annotate(&text);

        let mut writer = super::open_output(self.output.as_deref())?;
        write!(writer, "{annotated}")?;
        if !annotated.ends_with('\n') {
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(())
    }
}
