//! CLI subcommands

pub mod annotate;
pub mod categories;
pub mod view;

pub use annotate::AnnotateArgs;
pub use categories::CategoriesArgs;
pub use view::ViewArgs;

use anyhow::{Context, Result};
use numark_core::{Annotator, AnnotatorConfig};
use std::io::Write;
use std::path::Path;

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    if !quiet {
        // try_init: the logger may already be set when commands run in-process
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}

/// Build an annotator, optionally from a TOML config file
pub(crate) fn build_annotator(config: Option<&Path>) -> Result<Annotator> {
    match config {
        Some(path) => {
            let config = AnnotatorConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            Ok(Annotator::with_config(config))
        }
        None => Ok(Annotator::new()),
    }
}

/// Open the output sink: a file, or stdout when no path is given
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}
