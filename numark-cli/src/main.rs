//! Command-line entry point for the numark viewer

use clap::{Parser, Subcommand};
use numark_cli::commands::{AnnotateArgs, CategoriesArgs, ViewArgs};

#[derive(Debug, Parser)]
#[command(
    name = "numark",
    version,
    about = "Categorized filing viewer with number highlighting"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render the rows of one category with annotated descriptions
    View(ViewArgs),
    /// Annotate free text and print the result
    Annotate(AnnotateArgs),
    /// List the categories present in a dataset
    Categories(CategoriesArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::View(args) => args.execute(),
        Commands::Annotate(args) => args.execute(),
        Commands::Categories(args) => args.execute(),
    }
}
