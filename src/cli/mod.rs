pub mod status;
pub mod update;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "kapitel",
    about = "Batch front-matter updater for numbered chapter files",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a chapter manifest file (defaults to chapters.toml, then the built-in list)
    #[arg(short, long, global = true)]
    pub chapters: Option<String>,

    /// Directory containing the chapter folders
    #[arg(short, long, global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Apply front matter to every chapter in the manifest
    Update(update::UpdateArgs),

    /// Report the conversion state of every chapter
    Status,
}
