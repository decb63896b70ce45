use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kapitel::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Change working directory if --dir is specified
    if let Some(ref dir) = cli.dir {
        std::env::set_current_dir(dir)?;
    }

    match &cli.command {
        Command::Update(args) => kapitel::cli::update::run(args, cli.json, cli.chapters.as_deref())?,
        Command::Status => kapitel::cli::status::run(cli.json, cli.chapters.as_deref())?,
    }

    Ok(())
}
