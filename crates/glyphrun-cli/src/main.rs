//! glyphrun CLI - Draw, measure and inspect glyph runs from the command line

mod cli;
mod commands;
mod face;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match &cli.command {
        Commands::Draw(args) => commands::draw::run(args),
        Commands::Measure(args) => commands::measure::run(args),
        Commands::Info(args) => commands::info::run(args),
    }
}
