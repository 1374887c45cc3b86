//! Fluidscale CLI: fluid type scale calculator

use anyhow::Result;
use clap::Parser;

use fluidscale_cli::cli::{Cli, Commands};
use fluidscale_cli::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match &cli.command {
        Commands::Calculate(args) => commands::calculate::run(args),
        Commands::Preview(args) => commands::preview::run(args),
        Commands::Ratios(args) => commands::ratios::run(args),
        Commands::Batch(args) => commands::batch::run(args, cli.quiet),
    }
}
