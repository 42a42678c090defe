use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

mod cli;
mod commands;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("roster=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Replay(args) => commands::replay::run(&args),
    }
}
