//! CLI argument definitions for the Roster binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Roster list-state tool
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Roster: replay command logs against reducer-managed lists")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a JSON-Lines command log and print the final collection
    Replay(ReplayArgs),
}

/// Arguments for the replay command
#[derive(clap::Args, Debug)]
pub struct ReplayArgs {
    /// Command log to replay, one JSON command per line ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// Record member that identifies an item
    #[arg(short, long, default_value = "id", env = "ROSTER_KEY")]
    pub key: String,

    /// JSON file holding the initial collection (defaults to empty)
    #[arg(long, env = "ROSTER_INITIAL")]
    pub initial: Option<PathBuf>,

    /// Logical list name, used in diagnostics
    #[arg(short, long, default_value = "default", env = "ROSTER_LIST")]
    pub list: String,

    /// Pretty-print the final collection
    #[arg(long)]
    pub pretty: bool,
}
