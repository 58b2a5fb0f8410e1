//! benchpress CLI - import Blockbench models from the command line

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "benchpress")]
#[command(about = "Blockbench .bbmodel importer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a .bbmodel file into an in-memory scene and report what was built
    Import {
        /// Path to the .bbmodel file
        path: String,

        /// Replay rotation keyframes after hierarchy resolution
        #[arg(long)]
        animations: bool,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Parse and validate a .bbmodel file, printing document statistics
    Info {
        /// Path to the .bbmodel file
        path: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Import {
            path,
            animations,
            format,
        } => commands::import::run(&path, animations, &format),
        Commands::Info { path } => commands::info::run(&path),
    }
}
