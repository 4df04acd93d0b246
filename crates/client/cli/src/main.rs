//! Headless runner for Hollows levels.
//!
//! Loads a level from the content data directory, drives it with an input
//! script (or an idle player) and prints what the enemies did.
//! Run with: `hollows run --level corridor --script <file.ron>`

mod commands;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Check, Run};

/// Headless runner for Hollows levels
#[derive(Parser, Debug)]
#[command(name = "hollows")]
#[command(about = "Run and validate Hollows levels without a renderer", long_about = None)]
#[command(version)]
struct Cli {
    /// Also write logs to this directory
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Write logs to the platform cache directory
    #[arg(long, global = true, conflicts_with = "log_dir")]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Simulate a level frame by frame
    Run(Run),

    /// Load and validate content without simulating
    Check(Check),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for HOLLOWS_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_dir = match (cli.log_dir, cli.log_file) {
        (Some(dir), _) => Some(dir),
        (None, true) => Some(logging::default_log_dir()),
        (None, false) => None,
    };
    // Dropping the guard flushes the file writer, so hold it until exit.
    let _guard = logging::setup_logging(log_dir.as_deref())?;

    match cli.command {
        Command::Run(cmd) => cmd.execute(),
        Command::Check(cmd) => cmd.execute(),
    }
}
