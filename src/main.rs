//! Strictly Hanoi Games - Unified CLI
//!
//! Tower of Hanoi with several modes of operation.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_hanoi::{DiskCount, INSTRUCTIONS, Puzzle};
use strictly_hanoi_games::{Cli, Command, HanoiConfig, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play { disks, config } => {
            let config = HanoiConfig::load_or_default(&config)?.with_disk_count(disks)?;
            run_tui(&config)
        }
        Command::Layout { disks } => print_layout(disks),
        Command::Instructions => {
            println!("{}", INSTRUCTIONS);
            Ok(())
        }
    }
}

/// Print the starting layout for a tower height
fn print_layout(disks: u8) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let count = DiskCount::new(disks)?;
    info!(disks, "Computing layout");
    let layout = Puzzle::new(count).current_layout();
    println!("{}", serde_json::to_string_pretty(&layout)?);
    Ok(())
}
