//! Command-line interface for strictly_hanoi_games.

use clap::{Parser, Subcommand};

/// Strictly Hanoi - Tower of Hanoi in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_hanoi_games")]
#[command(about = "Tower of Hanoi played with the mouse in a terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the puzzle in the terminal UI
    Play {
        /// Number of disks (4-8); overrides the config file
        #[arg(short, long)]
        disks: Option<u8>,

        /// Path to the config file (defaults are used if it does not exist)
        #[arg(short, long, default_value = "strictly_hanoi.toml")]
        config: std::path::PathBuf,
    },

    /// Print the starting layout as JSON
    Layout {
        /// Number of disks (4-8)
        #[arg(short, long, default_value = "4")]
        disks: u8,
    },

    /// Print the rules
    Instructions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_defaults() {
        let cli = Cli::parse_from(["strictly_hanoi_games", "play"]);
        match cli.command {
            Command::Play { disks, config } => {
                assert_eq!(disks, None);
                assert_eq!(config, std::path::PathBuf::from("strictly_hanoi.toml"));
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_layout_disks() {
        let cli = Cli::parse_from(["strictly_hanoi_games", "layout", "--disks", "6"]);
        assert!(matches!(cli.command, Command::Layout { disks: 6 }));
    }
}
