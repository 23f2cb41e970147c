//! Strictly Hanoi Games - Tower of Hanoi in the terminal
//!
//! This library wires the [`strictly_hanoi`] puzzle core to a mouse-driven
//! terminal front end.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **TUI**: ratatui canvas drawing, crossterm mouse capture, and the
//!   cell-to-pixel [`Viewport`] that feeds pointer events to the puzzle
//!
//! # Example
//!
//! ```no_run
//! use strictly_hanoi_games::{HanoiConfig, run_tui};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = HanoiConfig::load_or_default("strictly_hanoi.toml")?;
//! run_tui(&config)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, HanoiConfig};

// Crate-level exports - Terminal UI
pub use tui::{Action, App, Mode, Viewport, key_action, run_tui};
