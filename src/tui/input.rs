//! Keyboard handling.

use super::app::Mode;
use crossterm::event::KeyCode;
use strictly_hanoi::DiskCount;

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the game.
    Quit,
    /// Show or hide the rules.
    ToggleInstructions,
    /// Open the disk count chooser.
    ChooseDisks,
    /// Start over with this many disks.
    Restart(DiskCount),
    /// Close whatever overlay is open.
    Close,
    /// Nothing to do.
    None,
}

/// Maps a key to an action given the current mode.
pub fn key_action(mode: Mode, key: KeyCode) -> Action {
    match (mode, key) {
        (_, KeyCode::Char('q')) => Action::Quit,
        (Mode::ChooseDisks, KeyCode::Char(c)) => c
            .to_digit(10)
            .and_then(|d| DiskCount::new(d as u8).ok())
            .map_or(Action::None, Action::Restart),
        (Mode::ChooseDisks | Mode::Instructions, KeyCode::Esc) => Action::Close,
        (_, KeyCode::Char('i')) => Action::ToggleInstructions,
        (Mode::Playing, KeyCode::Char('r')) => Action::ChooseDisks,
        _ => Action::None,
    }
}
