//! Application state and logic.

use super::input::{Action, key_action};
use super::viewport::Viewport;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use strictly_hanoi::{
    Clock, DiskCount, LayoutConfig, PointerInput, Puzzle, PuzzleError, SystemClock,
};
use tracing::{debug, info, instrument};

/// Which screen has the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The board takes mouse input.
    Playing,
    /// The rules are shown over the board.
    Instructions,
    /// The disk count chooser is shown over the board.
    ChooseDisks,
}

/// Main application state.
#[derive(Debug)]
pub struct App<C: Clock = SystemClock> {
    puzzle: Puzzle<C>,
    mode: Mode,
    viewport: Option<Viewport>,
    should_quit: bool,
}

impl App<SystemClock> {
    /// Creates a new application.
    pub fn new(disk_count: DiskCount) -> Self {
        Self::with_puzzle(Puzzle::new(disk_count))
    }
}

impl<C: Clock> App<C> {
    /// Wraps an existing puzzle.
    pub fn with_puzzle(puzzle: Puzzle<C>) -> Self {
        Self {
            puzzle,
            mode: Mode::Playing,
            viewport: None,
            should_quit: false,
        }
    }

    /// The puzzle being played.
    pub fn puzzle(&self) -> &Puzzle<C> {
        &self.puzzle
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns true once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Layout constants of the puzzle.
    pub fn layout_config(&self) -> &LayoutConfig {
        self.puzzle.config()
    }

    /// Remembers where the board was last drawn.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }

    /// Applies a key press.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key_action(self.mode, key) {
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::ToggleInstructions => {
                self.mode = match self.mode {
                    Mode::Instructions => Mode::Playing,
                    Mode::Playing | Mode::ChooseDisks => Mode::Instructions,
                };
            }
            Action::ChooseDisks => self.mode = Mode::ChooseDisks,
            Action::Restart(count) => {
                info!(disks = count.get(), "Number of disks selected");
                self.puzzle.new_game(count);
                self.mode = Mode::Playing;
            }
            Action::Close => self.mode = Mode::Playing,
            Action::None => {}
        }
    }

    /// Forwards left-button mouse traffic to the puzzle.
    ///
    /// Ignored until the board has been drawn once, and while an overlay is
    /// open. A release is always forwarded so a lifted disk is never stranded.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Result<(), PuzzleError> {
        let Some(viewport) = self.viewport else {
            return Ok(());
        };
        let at = viewport.to_pixel(event.column, event.row);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) if self.mode == Mode::Playing => {
                let outcome = self.puzzle.on_pointer_down(at)?;
                debug!(?outcome, "Press handled");
            }
            MouseEventKind::Drag(MouseButton::Left) => self.puzzle.on_pointer_drag(at),
            MouseEventKind::Up(MouseButton::Left) => {
                let outcome = self.puzzle.on_pointer_up(at)?;
                debug!(?outcome, "Release handled");
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;
    use strictly_hanoi::{ManualClock, PegId};

    fn app() -> App<ManualClock> {
        let puzzle = Puzzle::with_clock(
            DiskCount::default(),
            LayoutConfig::default(),
            ManualClock::new(),
        );
        let mut app = App::with_puzzle(puzzle);
        // One cell per 10x10 pixels.
        app.set_viewport(Viewport::new(Rect::new(0, 0, 60, 30), 600, 300));
        app
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_mouse_moves_disk() {
        let mut app = app();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 9, 20))
            .unwrap();
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 30, 5))
            .unwrap();
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 49, 20))
            .unwrap();

        let state = app.puzzle().state();
        assert_eq!(state.peg(PegId::X).size(), 3);
        assert_eq!(state.peg(PegId::Z).size(), 1);
    }

    #[test]
    fn test_mouse_ignored_without_viewport() {
        let mut app = App::with_puzzle(Puzzle::with_clock(
            DiskCount::default(),
            LayoutConfig::default(),
            ManualClock::new(),
        ));
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 9, 20))
            .unwrap();
        assert_eq!(app.puzzle().state().held(), None);
    }

    #[test]
    fn test_press_ignored_under_overlay() {
        let mut app = app();
        app.handle_key(KeyCode::Char('i'));
        assert_eq!(app.mode(), Mode::Instructions);
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 9, 20))
            .unwrap();
        assert_eq!(app.puzzle().state().held(), None);
    }

    #[test]
    fn test_restart_replaces_game() {
        let mut app = app();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 9, 20))
            .unwrap();
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 49, 20))
            .unwrap();

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.mode(), Mode::ChooseDisks);
        app.handle_key(KeyCode::Char('7'));
        assert_eq!(app.mode(), Mode::Playing);
        assert_eq!(app.puzzle().state().disk_count().get(), 7);
        assert_eq!(app.puzzle().state().peg(PegId::X).size(), 7);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
