//! Application state and key handling.

use crate::config::{HistoryOrder, TuiConfig};
use crate::input::{digit_to_position, move_cursor};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rewind_tictactoe::{GameView, Position, StepEntry, TimeTravelGame};
use tracing::{debug, instrument, warn};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
///
/// The game itself is an immutable value; every command replaces it.
#[derive(Debug, Clone)]
pub struct App {
    game: TimeTravelGame,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    history_order: HistoryOrder,
    show_cell_numbers: bool,
    should_quit: bool,
}

impl App {
    /// Creates the application around an initial game.
    pub fn new(game: TimeTravelGame, config: &TuiConfig) -> Self {
        Self {
            selected_step: game.step(),
            game,
            cursor: Position::Center,
            focus: Focus::default(),
            history_order: *config.history_order(),
            show_cell_numbers: *config.show_cell_numbers(),
            should_quit: false,
        }
    }

    /// Current game.
    pub fn game(&self) -> &TimeTravelGame {
        &self.game
    }

    /// View model of the current game.
    pub fn view(&self) -> GameView {
        GameView::new(&self.game)
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Step highlighted in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Order of the move list.
    pub fn history_order(&self) -> HistoryOrder {
        self.history_order
    }

    /// Whether empty cells show their number.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Move list entries in display order.
    pub fn visible_steps(&self) -> Vec<StepEntry> {
        let mut steps = self.view().steps;
        if self.history_order == HistoryOrder::Descending {
            steps.reverse();
        }
        steps
    }

    /// Dispatches a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.focus = self.focus.toggle(),
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('o') => self.history_order = self.history_order.toggle(),
            KeyCode::Char('u') | KeyCode::Backspace => self.step_back(),
            KeyCode::Char('r') => self.step_forward(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_to_position(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let last = self.game.len() - 1;
        let (older, newer) = match self.history_order {
            HistoryOrder::Ascending => (KeyCode::Up, KeyCode::Down),
            HistoryOrder::Descending => (KeyCode::Down, KeyCode::Up),
        };
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.selected_step),
            c if c == older => self.selected_step = self.selected_step.saturating_sub(1),
            c if c == newer => self.selected_step = (self.selected_step + 1).min(last),
            _ => {}
        }
    }

    /// Attempts a move at `pos`; ignored moves leave the game as is.
    pub fn play(&mut self, pos: Position) {
        self.game = self.game.attempt_move(pos);
        self.selected_step = self.game.step();
    }

    /// Shows the snapshot at `step`.
    pub fn jump(&mut self, step: usize) {
        match self.game.jump_to(step) {
            Ok(game) => {
                self.game = game;
                self.selected_step = step;
            }
            Err(e) => warn!(error = %e, "Jump rejected"),
        }
    }

    /// Shows the previous snapshot, if any.
    pub fn step_back(&mut self) {
        if let Some(step) = self.game.step().checked_sub(1) {
            self.jump(step);
        }
    }

    /// Shows the next snapshot, if any.
    pub fn step_forward(&mut self) {
        if !self.game.is_latest() {
            self.jump(self.game.step() + 1);
        }
    }

    /// Discards the whole history.
    pub fn new_game(&mut self) {
        debug!("Starting new game");
        self.game = TimeTravelGame::new();
        self.selected_step = 0;
        self.cursor = Position::Center;
    }
}
