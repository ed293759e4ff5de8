//! Pure view model for front ends.
//!
//! Rendering is a function of the game value: front ends build a
//! [`GameView`] after each command and draw it, feeding user input back
//! through [`TimeTravelGame::attempt_move`] and [`TimeTravelGame::jump_to`].

use super::action::Move;
use super::game::TimeTravelGame;
use super::rules::winning_line;
use super::{Board, Position, Square};
use tracing::instrument;

/// One cell as a front end should draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Which cell this is.
    pub position: Position,
    /// Its contents.
    pub square: Square,
    /// True when the cell is part of the winning line.
    pub in_winning_line: bool,
}

/// One entry of the jump-to-step list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEntry {
    /// Step this entry jumps to.
    pub step: usize,
    /// True for the step currently shown.
    pub is_current: bool,
    /// Move that produced this step (`None` for step 0).
    pub played: Option<Move>,
}

impl StepEntry {
    /// `game start` for step 0, `move #n` otherwise.
    pub fn label(&self) -> String {
        step_label(self.step)
    }
}

/// Label of a step in the move list.
pub fn step_label(step: usize) -> String {
    if step == 0 {
        "game start".to_string()
    } else {
        format!("move #{}", step)
    }
}

/// Labels for every step in the history, oldest first.
pub fn step_labels(game: &TimeTravelGame) -> Vec<String> {
    (0..game.len()).map(step_label).collect()
}

/// Board at `step`, defaulting to the step currently shown.
pub fn board_at(game: &TimeTravelGame, step: Option<usize>) -> Option<&Board> {
    game.board_at(step.unwrap_or(game.step()))
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    /// Cells in row-major order.
    pub cells: [CellView; 9],
    /// `Winner: X`, `Next player: O` or `Draw: no winner`.
    pub status_text: String,
    /// Jump targets, oldest first.
    pub steps: Vec<StepEntry>,
}

impl GameView {
    /// Builds the view of the step currently shown.
    #[instrument(skip(game), fields(step = game.step(), len = game.len()))]
    pub fn new(game: &TimeTravelGame) -> Self {
        let board = game.current();
        let line = winning_line(board);

        let cells = Position::ALL.map(|position| CellView {
            position,
            square: board.get(position),
            in_winning_line: line.is_some_and(|l| l.contains(&position)),
        });

        let steps = (0..game.len())
            .map(|step| StepEntry {
                step,
                is_current: step == game.step(),
                played: game.move_at(step),
            })
            .collect();

        Self {
            cells,
            status_text: game.status().to_string(),
            steps,
        }
    }
}

impl From<&TimeTravelGame> for GameView {
    fn from(game: &TimeTravelGame) -> Self {
        Self::new(game)
    }
}
