//! Snapshot chain invariant: each step fills exactly one empty square.

use super::Invariant;
use crate::{Board, Square, TimeTravelGame};

/// Invariant: the history starts from the empty board and every later
/// snapshot differs from its predecessor in exactly one square, which
/// went from empty to occupied.
pub struct SingleCellTransitionsInvariant;

impl Invariant<TimeTravelGame> for SingleCellTransitionsInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        let Some(first) = game.history.first() else {
            return false;
        };
        if **first != Board::new() {
            return false;
        }

        game.history.windows(2).all(|pair| {
            let changed = pair[0].diff(&pair[1]);
            changed.len() == 1
                && pair[0].get(changed[0]) == Square::Empty
                && pair[1].get(changed[0]) != Square::Empty
        })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one empty square of the previous one"
    }
}
