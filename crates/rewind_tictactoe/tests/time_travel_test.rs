//! Tests for history bookkeeping and time travel.

use rewind_tictactoe::{
    GameStatus, HistoryInvariants, InvariantSet, JumpError, Player, Position, Square,
    TimeTravelGame,
};
use std::sync::Arc;

/// Every legal move sequence of up to `depth` plies, as games.
fn all_games(depth: usize) -> Vec<TimeTravelGame> {
    let mut out = vec![TimeTravelGame::new()];
    let mut frontier = vec![TimeTravelGame::new()];
    for _ in 0..depth {
        let mut next = Vec::new();
        for game in &frontier {
            if game.status().is_over() {
                continue;
            }
            for pos in Position::valid_moves(game.current()) {
                next.push(game.attempt_move(pos));
            }
        }
        out.extend(next.iter().cloned());
        frontier = next;
    }
    out
}

#[test]
fn test_occupied_square_is_ignored() {
    for game in all_games(4) {
        for pos in Position::ALL {
            if game.current().is_empty(pos) {
                continue;
            }
            let after = game.attempt_move(pos);
            assert_eq!(after.len(), game.len());
            assert_eq!(after.step(), game.step());
            assert_eq!(after, game);
        }
    }
}

#[test]
fn test_successful_move_appends_one_snapshot() {
    for game in all_games(3) {
        let p = game.step();
        for pos in Position::valid_moves(game.current()) {
            let after = game.attempt_move(pos);
            assert_eq!(after.len(), p + 2);
            assert_eq!(after.step(), p + 1);
            assert_eq!(
                game.current().diff(after.current()),
                vec![pos],
                "only the played square changes"
            );
            assert_eq!(
                after.current().get(pos),
                Square::Occupied(Player::for_step(p))
            );
            assert!(HistoryInvariants::check_all(&after).is_ok());
        }
    }
}

#[test]
fn test_move_after_win_is_ignored() {
    // X takes the top row.
    let won = TimeTravelGame::replay_indices(&[0, 3, 1, 4, 2]).unwrap();
    assert_eq!(won.status(), GameStatus::Won(Player::X));

    for pos in Position::ALL {
        let after = won.attempt_move(pos);
        assert_eq!(after.len(), won.len());
        assert_eq!(after.step(), won.step());
    }
}

#[test]
fn test_jump_then_move_truncates_future() {
    let game = TimeTravelGame::replay_indices(&[0, 1, 2, 4, 5]).unwrap();
    assert_eq!(game.len(), 6);

    for s in 0..game.len() {
        let jumped = game.jump_to(s).unwrap();
        assert_eq!(jumped.len(), 6, "jumping keeps history");

        let pos = Position::valid_moves(jumped.current())[0];
        let branched = jumped.attempt_move(pos);
        assert_eq!(branched.len(), s + 2);
        assert_eq!(branched.step(), s + 1);
        for kept in 0..=s {
            assert!(Arc::ptr_eq(
                &branched.history()[kept],
                &game.history()[kept]
            ));
        }
        assert_eq!(
            branched.current().get(pos),
            Square::Occupied(Player::for_step(s))
        );
    }
}

#[test]
fn test_jump_round_trip_restores_snapshot() {
    let game = TimeTravelGame::replay_indices(&[4, 0, 8, 2]).unwrap();
    let original = game.current_snapshot().clone();

    for s in 0..game.len() {
        let back = game
            .jump_to(s)
            .unwrap()
            .jump_to(game.step())
            .unwrap();
        assert_eq!(back, game);
        assert!(Arc::ptr_eq(back.current_snapshot(), &original));
    }
}

#[test]
fn test_jump_out_of_range_leaves_game_usable() {
    let game = TimeTravelGame::replay_indices(&[4]).unwrap();
    assert_eq!(
        game.jump_to(5).unwrap_err(),
        JumpError::OutOfRange { step: 5, len: 2 }
    );
    assert_eq!(game.step(), 1);
    assert_eq!(game.jump_to(0).unwrap().step(), 0);
}

#[test]
fn test_diagonal_win_scenario() {
    let game = TimeTravelGame::new().attempt_move_index(0);
    assert_eq!(game.current().get(Position::TopLeft), Square::Occupied(Player::X));

    let game = game.attempt_move_index(0);
    assert_eq!(game.len(), 2, "second click on the same cell is ignored");
    assert_eq!(game.current().occupied_count(), 1);

    let game = game.attempt_move_index(1);
    assert_eq!(game.current().get(Position::TopCenter), Square::Occupied(Player::O));

    let game = game
        .attempt_move_index(2)
        .attempt_move_index(4)
        .attempt_move_index(7);
    assert_eq!(game.current().get(Position::TopRight), Square::Occupied(Player::X));
    assert_eq!(game.current().get(Position::Center), Square::Occupied(Player::O));
    assert_eq!(game.current().get(Position::BottomCenter), Square::Occupied(Player::X));
    assert_eq!(game.status(), GameStatus::InProgress { to_move: Player::O });

    // With O on the center the 0-4-8 diagonal is out of reach, so O's reply at 8 wins nothing.
    let game = game.attempt_move_index(8);
    assert_eq!(game.current().get(Position::BottomRight), Square::Occupied(Player::O));
    assert_eq!(game.status(), GameStatus::InProgress { to_move: Player::X });

    let x_diagonal = TimeTravelGame::replay_indices(&[0, 1, 4, 2, 8]).unwrap();
    assert_eq!(x_diagonal.status(), GameStatus::Won(Player::X));
    assert_eq!(x_diagonal.status().to_string(), "Winner: X");
}

#[test]
fn test_jump_to_start_scenario() {
    let game = TimeTravelGame::replay_indices(&[0, 4, 8]).unwrap();
    assert_eq!(game.len(), 4);

    let at_start = game.jump_to(0).unwrap();
    assert!(at_start.current().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(at_start.len(), 4);
    assert_eq!(at_start.status().to_string(), "Next player: X");

    let branched = at_start.attempt_move(Position::BottomLeft);
    assert_eq!(branched.len(), 2);
    assert_eq!(branched.current().occupied_count(), 1);
}

#[test]
fn test_full_board_without_winner_is_draw() {
    // X O X / X O O / O X X
    let game = TimeTravelGame::replay_indices(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status().to_string(), "Draw: no winner");

    for pos in Position::ALL {
        assert_eq!(game.attempt_move(pos), game);
    }
}
