//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::game::GameEngine;
use super::super::types::{Player, Square};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// X always moves first, so the marks on the board reconstruct the turn
/// order from the history: even history entries belong to X, odd ones to
/// O. While the round is in progress, `current_player` must agree with
/// the number of moves made.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        for (turn, pos) in engine.history().iter().enumerate() {
            let expected = if turn % 2 == 0 { Player::X } else { Player::O };
            if engine.board().get(*pos) != Square::Occupied(expected) {
                return false;
            }
        }

        if engine.active() {
            let expected_next = if engine.history().len() % 2 == 0 {
                Player::X
            } else {
                Player::O
            };
            return engine.current_player() == expected_next;
        }

        true
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
