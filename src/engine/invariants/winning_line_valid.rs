//! Winning line invariant: a recorded win line is canonical and complete.

use super::super::game::{GameEngine, GameStatus};
use super::super::rules::CANONICAL_LINES;
use super::super::types::Square;
use super::Invariant;

/// Invariant: if the round was won, the recorded line is one of the eight
/// canonical lines and all three of its squares hold the winner's mark.
pub struct WinningLineValidInvariant;

impl Invariant<GameEngine> for WinningLineValidInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let GameStatus::Won { winner, line } = engine.status() else {
            return true;
        };

        CANONICAL_LINES.contains(&line)
            && line
                .iter()
                .all(|pos| engine.board().get(*pos) == Square::Occupied(winner))
    }

    fn description() -> &'static str {
        "A recorded win line is canonical and fully held by the winner"
    }
}
