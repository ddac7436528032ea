//! Terminal exclusivity invariant: exactly one phase holds at a time.

use super::super::game::{GameEngine, GameStatus};
use super::super::rules::{check_winner, is_full};
use super::Invariant;

/// Invariant: exactly one of {winner set, board full with no winner,
/// round active} holds, and the recorded status agrees with the board.
pub struct TerminalExclusiveInvariant;

impl Invariant<GameEngine> for TerminalExclusiveInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        match engine.status() {
            GameStatus::InProgress => check_winner(board).is_none() && !is_full(board),
            GameStatus::Won { winner, .. } => {
                matches!(check_winner(board), Some((found, _)) if found == winner)
            }
            GameStatus::Draw => is_full(board) && check_winner(board).is_none(),
        }
    }

    fn description() -> &'static str {
        "Exactly one of won, drawn, or active holds, consistent with the board"
    }
}
