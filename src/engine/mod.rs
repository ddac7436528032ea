//! Game engine: board, turn order, result detection, and scores.

pub mod game;
pub mod invariants;
pub mod position;
pub mod rules;
pub mod types;

pub use game::{GameEngine, GameEvent, GameStatus};
pub use position::{line_indices, Position, WinLine};
pub use types::{Board, Player, Scoreboard, Square};
