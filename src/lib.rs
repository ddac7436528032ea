//! Two-player tic-tac-toe core with score tracking and synthesized sound cues.
//!
//! # Architecture
//!
//! - **Engine**: a pure, synchronous state machine: board, turn order,
//!   win/draw detection, running scores, and round lifecycle.
//! - **Sound**: fixed tone-instruction tables keyed by game event, plus a
//!   dispatcher that hands them to an abstract scheduler backend.
//!
//! The UI collaborator drives the engine, forwards emitted events to the
//! sound player, and renders the engine's serializable snapshot. Nothing
//! here renders, persists, or talks to a network.
//!
//! # Example
//!
//! ```
//! use tictactoe_arcade::{GameEngine, GameEvent, Player};
//!
//! let mut engine = GameEngine::new();
//! // X takes the top row while O answers in the middle row.
//! for index in [0, 3, 1, 4, 2] {
//!     engine.apply_move(index);
//! }
//! assert_eq!(engine.winner(), Some(Player::X));
//! assert_eq!(engine.scores().wins(Player::X), 1);
//!
//! // Next round: the board clears, the scores stay.
//! assert_eq!(engine.reset(), GameEvent::Reset);
//! assert!(engine.active());
//! assert_eq!(engine.scores().wins(Player::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod sound;

// Crate-level exports - Engine
pub use engine::{
    line_indices, Board, GameEngine, GameEvent, GameStatus, Player, Position, Scoreboard, Square,
    WinLine,
};

// Crate-level exports - Invariants
pub use engine::invariants::{
    AlternatingTurnInvariant, EngineInvariants, Invariant, InvariantSet, InvariantViolation,
    TerminalExclusiveInvariant, WinningLineValidInvariant,
};

// Crate-level exports - Sound
pub use sound::{cue, ScheduleError, SoundEvent, SoundPlayer, Tone, ToneScheduler, Waveform};
