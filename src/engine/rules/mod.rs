//! Game rules.
//!
//! Pure functions for evaluating board state. Rules are separated from
//! board storage so they can be exercised independently of the engine.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, CANONICAL_LINES};
