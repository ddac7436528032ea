//! Sound events: triggers for the cue tables.

use crate::engine::GameEvent;
use serde::{Deserialize, Serialize};

/// A discrete event with an associated sound cue.
///
/// Engine events map onto a subset of these; `Click` and `Hover`
/// originate in the UI collaborator and never come from the engine.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SoundEvent {
    /// A button was pressed.
    Click,
    /// The pointer entered an interactive element.
    Hover,
    /// A mark was placed.
    Move,
    /// A round was won.
    Win,
    /// A round ended in a draw.
    Draw,
    /// A game started.
    Start,
    /// A round was reset.
    Reset,
}

impl From<GameEvent> for SoundEvent {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::Move => SoundEvent::Move,
            GameEvent::Win => SoundEvent::Win,
            GameEvent::Draw => SoundEvent::Draw,
            GameEvent::Reset => SoundEvent::Reset,
            GameEvent::Start => SoundEvent::Start,
        }
    }
}
