//! Sound cues: map game events to parametrized tone sequences.

pub mod cue;
pub mod dispatcher;
pub mod event;

pub use cue::{cue, Tone, Waveform};
pub use dispatcher::{ScheduleError, SoundPlayer, ToneScheduler};
pub use event::SoundEvent;
