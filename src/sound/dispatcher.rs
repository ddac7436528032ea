//! Sound dispatch: event in, scheduled tones out.

use super::cue::{cue, Tone};
use super::event::SoundEvent;
use tracing::{debug, instrument, warn};

/// Error raised by a tone scheduler.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ScheduleError {
    /// The output backend is not available.
    #[display("Audio backend unavailable")]
    Unavailable,
    /// The backend reported a failure.
    #[display("Audio backend error: {}", _0)]
    Backend(String),
}

impl std::error::Error for ScheduleError {}

/// Abstract output backend for tone playback.
///
/// Implementations own the timer facility that realizes each tone's
/// `delay_ms`; scheduling is fire-and-forget and is never awaited or
/// cancelled.
pub trait ToneScheduler {
    /// Wakes the backend if it is suspended. Called once per dispatch,
    /// before any tone is scheduled.
    fn resume_if_suspended(&mut self) -> Result<(), ScheduleError>;

    /// Schedules one tone for playback at its delay offset.
    fn schedule(&mut self, tone: Tone) -> Result<(), ScheduleError>;
}

/// Dispatches sound events to a [`ToneScheduler`], honoring a mute flag.
///
/// The mute flag lives here rather than in ambient global state; the UI
/// collaborator holds the player (or a handle to it) and calls
/// [`toggle_sound`] / [`is_sound_enabled`] directly.
///
/// Sound is best-effort and cosmetic: scheduler failures are caught at
/// this boundary, logged, and dropped. They never propagate to the
/// caller, and the game stays fully functional without audio.
///
/// [`toggle_sound`]: SoundPlayer::toggle_sound
/// [`is_sound_enabled`]: SoundPlayer::is_sound_enabled
#[derive(Debug)]
pub struct SoundPlayer<S> {
    scheduler: S,
    enabled: bool,
}

impl<S: ToneScheduler> SoundPlayer<S> {
    /// Creates a player over the given backend. Sound starts enabled.
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            enabled: true,
        }
    }

    /// Plays the cue for the given event.
    ///
    /// Schedules zero tones when muted. Backend failures degrade to a
    /// no-op: the resume step aborts the whole cue, a failed tone is
    /// dropped individually.
    #[instrument(skip(self))]
    pub fn play_sound(&mut self, event: SoundEvent) {
        if !self.enabled {
            return;
        }

        if let Err(error) = self.scheduler.resume_if_suspended() {
            warn!(%error, "audio backend could not resume");
            return;
        }

        for tone in cue(event) {
            if let Err(error) = self.scheduler.schedule(*tone) {
                warn!(%error, frequency_hz = tone.frequency_hz, "tone dropped");
            }
        }
        debug!(%event, tones = cue(event).len(), "cue dispatched");
    }

    /// Flips the mute flag and returns the new value.
    pub fn toggle_sound(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Whether sound is currently enabled.
    pub fn is_sound_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the underlying scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}
