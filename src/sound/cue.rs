//! Tone instruction tables: one fixed cue per sound event.
//!
//! Cues are pure data. Each tone carries a delay relative to dispatch
//! time; realizing the delays is the output backend's job, so cues can
//! be inspected in tests without real time passing.

use super::event::SoundEvent;
use serde::{Deserialize, Serialize};

/// Waveform shape of a tone. A timbre parameter only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    /// Pure sine.
    Sine,
    /// Square wave.
    Square,
    /// Triangle wave.
    Triangle,
}

/// One scheduled audio cue: play `frequency_hz` for `duration_secs` with
/// the given waveform, starting `delay_ms` after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    /// Frequency in hertz.
    pub frequency_hz: f32,
    /// Duration in seconds.
    pub duration_secs: f32,
    /// Waveform shape.
    pub waveform: Waveform,
    /// Offset from dispatch time in milliseconds.
    pub delay_ms: u32,
}

impl Tone {
    /// Creates a tone instruction.
    pub const fn new(
        frequency_hz: f32,
        duration_secs: f32,
        waveform: Waveform,
        delay_ms: u32,
    ) -> Self {
        Self {
            frequency_hz,
            duration_secs,
            waveform,
            delay_ms,
        }
    }
}

const CLICK: [Tone; 1] = [Tone::new(800.0, 0.10, Waveform::Square, 0)];

const HOVER: [Tone; 1] = [Tone::new(400.0, 0.05, Waveform::Sine, 0)];

// Pleasant click with a harmonic overtone.
const MOVE: [Tone; 2] = [
    Tone::new(600.0, 0.15, Waveform::Sine, 0),
    Tone::new(800.0, 0.10, Waveform::Sine, 50),
];

// Victory fanfare: C5, E5, G5, C6.
const WIN: [Tone; 4] = [
    Tone::new(523.0, 0.3, Waveform::Triangle, 0),
    Tone::new(659.0, 0.3, Waveform::Triangle, 150),
    Tone::new(784.0, 0.3, Waveform::Triangle, 300),
    Tone::new(1047.0, 0.3, Waveform::Triangle, 450),
];

// Neutral descending ending.
const DRAW: [Tone; 2] = [
    Tone::new(400.0, 0.5, Waveform::Sine, 0),
    Tone::new(300.0, 0.5, Waveform::Sine, 200),
];

// Ascending start chime.
const START: [Tone; 3] = [
    Tone::new(400.0, 0.2, Waveform::Triangle, 0),
    Tone::new(500.0, 0.2, Waveform::Triangle, 100),
    Tone::new(600.0, 0.3, Waveform::Triangle, 200),
];

const RESET: [Tone; 2] = [
    Tone::new(300.0, 0.1, Waveform::Square, 0),
    Tone::new(200.0, 0.1, Waveform::Square, 50),
];

/// Returns the fixed tone sequence for the given event.
pub fn cue(event: SoundEvent) -> &'static [Tone] {
    match event {
        SoundEvent::Click => &CLICK,
        SoundEvent::Hover => &HOVER,
        SoundEvent::Move => &MOVE,
        SoundEvent::Win => &WIN,
        SoundEvent::Draw => &DRAW,
        SoundEvent::Start => &START,
        SoundEvent::Reset => &RESET,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_event_has_a_cue() {
        for event in SoundEvent::iter() {
            assert!(!cue(event).is_empty(), "no cue for {event}");
        }
    }

    #[test]
    fn test_win_fanfare() {
        let tones = cue(SoundEvent::Win);
        assert_eq!(tones.len(), 4);
        let freqs: Vec<f32> = tones.iter().map(|t| t.frequency_hz).collect();
        assert_eq!(freqs, vec![523.0, 659.0, 784.0, 1047.0]);
        let delays: Vec<u32> = tones.iter().map(|t| t.delay_ms).collect();
        assert_eq!(delays, vec![0, 150, 300, 450]);
        assert!(tones.iter().all(|t| t.waveform == Waveform::Triangle));
        assert!(tones.iter().all(|t| t.duration_secs == 0.3));
    }

    #[test]
    fn test_move_harmonic() {
        let tones = cue(SoundEvent::Move);
        assert_eq!(
            tones,
            &[
                Tone::new(600.0, 0.15, Waveform::Sine, 0),
                Tone::new(800.0, 0.10, Waveform::Sine, 50),
            ]
        );
    }

    #[test]
    fn test_delays_are_sorted() {
        // Cues list tones in playback order.
        for event in SoundEvent::iter() {
            let tones = cue(event);
            assert!(
                tones.windows(2).all(|w| w[0].delay_ms <= w[1].delay_ms),
                "cue for {event} is out of order"
            );
        }
    }

    #[test]
    fn test_instant_leading_tone() {
        // Every cue starts with an immediate tone.
        for event in SoundEvent::iter() {
            assert_eq!(cue(event)[0].delay_ms, 0);
        }
    }
}
