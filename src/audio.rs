//! Sound effect vocabulary
//!
//! The simulation raises events; an `AudioSink` supplied by the host turns
//! them into sound. Effects are procedural tones, no sample files needed.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// A point was scored
    Score,
}

/// Oscillator shape for a procedural tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
}

/// Parameters for a single swept tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub waveform: Waveform,
    pub start_hz: f32,
    pub end_hz: f32,
    /// Seconds
    pub duration: f32,
    /// Peak gain before volume scaling
    pub gain: f32,
}

impl SoundEffect {
    /// Sound for an event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<SoundEffect> {
        match event {
            GameEvent::PaddleHit(_) => Some(SoundEffect::PaddleHit),
            GameEvent::Scored(_) => Some(SoundEffect::Score),
            GameEvent::PhaseChanged(_) => None,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            // Solid thump
            SoundEffect::PaddleHit => Tone {
                waveform: Waveform::Sine,
                start_hz: 150.0,
                end_hz: 60.0,
                duration: 0.15,
                gain: 0.6,
            },
            // Rising chirp
            SoundEffect::Score => Tone {
                waveform: Waveform::Square,
                start_hz: 440.0,
                end_hz: 880.0,
                duration: 0.25,
                gain: 0.3,
            },
        }
    }
}

/// Audio collaborator
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Play the sound for every event that has one, in order
pub fn dispatch_sounds<S: AudioSink + ?Sized>(events: &[GameEvent], sink: &mut S) {
    for effect in events.iter().filter_map(SoundEffect::for_event) {
        sink.play(effect);
    }
}

/// Sink that logs plays instead of making noise (headless runs)
#[derive(Debug, Clone)]
pub struct LogAudio {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    /// Plays that were audible
    pub played: u64,
}

impl Default for LogAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl LogAudio {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            played: 0,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let tone = effect.tone();
        log::debug!(
            "play {:?}: {:?} {}Hz -> {}Hz over {}s at gain {:.2}",
            effect,
            tone.waveform,
            tone.start_hz,
            tone.end_hz,
            tone.duration,
            tone.gain * vol
        );
        self.played += 1;
    }
}
