//! Audio cues and the procedural sound bank.
//!
//! The core only decides *when* something should be heard and which tone it
//! maps to. Synthesis belongs to an [`AudioNotifier`] implementation, which
//! must be fire-and-forget and silent when muted or unavailable.

use crate::gesture::Gesture;
use crate::mode::Mode;
use fnv::FnvHashMap;

/// Basic oscillator shape used by the synthesized cues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Saw,
    Triangle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sound {
    HandDetected,
    GestureChange,
    ParticleSpawn,
    ModeSwitch,
    SystemOnline,
}

/// Something the frame loop or the UI wants announced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cue {
    SystemOnline,
    HandDetected,
    GestureChange(Gesture),
    ModeSwitch(Mode),
    ParticleSpawn,
}

/// A concrete tone ready for synthesis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_sec: f32,
    pub waveform: Waveform,
}

pub trait AudioNotifier {
    fn play(&mut self, cue: Cue);
}

/// Notifier used when audio could not be initialized.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentNotifier;

impl AudioNotifier for SilentNotifier {
    fn play(&mut self, _cue: Cue) {}
}

pub fn gesture_frequency(gesture: Gesture) -> Option<f32> {
    match gesture {
        Gesture::Fist => Some(200.0),
        Gesture::Pointing => Some(400.0),
        Gesture::Peace => Some(600.0),
        Gesture::OpenHand => Some(800.0),
        Gesture::ThumbsUp => Some(1000.0),
        Gesture::NoHands | Gesture::Fingers(_) => None,
    }
}

pub fn mode_frequency(mode: Mode) -> f32 {
    match mode {
        Mode::Particles => 400.0,
        Mode::Neural => 500.0,
        Mode::Hologram => 600.0,
        Mode::Matrix => 350.0,
    }
}

#[derive(Clone, Debug)]
pub struct SoundBank {
    sounds: FnvHashMap<Sound, Tone>,
}

impl Default for SoundBank {
    fn default() -> Self {
        let mut sounds = FnvHashMap::default();
        let mut add = |sound, frequency_hz, duration_sec, waveform| {
            sounds.insert(
                sound,
                Tone {
                    frequency_hz,
                    duration_sec,
                    waveform,
                },
            );
        };
        add(Sound::HandDetected, 800.0, 0.1, Waveform::Sine);
        add(Sound::GestureChange, 600.0, 0.15, Waveform::Square);
        add(Sound::ParticleSpawn, 1200.0, 0.05, Waveform::Triangle);
        add(Sound::ModeSwitch, 400.0, 0.2, Waveform::Saw);
        add(Sound::SystemOnline, 300.0, 0.3, Waveform::Sine);
        Self { sounds }
    }
}

impl SoundBank {
    /// Base tone for a sound, before any per-cue pitch or length.
    pub fn tone(&self, sound: Sound) -> Option<Tone> {
        self.sounds.get(&sound).copied()
    }

    /// Tone for a cue, or `None` when the cue has no audible mapping.
    pub fn resolve(&self, cue: Cue) -> Option<Tone> {
        let (sound, frequency, duration) = match cue {
            Cue::SystemOnline => (Sound::SystemOnline, None, None),
            Cue::HandDetected => (Sound::HandDetected, None, None),
            Cue::ParticleSpawn => (Sound::ParticleSpawn, None, None),
            Cue::GestureChange(g) => (Sound::GestureChange, Some(gesture_frequency(g)?), Some(0.1)),
            Cue::ModeSwitch(m) => (Sound::ModeSwitch, Some(mode_frequency(m)), Some(0.15)),
        };
        let base = self.tone(sound)?;
        Some(Tone {
            frequency_hz: frequency.unwrap_or(base.frequency_hz),
            duration_sec: duration.unwrap_or(base.duration_sec),
            ..base
        })
    }
}
