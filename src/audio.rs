use crate::constants::{DEFAULT_VOLUME, TONE_SILENCE_LEVEL};
use handfx_core::{AudioNotifier, Cue, SoundBank, Tone, Waveform};
use web_sys as web;

/// WebAudio cue player: one short oscillator per cue, routed through a gain
/// envelope straight to the destination.
pub struct WebAudioNotifier {
    audio_ctx: web::AudioContext,
    bank: SoundBank,
    volume: f32,
    muted: bool,
}

impl WebAudioNotifier {
    pub fn new() -> anyhow::Result<Self> {
        let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            audio_ctx,
            bank: SoundBank::default(),
            volume: DEFAULT_VOLUME,
            muted: false,
        })
    }

    /// Browsers start the context suspended until a user gesture.
    pub fn resume(&self) {
        _ = self.audio_ctx.resume();
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn mute(&mut self) {
        self.muted = true;
    }

    pub fn unmute(&mut self) {
        self.muted = false;
    }

    pub fn toggle(&mut self) -> bool {
        if self.is_muted() {
            self.unmute();
        } else {
            self.mute();
        }
        self.is_muted()
    }

    fn play_tone(&self, tone: Tone) -> Result<(), wasm_bindgen::JsValue> {
        let now = self.audio_ctx.current_time();
        let end = now + tone.duration_sec as f64;

        let src = self.audio_ctx.create_oscillator()?;
        src.set_type(oscillator_type(tone.waveform));
        src.frequency().set_value_at_time(tone.frequency_hz, now)?;

        let gain = self.audio_ctx.create_gain()?;
        gain.gain().set_value_at_time(self.volume, now)?;
        gain.gain()
            .exponential_ramp_to_value_at_time(TONE_SILENCE_LEVEL, end)?;

        src.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&self.audio_ctx.destination())?;
        src.start_with_when(now)?;
        src.stop_with_when(end)?;
        Ok(())
    }
}

impl AudioNotifier for WebAudioNotifier {
    fn play(&mut self, cue: Cue) {
        if self.is_muted() {
            return;
        }
        let Some(tone) = self.bank.resolve(cue) else {
            return;
        };
        if let Err(e) = self.play_tone(tone) {
            log::warn!("[audio] failed to play {:?}: {:?}", cue, e);
        }
    }
}

fn oscillator_type(waveform: Waveform) -> web::OscillatorType {
    match waveform {
        Waveform::Sine => web::OscillatorType::Sine,
        Waveform::Square => web::OscillatorType::Square,
        Waveform::Saw => web::OscillatorType::Sawtooth,
        Waveform::Triangle => web::OscillatorType::Triangle,
    }
}

/// Notifier slot that stays silent when the AudioContext could not be built.
pub enum Notifier {
    Web(WebAudioNotifier),
    Silent,
}

impl Notifier {
    pub fn init() -> Self {
        match WebAudioNotifier::new() {
            Ok(n) => Notifier::Web(n),
            Err(e) => {
                log::warn!("[audio] initialization failed, running silent: {:?}", e);
                Notifier::Silent
            }
        }
    }

    pub fn web_mut(&mut self) -> Option<&mut WebAudioNotifier> {
        match self {
            Notifier::Web(n) => Some(n),
            Notifier::Silent => None,
        }
    }
}

impl AudioNotifier for Notifier {
    fn play(&mut self, cue: Cue) {
        if let Notifier::Web(n) = self {
            n.play(cue);
        }
    }
}
