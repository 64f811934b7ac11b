pub mod audio;
pub mod config;
pub mod constants;
pub mod effects;
pub mod emitter;
pub mod error;
pub mod frame;
pub mod gesture;
pub mod hand;
pub mod hud;
pub mod matrix;
pub mod mode;
pub mod overlays;
pub mod surface;
pub mod vision;

pub use audio::{AudioNotifier, Cue, SilentNotifier, SoundBank, Tone, Waveform};
pub use config::FxConfig;
pub use effects::EffectCollections;
pub use emitter::{CursorEmitter, EmitterPool, ParticleTrail};
pub use error::FxError;
pub use frame::FrameOrchestrator;
pub use gesture::{classify, FingerState, Gesture};
pub use hand::{Hand, HandAnchor, Landmark};
pub use hud::{FpsMeter, FrameStats, SystemStatus};
pub use matrix::MatrixRain;
pub use mode::Mode;
pub use surface::{Color, CompositeOp, RecordingSurface, Surface};
pub use vision::{HandDetector, NoDetector};
