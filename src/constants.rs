// DOM and layout constants used by the web frontend.

// Canvas
pub const CANVAS_ID: &str = "output_canvas";
pub const CANVAS_ASPECT: f64 = 0.75; // height = width * aspect

// HUD stat elements
pub const FPS_COUNTER_ID: &str = "fpsCounter";
pub const HANDS_COUNT_ID: &str = "handsCount";
pub const PARTICLE_COUNT_ID: &str = "particleCount";
pub const CONFIDENCE_ID: &str = "confidence";
pub const CURRENT_GESTURE_ID: &str = "currentGesture";
pub const SYSTEM_STATUS_ID: &str = "systemStatus";

// Controls
pub const MODE_BUTTON_SELECTOR: &str = ".mode-btn";
pub const MUTE_BUTTON_ID: &str = "muteBtn";
pub const FULLSCREEN_BUTTON_ID: &str = "fullscreenBtn";
pub const VOLUME_SLIDER_ID: &str = "audioVolume";
pub const ACTIVE_CLASS: &str = "active";

// Button labels
pub const LABEL_MUTED: &str = "🔇 MUTED";
pub const LABEL_AUDIO: &str = "🔊 AUDIO";
pub const LABEL_FULLSCREEN: &str = "⛶ FULLSCREEN";
pub const LABEL_EXIT_FULLSCREEN: &str = "⛶ EXIT FULLSCREEN";

// Loading overlay timing
pub const LOADING_OVERLAY_ID: &str = "loadingOverlay";
pub const OVERLAY_FADE_DELAY_MS: i32 = 2000;
pub const OVERLAY_HIDE_DELAY_MS: i32 = 500; // after the fade starts

// Audio
pub const DEFAULT_VOLUME: f32 = 0.3;
pub const VOLUME_SLIDER_MAX: f32 = 100.0;
pub const TONE_SILENCE_LEVEL: f32 = 0.001; // exponential ramps cannot reach zero

// Seed mixed into the per-session RNG seed
pub const SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;
