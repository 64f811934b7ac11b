// Default tuning constants for the effects engine and mode renderers.
// `FxConfig::default()` is built from these; runtime overrides go through
// `FxConfig::apply_override`.

// Fixed simulation step of the effects clock (seconds per tick, ~60 fps)
pub const EFFECTS_TIME_STEP: f32 = 0.016;

// Scan lines
pub const SCAN_LINE_DECAY: f32 = 0.02; // life lost per tick
pub const SCAN_LINE_SPEED_MIN: f32 = 2.0; // px per tick
pub const SCAN_LINE_SPEED_SPAN: f32 = 3.0;
pub const SCAN_LINE_OVERSCROLL_PX: f32 = 50.0; // removed once this far past the bottom edge
pub const SCAN_LINE_SPAWN_CHANCE: f64 = 0.02; // per tick with a detection
pub const SCAN_LINE_SPAWN_INTENSITY: f32 = 0.8;

// Energy fields
pub const ENERGY_FIELD_DECAY: f32 = 0.01;
pub const ENERGY_FIELD_PHASE_STEP: f32 = 0.1; // radians per tick
pub const ENERGY_FIELD_SPAWN_CHANCE: f64 = 0.05; // per tick, spawns on every hand
pub const ENERGY_FIELD_SPAWN_RADIUS: f32 = 60.0;
pub const ENERGY_FIELD_HUE_BASE: f32 = 180.0;
pub const ENERGY_FIELD_HUE_SPAN: f32 = 60.0;

// Data streams
pub const DATA_STREAM_ADVANCE: f32 = 0.05; // progress per tick
pub const DATA_STREAM_DECAY: f32 = 0.008;
pub const DATA_STREAM_STAGGER: f32 = 0.05; // progress lag between consecutive symbols
pub const DATA_STREAM_PAYLOAD_LEN: usize = 8;
pub const DATA_STREAM_SPAWN_CHANCE: f64 = 0.1; // per hand per tick in neural mode

// Upper bound per effect collection; oldest members are evicted first
pub const MAX_EFFECTS_PER_COLLECTION: usize = 256;

// Digital grid (hologram plane)
pub const GRID_CELL_PX: f32 = 40.0;
pub const GRID_SCROLL_PX_PER_SEC: f32 = 20.0;
pub const HOLOGRAM_GRID_OPACITY: f32 = 0.05;

// Matrix rain
pub const MATRIX_GLYPH_PX: f32 = 16.0;
pub const MATRIX_SPEED_MIN: f32 = 0.3; // rows per tick
pub const MATRIX_SPEED_SPAN: f32 = 0.4;
pub const MATRIX_BRIGHTNESS_MIN: f32 = 0.7;
pub const MATRIX_BRIGHTNESS_SPAN: f32 = 0.3;
pub const MATRIX_TRAIL_ALPHA: f32 = 0.15;
pub const MATRIX_PROXIMITY_PX: f32 = 200.0;
pub const MATRIX_HIGHLIGHT_FLOOR: f32 = 0.7; // minimum highlight intensity inside the radius
pub const MATRIX_GLYPH_MUTATION_CHANCE: f64 = 0.05;
pub const MATRIX_RESET_CHANCE: f64 = 0.025; // per tick once past the bottom edge
pub const MATRIX_GLYPHS: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZｱｲｳｴｵｶｷｸｹｺｻｼｽｾｿﾀﾁﾂﾃﾄﾅﾆﾇﾈﾉﾊﾋﾌﾍﾎﾏﾐﾑﾒﾓﾔﾕﾖﾗﾘﾙﾚﾛﾜｦﾝ";

// Hand overlays
pub const HAND_HUE_BASE: f32 = 180.0;
pub const HAND_HUE_STEP: f32 = 60.0; // hue offset per hand index
pub const PULSE_RATE_PER_MS: f64 = 0.01; // radians per millisecond for node pulse and glitch

// Cursor emitters
pub const TRAIL_PARTICLES_PER_UPDATE: usize = 3;
pub const TRAIL_MAX_PARTICLES: usize = 300;
pub const TRAIL_PARTICLE_DECAY: f32 = 0.025;

// Confidence reported while a detection is running
pub const DETECTION_CONFIDENCE: f32 = 0.8;
