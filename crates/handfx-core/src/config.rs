//! Runtime tuning for the effects engine.
//!
//! Every magic number the renderers use lives here with its default taken
//! from [`crate::constants`]. The web frontend applies overrides parsed from
//! the page query string through [`FxConfig::apply_override`].

use crate::constants::*;
use crate::error::FxError;

#[derive(Clone, Debug, PartialEq)]
pub struct FxConfig {
    // effects clock
    pub time_step: f32,

    pub scan_line_decay: f32,
    pub scan_line_spawn_chance: f64,
    pub scan_line_spawn_intensity: f32,

    pub energy_field_decay: f32,
    pub energy_field_phase_step: f32,
    pub energy_field_spawn_chance: f64,
    pub energy_field_spawn_radius: f32,

    pub data_stream_advance: f32,
    pub data_stream_decay: f32,
    pub data_stream_spawn_chance: f64,

    /// `0` disables the cap and lets decay alone bound the collections.
    pub max_effects_per_collection: usize,

    pub matrix_glyph_px: f32,
    pub matrix_trail_alpha: f32,
    pub matrix_proximity_px: f32,
    pub matrix_glyph_mutation_chance: f64,
    pub matrix_reset_chance: f64,

    pub hologram_grid_opacity: f32,

    pub trail_particles_per_update: usize,
    pub trail_max_particles: usize,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            time_step: EFFECTS_TIME_STEP,
            scan_line_decay: SCAN_LINE_DECAY,
            scan_line_spawn_chance: SCAN_LINE_SPAWN_CHANCE,
            scan_line_spawn_intensity: SCAN_LINE_SPAWN_INTENSITY,
            energy_field_decay: ENERGY_FIELD_DECAY,
            energy_field_phase_step: ENERGY_FIELD_PHASE_STEP,
            energy_field_spawn_chance: ENERGY_FIELD_SPAWN_CHANCE,
            energy_field_spawn_radius: ENERGY_FIELD_SPAWN_RADIUS,
            data_stream_advance: DATA_STREAM_ADVANCE,
            data_stream_decay: DATA_STREAM_DECAY,
            data_stream_spawn_chance: DATA_STREAM_SPAWN_CHANCE,
            max_effects_per_collection: MAX_EFFECTS_PER_COLLECTION,
            matrix_glyph_px: MATRIX_GLYPH_PX,
            matrix_trail_alpha: MATRIX_TRAIL_ALPHA,
            matrix_proximity_px: MATRIX_PROXIMITY_PX,
            matrix_glyph_mutation_chance: MATRIX_GLYPH_MUTATION_CHANCE,
            matrix_reset_chance: MATRIX_RESET_CHANCE,
            hologram_grid_opacity: HOLOGRAM_GRID_OPACITY,
            trail_particles_per_update: TRAIL_PARTICLES_PER_UPDATE,
            trail_max_particles: TRAIL_MAX_PARTICLES,
        }
    }
}

impl FxConfig {
    /// Keys accepted by [`FxConfig::apply_override`].
    pub const KEYS: &'static [&'static str] = &[
        "scanline_decay",
        "scanline_chance",
        "field_decay",
        "field_chance",
        "field_radius",
        "stream_decay",
        "stream_chance",
        "max_effects",
        "glyph_px",
        "trail_alpha",
        "proximity",
        "glyph_mutation",
        "matrix_reset",
        "grid_opacity",
        "trail_particles",
        "trail_max",
    ];

    /// Override one tunable from its textual form. On error the config is
    /// left untouched.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), FxError> {
        let invalid = || FxError::InvalidConfigValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "scanline_decay" => self.scan_line_decay = parse_rate(value).ok_or_else(invalid)?,
            "scanline_chance" => {
                self.scan_line_spawn_chance = parse_chance(value).ok_or_else(invalid)?
            }
            "field_decay" => self.energy_field_decay = parse_rate(value).ok_or_else(invalid)?,
            "field_chance" => {
                self.energy_field_spawn_chance = parse_chance(value).ok_or_else(invalid)?
            }
            "field_radius" => {
                self.energy_field_spawn_radius = parse_positive(value).ok_or_else(invalid)?
            }
            "stream_decay" => self.data_stream_decay = parse_rate(value).ok_or_else(invalid)?,
            "stream_chance" => {
                self.data_stream_spawn_chance = parse_chance(value).ok_or_else(invalid)?
            }
            "max_effects" => {
                self.max_effects_per_collection = value.trim().parse().map_err(|_| invalid())?
            }
            "glyph_px" => self.matrix_glyph_px = parse_positive(value).ok_or_else(invalid)?,
            "trail_alpha" => self.matrix_trail_alpha = parse_unit(value).ok_or_else(invalid)?,
            "proximity" => self.matrix_proximity_px = parse_positive(value).ok_or_else(invalid)?,
            "glyph_mutation" => {
                self.matrix_glyph_mutation_chance = parse_chance(value).ok_or_else(invalid)?
            }
            "matrix_reset" => self.matrix_reset_chance = parse_chance(value).ok_or_else(invalid)?,
            "grid_opacity" => self.hologram_grid_opacity = parse_unit(value).ok_or_else(invalid)?,
            "trail_particles" => {
                self.trail_particles_per_update = value.trim().parse().map_err(|_| invalid())?
            }
            "trail_max" => self.trail_max_particles = value.trim().parse().map_err(|_| invalid())?,
            _ => return Err(FxError::UnknownConfigKey(key.to_string())),
        }
        Ok(())
    }

    /// Apply a batch of overrides, collecting the failures instead of
    /// stopping at the first one.
    pub fn apply_overrides<'a, I>(&mut self, pairs: I) -> Vec<FxError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        pairs
            .into_iter()
            .filter_map(|(k, v)| self.apply_override(k, v).err())
            .collect()
    }
}

fn parse_f32(value: &str) -> Option<f32> {
    value.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

// per-tick decay must make progress, otherwise effects never expire
fn parse_rate(value: &str) -> Option<f32> {
    parse_f32(value).filter(|v| *v > 0.0 && *v <= 1.0)
}

fn parse_unit(value: &str) -> Option<f32> {
    parse_f32(value).filter(|v| (0.0..=1.0).contains(v))
}

fn parse_positive(value: &str) -> Option<f32> {
    parse_f32(value).filter(|v| *v > 0.0)
}

fn parse_chance(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| (0.0..=1.0).contains(v))
}
