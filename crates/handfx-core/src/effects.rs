//! Self-aging ambient effect collections: scan lines, energy fields and data
//! streams.
//!
//! Each tick advances every member by one fixed step and prunes the ones whose
//! lifetime is over. Survivors are drawn with their updated values in the same
//! tick, which the fade and trail looks depend on. Collections are capped
//! (`FxConfig::max_effects_per_collection`) with oldest-first eviction so
//! memory stays bounded even under a burst of spawns.

use crate::config::FxConfig;
use crate::constants::*;
use crate::surface::{Color, CompositeOp, Surface};
use glam::Vec2;
use rand::Rng;
use std::collections::VecDeque;
use std::f32::consts::TAU;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";
const DATA_STREAM_COLOR: Color = Color::Hex("#00ff88");

#[derive(Clone, Debug, PartialEq)]
pub struct ScanLine {
    pub y: f32,
    pub intensity: f32,
    pub life: f32,
    pub speed: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnergyField {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub life: f32,
    pub pulse_phase: f32,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DataStream {
    pub start: Vec2,
    pub end: Vec2,
    pub progress: f32,
    pub life: f32,
    pub payload: String,
}

impl DataStream {
    #[inline]
    pub fn point_at(&self, progress: f32) -> Vec2 {
        self.start.lerp(self.end, progress)
    }
}

/// Owner of the three ambient collections plus the fixed-step effects clock.
#[derive(Clone, Debug)]
pub struct EffectCollections {
    scan_lines: VecDeque<ScanLine>,
    energy_fields: VecDeque<EnergyField>,
    data_streams: VecDeque<DataStream>,
    time: f32,
    cfg: FxConfig,
}

impl EffectCollections {
    pub fn new(cfg: FxConfig) -> Self {
        Self {
            scan_lines: VecDeque::new(),
            energy_fields: VecDeque::new(),
            data_streams: VecDeque::new(),
            time: 0.0,
            cfg,
        }
    }

    pub fn scan_lines(&self) -> impl Iterator<Item = &ScanLine> {
        self.scan_lines.iter()
    }

    pub fn energy_fields(&self) -> impl Iterator<Item = &EnergyField> {
        self.energy_fields.iter()
    }

    pub fn data_streams(&self) -> impl Iterator<Item = &DataStream> {
        self.data_streams.iter()
    }

    /// Seconds on the effects clock.
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn len(&self) -> usize {
        self.scan_lines.len() + self.energy_fields.len() + self.data_streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn counts(&self) -> EffectCounts {
        EffectCounts {
            scan_lines: self.scan_lines.len(),
            energy_fields: self.energy_fields.len(),
            data_streams: self.data_streams.len(),
        }
    }

    pub fn spawn_scan_line(&mut self, y: f32, intensity: f32, rng: &mut impl Rng) {
        let line = ScanLine {
            y,
            intensity,
            life: 1.0,
            speed: SCAN_LINE_SPEED_MIN + rng.gen::<f32>() * SCAN_LINE_SPEED_SPAN,
        };
        push_capped(&mut self.scan_lines, line, self.cfg.max_effects_per_collection);
    }

    pub fn spawn_energy_field(&mut self, x: f32, y: f32, radius: f32, rng: &mut impl Rng) {
        let hue = ENERGY_FIELD_HUE_BASE + rng.gen::<f32>() * ENERGY_FIELD_HUE_SPAN;
        let field = EnergyField {
            x,
            y,
            radius,
            life: 1.0,
            pulse_phase: rng.gen::<f32>() * TAU,
            color: Color::Hsl(hue.round(), 80.0, 60.0),
        };
        push_capped(&mut self.energy_fields, field, self.cfg.max_effects_per_collection);
    }

    pub fn spawn_data_stream(&mut self, start: Vec2, end: Vec2, rng: &mut impl Rng) {
        let payload = (0..DATA_STREAM_PAYLOAD_LEN)
            .map(|_| HEX_DIGITS[rng.gen_range(0..HEX_DIGITS.len())] as char)
            .collect();
        let stream = DataStream {
            start,
            end,
            progress: 0.0,
            life: 1.0,
            payload,
        };
        push_capped(&mut self.data_streams, stream, self.cfg.max_effects_per_collection);
    }

    /// Advance every member one step and drop the expired ones.
    pub fn tick(&mut self, surface_height: f32) {
        let cfg = &self.cfg;
        self.time += cfg.time_step;

        let bottom = surface_height + SCAN_LINE_OVERSCROLL_PX;
        self.scan_lines.retain_mut(|line| {
            line.y += line.speed;
            line.life = checked_life(line.life - cfg.scan_line_decay);
            line.life > 0.0 && line.y < bottom
        });

        self.energy_fields.retain_mut(|field| {
            field.life = checked_life(field.life - cfg.energy_field_decay);
            field.pulse_phase += cfg.energy_field_phase_step;
            field.life > 0.0
        });

        self.data_streams.retain_mut(|stream| {
            stream.progress += cfg.data_stream_advance;
            stream.life = checked_life(stream.life - cfg.data_stream_decay);
            stream.life > 0.0 && stream.progress < 1.0
        });
    }

    /// Age then draw in one pass; this is what the frame loop calls.
    pub fn advance(&mut self, surface: &mut dyn Surface) {
        self.tick(surface.height());
        self.render(surface);
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        for line in &self.scan_lines {
            render_scan_line(surface, line);
        }
        for field in &self.energy_fields {
            render_energy_field(surface, field);
        }
        for stream in &self.data_streams {
            render_data_stream(surface, stream);
        }
    }

    /// Scrolling grid; depends only on the effects clock.
    pub fn render_digital_grid(&self, surface: &mut dyn Surface, opacity: f32) {
        let (w, h) = (surface.width(), surface.height());
        let offset = (self.time * GRID_SCROLL_PX_PER_SEC) % GRID_CELL_PX;

        surface.save();
        surface.set_alpha(opacity);
        surface.set_stroke(Color::CYAN);
        surface.set_line_width(1.0);

        let mut x = -offset;
        while x < w {
            surface.line(x, 0.0, x, h);
            x += GRID_CELL_PX;
        }
        let mut y = -offset;
        while y < h {
            surface.line(0.0, y, w, y);
            y += GRID_CELL_PX;
        }
        surface.restore();
    }

    pub fn clear(&mut self) {
        self.scan_lines.clear();
        self.energy_fields.clear();
        self.data_streams.clear();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectCounts {
    pub scan_lines: usize,
    pub energy_fields: usize,
    pub data_streams: usize,
}

fn push_capped<T>(items: &mut VecDeque<T>, item: T, cap: usize) {
    if cap > 0 {
        while items.len() >= cap {
            items.pop_front();
        }
    }
    items.push_back(item);
}

// A non-finite or out-of-range life is a bug upstream; clamp in release.
#[inline]
fn checked_life(life: f32) -> f32 {
    debug_assert!(life.is_finite(), "effect life became non-finite: {life}");
    if life.is_nan() {
        return 0.0;
    }
    life.clamp(0.0, 1.0)
}

fn render_scan_line(surface: &mut dyn Surface, line: &ScanLine) {
    let w = surface.width();
    surface.save();
    surface.set_alpha(line.life * line.intensity);
    surface.set_stroke(Color::CYAN);
    surface.set_line_width(2.0);
    surface.set_shadow(Color::CYAN, 10.0);
    surface.line(0.0, line.y, w, line.y);

    surface.set_alpha(line.life * 0.3);
    surface.set_fill(Color::CYAN);
    surface.fill_rect(0.0, line.y - 1.0, w, 2.0);
    surface.restore();
}

fn render_energy_field(surface: &mut dyn Surface, field: &EnergyField) {
    let pulse = field.pulse_phase.sin() * 0.3 + 0.7;
    let radius = field.radius * pulse;

    surface.save();
    surface.set_stroke(field.color);
    surface.set_line_width(2.0);
    surface.set_shadow(field.color, 15.0);
    for ring in 0..3 {
        let ring = ring as f32;
        surface.set_alpha(field.life * (0.4 - ring * 0.1));
        surface.circle(field.x, field.y, radius * (0.3 + ring * 0.35));
        surface.stroke();
    }
    surface.restore();
}

fn render_data_stream(surface: &mut dyn Surface, stream: &DataStream) {
    surface.save();
    surface.set_font("10px \"Courier New\", monospace");
    surface.set_fill(DATA_STREAM_COLOR);
    surface.set_shadow(DATA_STREAM_COLOR, 8.0);

    let mut buf = [0u8; 4];
    for (i, symbol) in stream.payload.chars().enumerate() {
        let lag = i as f32 * DATA_STREAM_STAGGER;
        let at = stream.progress - lag;
        if at > 0.0 && at < 1.0 {
            let p = stream.point_at(at);
            surface.set_alpha(stream.life * (1.0 - i as f32 * 0.1));
            surface.fill_text(symbol.encode_utf8(&mut buf), p.x, p.y);
        }
    }
    surface.restore();
}
