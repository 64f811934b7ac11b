//! Matrix rain: one falling glyph per column, highlighted near tracked hands.
//!
//! The column array lives only while matrix mode is active. The orchestrator
//! builds it lazily on the first matrix frame and drops it on leaving the
//! mode, so re-entering always starts from freshly randomized columns.

use crate::config::FxConfig;
use crate::constants::*;
use crate::hand::HandAnchor;
use crate::surface::{Color, CompositeOp, Surface};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct MatrixColumn {
    /// Position in glyph rows; pixel y is `row * glyph_px`.
    pub row: f32,
    pub speed: f32,
    pub brightness: f32,
    pub glyph: char,
}

#[derive(Clone, Debug)]
pub struct MatrixRain {
    columns: Vec<MatrixColumn>,
    alphabet: Vec<char>,
    glyph_px: f32,
}

impl MatrixRain {
    /// One column per glyph width across the surface, each randomized.
    pub fn new(surface_width: f32, surface_height: f32, glyph_px: f32, rng: &mut impl Rng) -> Self {
        let alphabet: Vec<char> = MATRIX_GLYPHS.chars().collect();
        let glyph_px = glyph_px.max(1.0);
        let count = (surface_width / glyph_px).floor().max(0.0) as usize;
        let rows = (surface_height / glyph_px).max(0.0);
        let columns = (0..count)
            .map(|_| {
                let mut col = random_column(&alphabet, rng);
                col.row = (rng.gen::<f32>() * rows).floor();
                col
            })
            .collect();
        Self {
            columns,
            alphabet,
            glyph_px,
        }
    }

    pub fn columns(&self) -> &[MatrixColumn] {
        &self.columns
    }

    pub fn glyph_px(&self) -> f32 {
        self.glyph_px
    }

    /// Draw one frame and advance every column.
    pub fn render(
        &mut self,
        surface: &mut dyn Surface,
        anchors: &[HandAnchor],
        cfg: &FxConfig,
        rng: &mut impl Rng,
    ) {
        let (w, h) = (surface.width(), surface.height());
        surface.save();

        // low-opacity wash keeps a fading trail behind each glyph
        surface.set_fill(Color::Rgb(0, 0, 0));
        surface.set_alpha(cfg.matrix_trail_alpha);
        surface.fill_rect(0.0, 0.0, w, h);

        surface.set_font(&format!("bold {}px 'Courier New', monospace", self.glyph_px));
        draw_anchor_dots(surface, anchors);

        let mut buf = [0u8; 4];
        for (i, col) in self.columns.iter_mut().enumerate() {
            let pos = Vec2::new(i as f32 * self.glyph_px, col.row * self.glyph_px);
            let closest = closest_within(pos, anchors, cfg.matrix_proximity_px);
            let glyph: &str = col.glyph.encode_utf8(&mut buf);

            surface.save();
            match closest {
                Some(dist) => {
                    let intensity = highlight_intensity(dist, cfg.matrix_proximity_px);
                    surface.set_alpha(0.9);
                    surface.set_fill(Color::Rgb(0, (255.0 * intensity).floor() as u8, 255));
                    surface.set_shadow(Color::Rgb(0, 255, 255), 15.0);
                    surface.fill_text(glyph, pos.x, pos.y);

                    surface.set_alpha(0.5);
                    surface.set_shadow(Color::Rgb(0, 255, 255), 30.0);
                    surface.set_fill(Color::Named("cyan"));
                    surface.fill_text(glyph, pos.x, pos.y);
                }
                None => {
                    let g = (100.0 + col.brightness * 155.0).floor() as u8;
                    surface.set_alpha(0.8);
                    surface.set_fill(Color::Rgb(0, g, 0));
                    surface.set_shadow(Color::Rgb(0, 255, 0), 15.0);
                    surface.fill_text(glyph, pos.x, pos.y);
                }
            }
            surface.restore();

            step_column(col, &self.alphabet, self.glyph_px, h, cfg, rng);
        }

        surface.restore();
    }
}

/// Highlight strength for a glyph `dist` pixels from the nearest hand.
pub fn highlight_intensity(dist: f32, radius: f32) -> f32 {
    (1.0 - dist / radius).max(MATRIX_HIGHLIGHT_FLOOR)
}

/// Distance to the closest anchor, if any lies inside `radius`.
pub fn closest_within(pos: Vec2, anchors: &[HandAnchor], radius: f32) -> Option<f32> {
    anchors
        .iter()
        .map(|a| pos.distance(a.pos))
        .filter(|d| *d < radius)
        .min_by(|a, b| a.total_cmp(b))
}

fn step_column(
    col: &mut MatrixColumn,
    alphabet: &[char],
    glyph_px: f32,
    surface_height: f32,
    cfg: &FxConfig,
    rng: &mut impl Rng,
) {
    col.row += col.speed;
    if rng.gen_bool(cfg.matrix_glyph_mutation_chance) {
        col.glyph = random_glyph(alphabet, rng);
    }
    // staggered reset instead of a hard wrap keeps the cascade uneven
    if col.row * glyph_px > surface_height && rng.gen_bool(cfg.matrix_reset_chance) {
        *col = random_column(alphabet, rng);
    }
}

fn random_column(alphabet: &[char], rng: &mut impl Rng) -> MatrixColumn {
    MatrixColumn {
        row: 0.0,
        speed: MATRIX_SPEED_MIN + rng.gen::<f32>() * MATRIX_SPEED_SPAN,
        brightness: MATRIX_BRIGHTNESS_MIN + rng.gen::<f32>() * MATRIX_BRIGHTNESS_SPAN,
        glyph: random_glyph(alphabet, rng),
    }
}

fn random_glyph(alphabet: &[char], rng: &mut impl Rng) -> char {
    if alphabet.is_empty() {
        return ' ';
    }
    alphabet[rng.gen_range(0..alphabet.len())]
}

fn draw_anchor_dots(surface: &mut dyn Surface, anchors: &[HandAnchor]) {
    for (i, anchor) in anchors.iter().enumerate() {
        surface.save();
        surface.set_composite(CompositeOp::SourceOver);
        surface.set_fill(Color::Named(if i == 0 { "red" } else { "orange" }));
        surface.set_shadow(Color::BLACK, 0.0);
        surface.set_alpha(1.0);
        surface.circle(anchor.pos.x, anchor.pos.y, 5.0);
        surface.fill();
        surface.restore();
    }
}
