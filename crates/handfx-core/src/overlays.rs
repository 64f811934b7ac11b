//! Hand-driven overlays for the neural and hologram modes.
//!
//! Both are stateless: they read the current hands and the frame clock and
//! draw. The neural overlay also feeds transient data streams into the effect
//! collections.

use crate::config::FxConfig;
use crate::constants::*;
use crate::effects::EffectCollections;
use crate::hand::{Hand, IMPORTANT_LANDMARKS};
use crate::surface::{Color, CompositeOp, Surface};
use rand::Rng;

/// Skeleton topology: the five digit chains plus three palm cross-links.
#[rustfmt::skip]
pub const HAND_CONNECTIONS: [(usize, usize); 23] = [
    (0, 1), (1, 2), (2, 3), (3, 4),
    (0, 5), (5, 6), (6, 7), (7, 8),
    (0, 9), (9, 10), (10, 11), (11, 12),
    (0, 13), (13, 14), (14, 15), (15, 16),
    (0, 17), (17, 18), (18, 19), (19, 20),
    (5, 9), (9, 13), (13, 17),
];

#[inline]
pub fn hand_hue(hand_index: usize) -> f32 {
    HAND_HUE_BASE + hand_index as f32 * HAND_HUE_STEP
}

#[inline]
fn is_important(i: usize) -> bool {
    IMPORTANT_LANDMARKS.contains(&i)
}

/// Per-landmark oscillation shared by the node pulse and the hologram glitch.
#[inline]
pub fn oscillation(now_ms: f64, landmark: usize) -> f32 {
    (now_ms * PULSE_RATE_PER_MS + landmark as f64).sin() as f32
}

pub fn draw_neural(
    surface: &mut dyn Surface,
    hands: &[Hand],
    now_ms: f64,
    effects: &mut EffectCollections,
    cfg: &FxConfig,
    rng: &mut impl Rng,
) {
    let (w, h) = (surface.width(), surface.height());

    for (hand_index, hand) in hands.iter().enumerate() {
        let hue = hand_hue(hand_index);
        surface.save();
        surface.set_composite(CompositeOp::Lighter);

        let edge = Color::Hsl(hue, 80.0, 60.0);
        surface.set_stroke(edge);
        surface.set_line_width(2.0);
        surface.set_shadow(edge, 10.0);
        surface.set_alpha(0.7);
        for &(a, b) in HAND_CONNECTIONS.iter() {
            let p0 = hand.landmark(a).to_px(w, h);
            let p1 = hand.landmark(b).to_px(w, h);
            surface.line(p0.x, p0.y, p1.x, p1.y);
        }

        for (i, point) in hand.landmarks().iter().enumerate() {
            let p = point.to_px(w, h);
            let important = is_important(i);
            let node = Color::Hsl(hue, 80.0, if important { 80.0 } else { 60.0 });
            let size = if important { 6.0 } else { 4.0 };

            surface.set_fill(node);
            surface.set_shadow(node, if important { 15.0 } else { 8.0 });
            surface.set_alpha(0.9);
            surface.circle(p.x, p.y, size);
            surface.fill();

            if important {
                surface.set_alpha(0.4);
                surface.circle(p.x, p.y, size + oscillation(now_ms, i) * 2.0);
                surface.fill();
            }
        }
        surface.restore();

        if rng.gen_bool(cfg.data_stream_spawn_chance) {
            let n = hand.landmarks().len();
            let from = rng.gen_range(0..n);
            let to = rng.gen_range(0..n);
            if from != to {
                effects.spawn_data_stream(
                    hand.landmark(from).to_px(w, h),
                    hand.landmark(to).to_px(w, h),
                    rng,
                );
            }
        }
    }
}

pub fn draw_hologram(surface: &mut dyn Surface, hands: &[Hand], now_ms: f64) {
    let (w, h) = (surface.width(), surface.height());

    for (hand_index, hand) in hands.iter().enumerate() {
        for (i, point) in hand.landmarks().iter().enumerate() {
            let p = point.to_px(w, h);
            let glitch = oscillation(now_ms, i) * 2.0;

            surface.save();
            surface.set_composite(CompositeOp::Lighter);
            for layer in 0..3 {
                let l = layer as f32;
                let color = Color::Hsl(hand_hue(hand_index) + l * 20.0, 80.0, 60.0 + l * 10.0);
                surface.set_alpha(0.5 - l * 0.1);
                surface.set_fill(color);
                surface.set_shadow(color, 15.0);

                let offset_x = l + glitch * (l * 0.5);
                surface.circle(p.x + offset_x, p.y + l, 8.0 - l * 1.5);
                surface.fill();

                if layer == 0 && i % 2 == 0 {
                    surface.set_stroke(color);
                    surface.set_line_width(1.0);
                    surface.line(p.x - 20.0, p.y, p.x + 20.0, p.y);
                }
            }
            surface.restore();
        }
    }
}
