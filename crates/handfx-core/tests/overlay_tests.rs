mod common;

use common::*;
use handfx_core::overlays::{draw_hologram, draw_neural, hand_hue, HAND_CONNECTIONS};
use handfx_core::surface::DrawCmd;
use handfx_core::{Color, CompositeOp, EffectCollections, FxConfig, RecordingSurface};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn strokes(s: &RecordingSurface) -> usize {
    s.count(|c| matches!(c, DrawCmd::StrokePath))
}

fn fills(s: &RecordingSurface) -> usize {
    s.count(|c| matches!(c, DrawCmd::FillPath))
}

#[test]
fn skeleton_has_digit_chains_and_palm_links() {
    assert_eq!(HAND_CONNECTIONS.len(), 23);
    assert!(HAND_CONNECTIONS.contains(&(5, 9)));
    assert!(HAND_CONNECTIONS.contains(&(9, 13)));
    assert!(HAND_CONNECTIONS.contains(&(13, 17)));
    assert!(HAND_CONNECTIONS.iter().all(|&(a, b)| a < 21 && b < 21));
}

#[test]
fn neural_draws_edges_nodes_and_pulses() {
    let cfg = FxConfig {
        data_stream_spawn_chance: 0.0,
        ..FxConfig::default()
    };
    let mut fx = EffectCollections::new(cfg.clone());
    let mut rng = StdRng::seed_from_u64(1);
    let mut surface = RecordingSurface::new(640.0, 480.0);
    draw_neural(&mut surface, &[open_hand()], 0.0, &mut fx, &cfg, &mut rng);

    assert_eq!(strokes(&surface), 23);
    // 21 nodes plus a pulse ring on the six important ones
    assert_eq!(fills(&surface), 27);
    assert!(surface.commands.contains(&DrawCmd::Composite(CompositeOp::Lighter)));
    assert!(fx.is_empty());
}

#[test]
fn neural_colors_each_hand_differently() {
    let cfg = FxConfig::default();
    let mut fx = EffectCollections::new(cfg.clone());
    let mut rng = StdRng::seed_from_u64(2);
    let mut surface = RecordingSurface::new(640.0, 480.0);
    draw_neural(&mut surface, &[open_hand(), fist()], 0.0, &mut fx, &cfg, &mut rng);

    assert_eq!(hand_hue(0), 180.0);
    assert_eq!(hand_hue(1), 240.0);
    assert!(surface.commands.contains(&DrawCmd::Stroke(Color::Hsl(180.0, 80.0, 60.0))));
    assert!(surface.commands.contains(&DrawCmd::Stroke(Color::Hsl(240.0, 80.0, 60.0))));
    assert_eq!(strokes(&surface), 46);
}

#[test]
fn neural_feeds_data_streams() {
    let cfg = FxConfig {
        data_stream_spawn_chance: 1.0,
        ..FxConfig::default()
    };
    let mut fx = EffectCollections::new(cfg.clone());
    let mut rng = StdRng::seed_from_u64(3);
    let mut surface = RecordingSurface::new(640.0, 480.0);
    for _ in 0..20 {
        draw_neural(&mut surface, &[open_hand()], 0.0, &mut fx, &cfg, &mut rng);
    }
    // a pick of the same landmark twice is skipped, the rest spawn
    let spawned = fx.counts().data_streams;
    assert!((15..=20).contains(&spawned), "spawned {spawned}");
}

#[test]
fn hologram_layers_every_landmark() {
    let mut surface = RecordingSurface::new(640.0, 480.0);
    draw_hologram(&mut surface, &[open_hand()], 0.0);
    assert_eq!(fills(&surface), 21 * 3);
    // scan ticks on the eleven even landmarks, base layer only
    assert_eq!(strokes(&surface), 11);
}

#[test]
fn hologram_jitter_follows_the_clock() {
    let mut a = RecordingSurface::new(640.0, 480.0);
    let mut b = RecordingSurface::new(640.0, 480.0);
    draw_hologram(&mut a, &[open_hand()], 0.0);
    draw_hologram(&mut b, &[open_hand()], 150.0);
    assert_ne!(a.commands, b.commands);

    let mut c = RecordingSurface::new(640.0, 480.0);
    draw_hologram(&mut c, &[open_hand()], 150.0);
    assert_eq!(b.commands, c.commands);
}

#[test]
fn overlays_draw_nothing_without_hands() {
    let cfg = FxConfig::default();
    let mut fx = EffectCollections::new(cfg.clone());
    let mut rng = StdRng::seed_from_u64(4);
    let mut surface = RecordingSurface::new(640.0, 480.0);
    draw_neural(&mut surface, &[], 0.0, &mut fx, &cfg, &mut rng);
    draw_hologram(&mut surface, &[], 0.0);
    assert!(surface.commands.is_empty());
}
