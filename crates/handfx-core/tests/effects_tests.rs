use glam::Vec2;
use handfx_core::surface::DrawCmd;
use handfx_core::{EffectCollections, FxConfig, RecordingSurface};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn lives(fx: &EffectCollections) -> Vec<f32> {
    fx.scan_lines()
        .map(|l| l.life)
        .chain(fx.energy_fields().map(|f| f.life))
        .chain(fx.data_streams().map(|s| s.life))
        .collect()
}

fn populated(cfg: FxConfig) -> EffectCollections {
    let mut rng = rng();
    let mut fx = EffectCollections::new(cfg);
    for i in 0..5 {
        fx.spawn_scan_line(i as f32 * 10.0, 0.8, &mut rng);
        fx.spawn_energy_field(100.0, 100.0, 60.0, &mut rng);
        fx.spawn_data_stream(Vec2::ZERO, Vec2::new(200.0, 100.0), &mut rng);
    }
    fx
}

#[test]
fn spawned_members_start_at_full_life() {
    let fx = populated(FxConfig::default());
    assert_eq!(fx.len(), 15);
    assert!(lives(&fx).iter().all(|l| *l == 1.0));
    for s in fx.data_streams() {
        assert_eq!(s.payload.len(), 8);
        assert!(s.payload.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(s.progress, 0.0);
    }
}

#[test]
fn life_never_increases_across_ticks() {
    let mut fx = populated(FxConfig::default());
    for _ in 0..200 {
        let before = lives(&fx).into_iter().fold(f32::MIN, f32::max);
        fx.tick(10_000.0);
        assert!(lives(&fx).iter().all(|l| *l <= before));
        assert!(lives(&fx).iter().all(|l| *l > 0.0 && *l <= 1.0));
    }
}

#[test]
fn single_member_life_is_monotonic() {
    let mut rng = rng();
    let mut fx = EffectCollections::new(FxConfig::default());
    fx.spawn_energy_field(0.0, 0.0, 60.0, &mut rng);
    let mut prev = 1.0;
    loop {
        let Some(life) = fx.energy_fields().next().map(|f| f.life) else {
            break;
        };
        assert!(life <= prev);
        prev = life;
        fx.tick(480.0);
    }
    assert!(fx.is_empty());
}

#[test]
fn scan_lines_expire_after_enough_ticks() {
    let mut rng = rng();
    let mut fx = EffectCollections::new(FxConfig::default());
    for _ in 0..10 {
        fx.spawn_scan_line(0.0, 0.8, &mut rng);
    }
    // 0.02 decay empties in about 50 ticks even on a tall surface
    for _ in 0..55 {
        fx.tick(1_000_000.0);
    }
    assert_eq!(fx.counts().scan_lines, 0);
}

#[test]
fn everything_expires_and_size_never_grows_without_spawns() {
    let mut fx = populated(FxConfig::default());
    let mut prev = fx.len();
    for _ in 0..150 {
        fx.tick(480.0);
        assert!(fx.len() <= prev);
        prev = fx.len();
    }
    assert!(fx.is_empty());
}

#[test]
fn scan_line_leaves_past_the_bottom() {
    let mut rng = rng();
    let mut fx = EffectCollections::new(FxConfig::default());
    fx.spawn_scan_line(0.0, 0.8, &mut rng);
    // a zero-height surface still keeps lines for the 50 px overscroll
    fx.tick(0.0);
    assert_eq!(fx.counts().scan_lines, 1);
    // at 2 px per tick or more the margin is crossed by tick 25, while
    // life is still at 0.5
    for _ in 0..25 {
        fx.tick(0.0);
    }
    assert_eq!(fx.counts().scan_lines, 0);
}

#[test]
fn data_streams_end_when_progress_completes() {
    let mut rng = rng();
    let mut fx = EffectCollections::new(FxConfig::default());
    fx.spawn_data_stream(Vec2::ZERO, Vec2::new(100.0, 0.0), &mut rng);
    // 0.05 per tick reaches 1.0 on the 20th tick, long before life runs out
    for _ in 0..19 {
        fx.tick(480.0);
    }
    assert_eq!(fx.counts().data_streams, 1);
    fx.tick(480.0);
    fx.tick(480.0);
    assert_eq!(fx.counts().data_streams, 0);
}

#[test]
fn energy_field_phase_advances() {
    let mut rng = rng();
    let mut fx = EffectCollections::new(FxConfig::default());
    fx.spawn_energy_field(0.0, 0.0, 60.0, &mut rng);
    let before = fx.energy_fields().next().map(|f| f.pulse_phase).unwrap_or_default();
    fx.tick(480.0);
    let after = fx.energy_fields().next().map(|f| f.pulse_phase).unwrap_or_default();
    assert!((after - before - 0.1).abs() < 1e-5);
}

#[test]
fn cap_evicts_the_oldest() {
    let cfg = FxConfig {
        max_effects_per_collection: 3,
        ..FxConfig::default()
    };
    let mut rng = rng();
    let mut fx = EffectCollections::new(cfg);
    for y in [1.0, 2.0, 3.0, 4.0, 5.0] {
        fx.spawn_scan_line(y, 0.8, &mut rng);
    }
    let ys: Vec<f32> = fx.scan_lines().map(|l| l.y).collect();
    assert_eq!(ys, vec![3.0, 4.0, 5.0]);
}

#[test]
fn zero_cap_means_unbounded() {
    let cfg = FxConfig {
        max_effects_per_collection: 0,
        ..FxConfig::default()
    };
    let mut rng = rng();
    let mut fx = EffectCollections::new(cfg);
    for _ in 0..1000 {
        fx.spawn_energy_field(0.0, 0.0, 60.0, &mut rng);
    }
    assert_eq!(fx.counts().energy_fields, 1000);
}

#[test]
fn advance_renders_only_live_members() {
    let mut rng = rng();
    let mut fx = EffectCollections::new(FxConfig::default());
    fx.spawn_scan_line(10.0, 1.0, &mut rng);
    let mut surface = RecordingSurface::new(640.0, 480.0);
    for _ in 0..60 {
        surface.take_commands();
        fx.advance(&mut surface);
        let painted = surface.commands.iter().any(DrawCmd::is_paint);
        assert_eq!(painted, !fx.is_empty());
        if fx.is_empty() {
            return;
        }
    }
    panic!("scan line outlived its decay");
}

#[test]
fn rendered_alpha_follows_updated_life() {
    let mut rng = rng();
    let mut fx = EffectCollections::new(FxConfig::default());
    fx.spawn_scan_line(10.0, 0.5, &mut rng);
    let mut surface = RecordingSurface::new(640.0, 480.0);
    fx.advance(&mut surface);
    let expected = 0.98 * 0.5;
    let first_alpha = surface.commands.iter().find_map(|c| match c {
        DrawCmd::Alpha(a) => Some(*a),
        _ => None,
    });
    assert!(first_alpha.is_some_and(|a| (a - expected).abs() < 1e-5));
}

#[test]
fn energy_field_draws_three_rings() {
    let mut rng = rng();
    let mut fx = EffectCollections::new(FxConfig::default());
    fx.spawn_energy_field(50.0, 50.0, 60.0, &mut rng);
    let mut surface = RecordingSurface::new(640.0, 480.0);
    fx.render(&mut surface);
    assert_eq!(surface.count(|c| matches!(c, DrawCmd::Arc { .. })), 3);
    assert_eq!(surface.count(|c| matches!(c, DrawCmd::StrokePath)), 3);
}

#[test]
fn data_stream_symbols_are_staggered() {
    let mut rng = rng();
    let cfg = FxConfig {
        data_stream_advance: 0.07,
        ..FxConfig::default()
    };
    let mut fx = EffectCollections::new(cfg);
    fx.spawn_data_stream(Vec2::ZERO, Vec2::new(100.0, 0.0), &mut rng);
    let mut surface = RecordingSurface::new(640.0, 480.0);
    // progress 0.21 after three ticks; with a 0.05 stagger symbols 0..=4
    // have started and the rest are still behind the head
    for _ in 0..3 {
        surface.take_commands();
        fx.advance(&mut surface);
    }
    let drawn: Vec<&str> = surface.texts().collect();
    assert_eq!(drawn.len(), 5);
}

#[test]
fn digital_grid_scrolls_with_the_effects_clock() {
    let mut fx = EffectCollections::new(FxConfig::default());
    let mut surface = RecordingSurface::new(400.0, 200.0);
    fx.render_digital_grid(&mut surface, 0.05);
    let first_x = surface.commands.iter().find_map(|c| match c {
        DrawCmd::MoveTo(x, _) => Some(*x),
        _ => None,
    });
    assert_eq!(first_x, Some(0.0));
    assert_eq!(surface.count(|c| matches!(c, DrawCmd::StrokePath)), 10 + 5);

    for _ in 0..10 {
        fx.tick(200.0);
    }
    surface.take_commands();
    fx.render_digital_grid(&mut surface, 0.05);
    let shifted = surface.commands.iter().find_map(|c| match c {
        DrawCmd::MoveTo(x, _) => Some(*x),
        _ => None,
    });
    // 0.16 s at 20 px/s
    assert!(shifted.is_some_and(|x| (x + 3.2).abs() < 1e-3));
}

#[test]
fn clear_empties_every_collection() {
    let mut fx = populated(FxConfig::default());
    fx.clear();
    assert!(fx.is_empty());
    let mut surface = RecordingSurface::new(100.0, 100.0);
    fx.render(&mut surface);
    assert!(surface.commands.is_empty());
}

#[test]
fn life_is_clamped_to_one_when_decay_goes_negative() {
    let cfg = FxConfig {
        energy_field_decay: -0.5,
        ..FxConfig::default()
    };
    let mut fx = EffectCollections::new(cfg);
    fx.spawn_energy_field(100.0, 100.0, 60.0, &mut rng());
    for _ in 0..3 {
        fx.tick(480.0);
        assert_eq!(lives(&fx), vec![1.0]);
    }
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "non-finite")]
fn non_finite_life_fails_loudly_in_debug() {
    let cfg = FxConfig {
        scan_line_decay: f32::NAN,
        ..FxConfig::default()
    };
    let mut fx = EffectCollections::new(cfg);
    fx.spawn_scan_line(10.0, 1.0, &mut rng());
    fx.tick(480.0);
}

#[cfg(not(debug_assertions))]
#[test]
fn non_finite_life_is_pruned_in_release() {
    let cfg = FxConfig {
        scan_line_decay: f32::NAN,
        energy_field_decay: f32::INFINITY,
        ..FxConfig::default()
    };
    let mut fx = EffectCollections::new(cfg);
    fx.spawn_scan_line(10.0, 1.0, &mut rng());
    fx.spawn_energy_field(100.0, 100.0, 60.0, &mut rng());
    fx.tick(480.0);
    assert!(fx.is_empty());
}
