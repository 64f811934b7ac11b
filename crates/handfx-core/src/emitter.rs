//! Cursor emitters: particle trails that follow one point each.
//!
//! The orchestrator drives one primary emitter plus one per tracked hand. Per
//! hand emitters live in an [`EmitterPool`] that keeps its backing storage and
//! only resets its active length each frame.

use crate::config::FxConfig;
use crate::constants::TRAIL_PARTICLE_DECAY;
use crate::surface::{Color, CompositeOp, Surface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait CursorEmitter {
    fn update(&mut self, surface: &mut dyn Surface, anchor: Vec2);

    fn particle_count(&self) -> usize;
}

#[derive(Clone, Debug)]
struct Particle {
    pos: Vec2,
    vel: Vec2,
    life: f32,
    hue: f32,
    size: f32,
}

/// Additive glowing trail with a slowly cycling hue.
#[derive(Clone, Debug)]
pub struct ParticleTrail {
    particles: Vec<Particle>,
    per_update: usize,
    max_particles: usize,
    hue: f32,
    rng: StdRng,
}

impl ParticleTrail {
    pub fn new(cfg: &FxConfig, seed: u64) -> Self {
        Self {
            particles: Vec::with_capacity(cfg.trail_max_particles),
            per_update: cfg.trail_particles_per_update,
            max_particles: cfg.trail_max_particles,
            hue: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ParticleTrail {
    fn default() -> Self {
        Self::new(&FxConfig::default(), 0x5EED)
    }
}

impl CursorEmitter for ParticleTrail {
    fn update(&mut self, surface: &mut dyn Surface, anchor: Vec2) {
        self.hue = (self.hue + 2.0) % 360.0;
        for _ in 0..self.per_update.min(self.max_particles) {
            if self.particles.len() >= self.max_particles {
                self.particles.remove(0);
            }
            let angle = self.rng.gen::<f32>() * std::f32::consts::TAU;
            let speed = 0.5 + self.rng.gen::<f32>() * 1.5;
            self.particles.push(Particle {
                pos: anchor,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                life: 1.0,
                hue: self.hue,
                size: 2.0 + self.rng.gen::<f32>() * 3.0,
            });
        }

        self.particles.retain_mut(|p| {
            p.pos += p.vel;
            p.vel *= 0.96;
            p.life -= TRAIL_PARTICLE_DECAY;
            p.life > 0.0
        });

        surface.save();
        surface.set_composite(CompositeOp::Lighter);
        for p in &self.particles {
            let color = Color::Hsl(p.hue.round(), 100.0, 60.0);
            surface.set_alpha(p.life);
            surface.set_fill(color);
            surface.set_shadow(color, 12.0);
            surface.circle(p.pos.x, p.pos.y, p.size * p.life);
            surface.fill();
        }
        surface.restore();
    }

    fn particle_count(&self) -> usize {
        self.particles.len()
    }
}

/// Grow-only emitter storage with a per-frame active length.
#[derive(Debug)]
pub struct EmitterPool<E> {
    slots: Vec<E>,
    active: usize,
}

impl<E> Default for EmitterPool<E> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            active: 0,
        }
    }
}

impl<E: CursorEmitter> EmitterPool<E> {
    /// Make `count` emitters active, creating missing ones with `make`.
    pub fn activate(&mut self, count: usize, mut make: impl FnMut(usize) -> E) {
        while self.slots.len() < count {
            let slot = self.slots.len();
            self.slots.push(make(slot));
        }
        self.active = count;
    }

    /// Park every emitter; storage is kept for the next frame with hands.
    pub fn deactivate(&mut self) {
        self.active = 0;
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Allocated emitters, active or idle.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_slice(&self) -> &[E] {
        &self.slots[..self.active]
    }

    pub fn active_mut(&mut self) -> &mut [E] {
        &mut self.slots[..self.active]
    }

    /// Particles of the active emitters only; idle slots are frozen.
    pub fn particle_count(&self) -> usize {
        self.active_slice().iter().map(|e| e.particle_count()).sum()
    }
}
