//! Ambient background particle field.
//!
//! A fixed-count population of softly drifting dots behind the page content.
//! Each frame every particle picks up a small random jitter force, integrates
//! it into its velocity (speed-limited) and reflects off the canvas edges.

use crate::constants::{
    PALETTE, PARTICLE_ALPHA_MAX, PARTICLE_ALPHA_MIN, PARTICLE_JITTER, PARTICLE_MAX_SPEED,
    PARTICLE_SIZE_MAX, PARTICLE_SIZE_MIN, PARTICLE_VEL_RANGE,
};
use crate::paint::{Painter, Rgba};
use glam::Vec2;
use rand::prelude::*;

/// A single drifting dot. Never destroyed; mutated in place every frame.
#[derive(Clone, Debug)]
pub struct AmbientParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub size: f32,
    pub color: [u8; 3],
    pub alpha: f32,
}

/// Fixed-cardinality particle population with its own seeded RNG.
pub struct ParticleField {
    pub particles: Vec<AmbientParticle>,
    bounds: Vec2,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(bounds: Vec2, count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| AmbientParticle {
                position: Vec2::new(
                    rng.gen_range(0.0..bounds.x),
                    rng.gen_range(0.0..bounds.y),
                ),
                velocity: Vec2::new(
                    rng.gen_range(-PARTICLE_VEL_RANGE..PARTICLE_VEL_RANGE),
                    rng.gen_range(-PARTICLE_VEL_RANGE..PARTICLE_VEL_RANGE),
                ),
                acceleration: Vec2::ZERO,
                size: rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX),
                color: *PALETTE.choose(&mut rng).unwrap_or(&PALETTE[0]),
                alpha: rng.gen_range(PARTICLE_ALPHA_MIN..PARTICLE_ALPHA_MAX),
            })
            .collect::<Vec<_>>();
        log::debug!(
            "[field] spawned {} particles in {:.0}x{:.0}",
            particles.len(),
            bounds.x,
            bounds.y
        );
        Self {
            particles,
            bounds,
            rng,
        }
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Advance every particle by one frame.
    pub fn update(&mut self) {
        let Vec2 { x: w, y: h } = self.bounds;
        for p in &mut self.particles {
            let jitter = Vec2::new(
                self.rng.gen_range(-PARTICLE_JITTER..PARTICLE_JITTER),
                self.rng.gen_range(-PARTICLE_JITTER..PARTICLE_JITTER),
            );
            p.acceleration += jitter;
            p.velocity += p.acceleration;
            p.velocity = p.velocity.clamp_length_max(PARTICLE_MAX_SPEED);
            p.position += p.velocity;
            p.acceleration = Vec2::ZERO;

            // Reflect only while still heading out, so one crossing flips the
            // sign exactly once even if the particle sits past the edge for a
            // frame.
            if (p.position.x < 0.0 && p.velocity.x < 0.0)
                || (p.position.x > w && p.velocity.x > 0.0)
            {
                p.velocity.x = -p.velocity.x;
            }
            if (p.position.y < 0.0 && p.velocity.y < 0.0)
                || (p.position.y > h && p.velocity.y > 0.0)
            {
                p.velocity.y = -p.velocity.y;
            }
        }
    }

    /// Track new canvas bounds. Positions are left unchanged; drift and the
    /// edge reflection pull strays back in over the following frames.
    pub fn resize(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }

    pub fn display(&self, painter: &mut dyn Painter) {
        for p in &self.particles {
            painter.fill(Rgba::from_palette(p.color, p.alpha));
            painter.circle(p.position.x, p.position.y, p.size);
        }
    }
}
