//! Fixed-capacity particle pool for the ball's glowing trail
//!
//! Slots are allocated once and recycled. A slot whose life has run out is
//! dead: it is not drawn and may be overwritten by the next spawn.

use glam::{Vec2, Vec4};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::consts::{PARTICLE_FADE_RATE, PARTICLE_LIFE, PARTICLE_VELOCITY_DAMPING};

/// A particle for the trail effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// RGBA; alpha fades while alive
    pub color: Vec4,
    /// Seconds left, `<= 0` means dead
    pub life: f32,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            color: Vec4::ONE,
            life: 0.0,
        }
    }
}

impl Particle {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Ring of reusable particle slots
#[derive(Debug, Clone)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    /// Slot handed out by the previous spawn; the next search starts here
    last_used: usize,
    rng: Pcg32,
}

impl ParticlePool {
    pub fn new(capacity: usize, seed: u64) -> Self {
        Self {
            particles: vec![Particle::default(); capacity],
            last_used: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    /// All slots, dead ones included
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable slots, for hosts that seed a pool with a preset trail
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Particles that should be drawn this frame
    pub fn live(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|p| p.is_alive())
    }

    pub fn live_count(&self) -> usize {
        self.live().count()
    }

    /// Advance the pool one frame.
    ///
    /// Spawns `new_particles` at the emitter, then ages every live particle.
    /// Particles drift against the emitter's motion so they trail behind it.
    pub fn update(&mut self, dt: f32, emitter: &Entity, new_particles: usize, offset: Vec2) {
        if !self.particles.is_empty() {
            for _ in 0..new_particles {
                let slot = self.first_unused();
                self.respawn(slot, emitter, offset);
            }
        }

        for p in self.particles.iter_mut() {
            p.life -= dt;
            if p.is_alive() {
                p.position -= p.velocity * dt;
                p.color.w -= dt * PARTICLE_FADE_RATE;
            }
        }
    }

    /// Find a dead slot, searching forward from the last one used and
    /// wrapping once. With no dead slot left the first slot is evicted.
    ///
    /// The search starts at the last used slot itself, not the one after it.
    fn first_unused(&mut self) -> usize {
        let len = self.particles.len();
        let start = self.last_used.min(len);
        let found = (start..len)
            .chain(0..start)
            .find(|&i| !self.particles[i].is_alive());

        let slot = match found {
            Some(i) => i,
            None => {
                log::trace!("particle pool exhausted ({len} slots), evicting slot 0");
                0
            }
        };
        self.last_used = slot;
        slot
    }

    fn respawn(&mut self, slot: usize, emitter: &Entity, offset: Vec2) {
        let jitter = self.rng.random_range(-50..50) as f32 / 10.0;
        let shade = 0.5 + self.rng.random_range(0..100) as f32 / 100.0;

        let p = &mut self.particles[slot];
        p.position = emitter.position + Vec2::splat(jitter) + offset;
        p.color = Vec4::new(shade, shade, shade, 1.0);
        p.life = PARTICLE_LIFE;
        p.velocity = emitter.velocity * PARTICLE_VELOCITY_DAMPING;
    }
}
