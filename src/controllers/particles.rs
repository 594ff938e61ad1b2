//! Logo particle burst.
//!
//! Each click spawns a ring of particles launched at evenly spaced angles
//! with a random speed. Every frame each particle takes one Euler step
//! (velocity plus a constant downward pull) and fades linearly; a particle
//! is removed from the document on the frame its opacity reaches zero.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::ParticleConfig;
use crate::consts::PARTICLE_COLORS;
use crate::controller::{Controller, Ctx};
use crate::controllers::cursor::Point;
use crate::effect::{Effect, Target};

#[derive(Debug, Clone, PartialEq)]
struct Particle {
    id: u32,
    offset: Point,
    velocity: Point,
    opacity: f64,
}

#[derive(Debug, Clone)]
pub struct Particles {
    config: ParticleConfig,
    rng: SmallRng,
    live: Vec<Particle>,
    next_id: u32,
}

impl Particles {
    #[must_use]
    pub fn new(config: ParticleConfig, seed: u64) -> Self {
        Self { config, rng: SmallRng::seed_from_u64(seed), live: Vec::new(), next_id: 0 }
    }

    /// Number of particles still in the document.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Spawn a burst centered on `center` (viewport coordinates).
    pub fn burst(&mut self, center: Point, ctx: &mut Ctx<'_>) {
        let count = self.config.count.max(1);
        for i in 0..self.config.count {
            let angle = TAU * f64::from(i) / f64::from(count);
            let speed = self.config.min_speed + self.rng.random::<f64>() * self.config.speed_spread;
            let color = PARTICLE_COLORS[self.rng.random_range(0..PARTICLE_COLORS.len())];
            let mut particle = Particle {
                id: self.next_id,
                offset: Point::default(),
                velocity: Point::new(angle.cos() * speed, angle.sin() * speed),
                opacity: 1.0,
            };
            self.next_id = self.next_id.wrapping_add(1);
            ctx.emit(Effect::SpawnParticle { id: particle.id, x: center.x, y: center.y, color });
            // The first step runs immediately, before the next frame.
            if self.step(&mut particle, ctx) {
                self.live.push(particle);
            }
        }
        log::debug!("particles: burst of {}", self.config.count);
    }

    /// Advance one particle; returns whether it is still alive.
    fn step(&self, particle: &mut Particle, ctx: &mut Ctx<'_>) -> bool {
        particle.offset.x += particle.velocity.x * self.config.step;
        particle.offset.y += particle.velocity.y * self.config.step + self.config.gravity;
        particle.opacity -= self.config.fade;

        let target = Target::Particle(particle.id);
        ctx.emit(Effect::style(
            target.clone(),
            "transform",
            format!("translate({}px, {}px)", particle.offset.x, particle.offset.y),
        ));
        ctx.emit(Effect::style(target.clone(), "opacity", particle.opacity.to_string()));
        if particle.opacity > 0.0 {
            true
        } else {
            ctx.emit(Effect::Remove { target });
            false
        }
    }
}

impl Controller for Particles {
    fn name(&self) -> &'static str {
        "particles"
    }

    fn on_frame(&mut self, ctx: &mut Ctx<'_>) {
        let mut live = std::mem::take(&mut self.live);
        live.retain_mut(|particle| self.step(particle, ctx));
        self.live = live;
    }

    fn detach(&mut self, ctx: &mut Ctx<'_>) {
        for particle in self.live.drain(..) {
            ctx.emit(Effect::Remove { target: Target::Particle(particle.id) });
        }
    }
}
