//! Particle storage and temperature-driven velocity management

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::kinetics::KineticModel;
use super::state::Container;
use crate::scale_to_length;

/// A gas particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// The particles inside the balloon, in insertion order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleEnsemble {
    particles: Vec<Particle>,
    kinetics: KineticModel,
    /// Spawn padding inside the wall
    wall_margin: f32,
}

impl ParticleEnsemble {
    pub fn new(kinetics: KineticModel, wall_margin: f32) -> Self {
        Self {
            particles: Vec::new(),
            kinetics,
            wall_margin,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.particles.iter().map(|p| p.pos)
    }

    pub fn kinetics(&self) -> &KineticModel {
        &self.kinetics
    }

    /// Replace all particles with `count` freshly sampled ones
    pub fn initialize<R: Rng>(
        &mut self,
        count: usize,
        container: &Container,
        temperature: f32,
        rng: &mut R,
    ) {
        self.particles.clear();
        self.particles.reserve(count);
        let speed = self.kinetics.speed(temperature);
        for _ in 0..count {
            let particle = self.sample(container, speed, rng);
            self.particles.push(particle);
        }
    }

    /// Append one particle, sampled the same way as `initialize`
    pub fn add_one<R: Rng>(&mut self, container: &Container, temperature: f32, rng: &mut R) {
        let speed = self.kinetics.speed(temperature);
        let particle = self.sample(container, speed, rng);
        self.particles.push(particle);
    }

    /// Drop the newest particle, never going below one.
    ///
    /// Returns whether a particle was removed.
    pub fn remove_one(&mut self) -> bool {
        if self.particles.len() > 1 {
            self.particles.pop();
            true
        } else {
            false
        }
    }

    /// Rescale every velocity for a temperature change.
    ///
    /// Kinetic energy is proportional to T and to v², so v scales with √T.
    /// Must run before the stored temperature is overwritten.
    ///
    /// # Panics
    /// If `old_temperature` is not positive (the temperature floor was bypassed).
    pub fn rescale_velocities(&mut self, old_temperature: f32, new_temperature: f32) {
        assert!(
            old_temperature > 0.0,
            "cannot rescale from non-positive temperature {old_temperature}"
        );
        let factor = (new_temperature / old_temperature).sqrt();
        for particle in &mut self.particles {
            particle.vel *= factor;
        }
    }

    /// Position inside the spawn square, pulled onto the inner rim when it
    /// falls outside the spawn disk. This favours the rim over a true
    /// uniform disk.
    fn sample<R: Rng>(&self, container: &Container, speed: f32, rng: &mut R) -> Particle {
        let reach = (container.radius - self.wall_margin).max(0.0);
        let mut offset = Vec2::new(
            rng.random_range(-reach..=reach),
            rng.random_range(-reach..=reach),
        );
        let distance = offset.length();
        if distance > reach {
            offset *= reach / distance;
        }

        let dir = Vec2::new(rng.random_range(-1.0..=1.0), rng.random_range(-1.0..=1.0));

        Particle {
            pos: container.center + offset,
            vel: scale_to_length(dir, speed),
        }
    }
}
