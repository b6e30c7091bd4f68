//! Collision detection and response against the balloon wall
//!
//! Particles are a non-interacting ideal gas: the only collisions are with the
//! circular wall, resolved independently per particle.

use glam::Vec2;

use super::ensemble::ParticleEnsemble;
use super::state::{Container, SimPhase};
use crate::consts::WALL_PUSHBACK;

/// Result of a wall check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the particle is outside the wall
    pub hit: bool,
    /// Unit vector from the balloon center toward the particle
    pub normal: Vec2,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
        }
    }
}

/// Check a point against the balloon wall
pub fn wall_collision(pos: Vec2, container: &Container) -> CollisionResult {
    let offset = pos - container.center;
    let distance = offset.length();

    if distance > container.radius {
        return CollisionResult {
            hit: true,
            normal: offset / distance,
        };
    }

    CollisionResult::miss()
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Integrate every particle by one explicit Euler step and bounce it off the wall.
///
/// Wall response is skipped once the balloon has popped. Returns the number of
/// particles that hit the wall this step.
pub fn advance(
    ensemble: &mut ParticleEnsemble,
    container: &Container,
    dt: f32,
    phase: SimPhase,
) -> usize {
    let walls_active = phase != SimPhase::Popped;
    let mut hits = 0;

    for particle in ensemble.particles_mut() {
        particle.pos += particle.vel * dt;

        if !walls_active {
            continue;
        }

        let result = wall_collision(particle.pos, container);
        if result.hit {
            particle.vel = reflect_velocity(particle.vel, result.normal);
            // Just inside the wall so the same hit can't retrigger next step
            particle.pos =
                container.center + result.normal * (container.radius - WALL_PUSHBACK);
            hits += 1;
        }
    }

    hits
}
