//! Deterministic simulation module
//!
//! All simulation logic lives here. This module must be pure and deterministic:
//! - Timestep supplied by the host loop
//! - Seeded RNG only
//! - Stable particle order (insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod ensemble;
pub mod kinetics;
pub mod pressure;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, advance, reflect_velocity, wall_collision};
pub use ensemble::{Particle, ParticleEnsemble};
pub use kinetics::KineticModel;
pub use state::{Container, GasState, SimPhase, Snapshot};
pub use tick::{InputEvent, TickInput, tick};
