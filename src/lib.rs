//! Balloon Gas - an Ideal Gas Law simulator
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinetics, wall collisions, pressure, phase)
//! - `settings`: Start-up configuration loaded from JSON

pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz host loop)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Screen bounds, only used to derive the maximum balloon radius
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;
    /// Gap kept between the largest balloon and the screen edge
    pub const SCREEN_EDGE_GAP: f32 = 20.0;

    /// Balloon defaults
    pub const STARTING_RADIUS: f32 = 50.0;
    pub const MIN_RADIUS: f32 = 20.0;
    pub const RADIUS_STEP: f32 = 1.0;
    /// Spawn padding inside the wall (5px outline + 3px gap)
    pub const WALL_MARGIN: f32 = 8.0;
    /// How far inside the wall a reflected particle is placed
    pub const WALL_PUSHBACK: f32 = 1.0;

    /// Gas defaults
    pub const STARTING_PARTICLES: usize = 100;
    /// Kelvin; also the temperature floor
    pub const STARTING_TEMPERATURE: f32 = 50.0;
    pub const MIN_TEMPERATURE: f32 = 50.0;
    pub const TEMPERATURE_STEP: f32 = 10.0;
    pub const MAX_PRESSURE: f32 = 500.0;

    /// Physical constants
    pub const GAS_CONSTANT: f32 = 8.314; // J/(mol·K)
    pub const MOLAR_MASS_O2: f32 = 31.989_829; // g/mol
    pub const WATER_BOILING_POINT: f32 = 373.0; // Kelvin

    /// Real rms speeds are ~500 m/s; scaled down to screen units per second
    pub const DISPLAY_SPEED_SCALE: f32 = 0.05;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Rescale `v` to the given length, keeping its direction.
///
/// A zero vector has no direction, so it becomes `(length, 0)`.
#[inline]
pub fn scale_to_length(v: Vec2, length: f32) -> Vec2 {
    if v.length_squared() > 0.0 {
        v.normalize() * length
    } else {
        Vec2::new(length, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_to_length() {
        let v = scale_to_length(Vec2::new(3.0, 4.0), 10.0);
        assert!((v.x - 6.0).abs() < 1e-5);
        assert!((v.y - 8.0).abs() < 1e-5);
    }

    #[test]
    fn test_scale_to_length_zero_falls_back_to_x_axis() {
        assert_eq!(scale_to_length(Vec2::ZERO, 2.5), Vec2::new(2.5, 0.0));
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(2.0, std::f32::consts::FRAC_PI_2);
        assert!(p.x.abs() < 1e-5);
        assert!((p.y - 2.0).abs() < 1e-5);
    }
}
