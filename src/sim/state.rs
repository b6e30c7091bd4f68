//! Simulation state and core types
//!
//! Everything the tick mutates lives in one owned aggregate, [`GasState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ensemble::ParticleEnsemble;
use super::kinetics::KineticModel;
use super::pressure;
use crate::Settings;
use crate::consts::WATER_BOILING_POINT;

/// Current phase of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SimPhase {
    #[default]
    Running,
    /// Pressure went over the limit; only a reset leaves this phase
    Popped,
}

/// The circular balloon wall
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Container {
    /// Fixed for the lifetime of the simulation
    pub center: Vec2,
    pub radius: f32,
}

impl Container {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Disk area, used as the 2D volume
    #[inline]
    pub fn area(&self) -> f32 {
        pressure::area(self.radius)
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GasState {
    /// Start-up configuration (never changes after construction)
    pub settings: Settings,
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    pub ensemble: ParticleEnsemble,
    pub container: Container,
    /// Kelvin, never below `settings.min_temperature`
    pub temperature: f32,
    /// Derived from count, temperature and area; recomputed every tick
    pub pressure: f32,
    pub phase: SimPhase,
    /// Ticks since start or last reset
    pub time_ticks: u64,
}

impl GasState {
    /// Create a new simulation at the starting constants
    pub fn new(settings: Settings, seed: u64) -> Self {
        let settings = settings.sanitized();
        let center = Vec2::new(settings.screen_width / 2.0, settings.screen_height / 2.0);
        let kinetics = KineticModel::from_settings(&settings);

        let mut state = Self {
            container: Container::new(center, settings.starting_radius),
            ensemble: ParticleEnsemble::new(kinetics, settings.wall_margin),
            temperature: settings.starting_temperature,
            pressure: 0.0,
            phase: SimPhase::Running,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            settings,
        };
        state.populate();
        state
    }

    /// Return to the starting constants with freshly sampled particles.
    ///
    /// The RNG keeps its stream, so each reset gives a new layout.
    pub fn reset(&mut self) {
        self.container.radius = self.settings.starting_radius;
        self.temperature = self.settings.starting_temperature;
        self.phase = SimPhase::Running;
        self.time_ticks = 0;
        self.populate();
        log::info!(
            "Simulation reset: n={}, T={}K, r={}, P={:.2}",
            self.particle_count(),
            self.temperature,
            self.container.radius,
            self.pressure
        );
    }

    fn populate(&mut self) {
        self.ensemble.initialize(
            self.settings.starting_particles,
            &self.container,
            self.temperature,
            &mut self.rng,
        );
        self.recompute_pressure();
    }

    #[inline]
    pub fn particle_count(&self) -> usize {
        self.ensemble.len()
    }

    #[inline]
    pub fn max_radius(&self) -> f32 {
        self.settings.max_radius()
    }

    pub fn add_particle(&mut self) {
        self.ensemble.add_one(&self.container, self.temperature, &mut self.rng);
        log::debug!("Added particle, n={}", self.particle_count());
    }

    pub fn remove_particle(&mut self) {
        if self.ensemble.remove_one() {
            log::debug!("Removed particle, n={}", self.particle_count());
        }
    }

    /// Change temperature by `delta`, clamped at the floor, rescaling
    /// velocities from the old temperature to the new one.
    ///
    /// A delta that is not finite, or that would overflow the temperature or
    /// pressure, is ignored.
    pub fn change_temperature(&mut self, delta: f32) {
        let old = self.temperature;
        let new = (old + delta).max(self.settings.min_temperature);
        let overflows = !new.is_finite()
            || !pressure::pressure(
                self.particle_count(),
                self.settings.gas_constant,
                new,
                self.container.area(),
            )
            .is_finite();
        if !delta.is_finite() || overflows {
            log::warn!("Ignoring temperature delta {delta} at {old}K");
            return;
        }
        self.ensemble.rescale_velocities(old, new);
        self.temperature = new;
        log::debug!("Temperature {old}K -> {new}K");
    }

    /// Change radius by `delta`, clamped to [min_radius, max_radius]
    pub fn change_radius(&mut self, delta: f32) {
        let radius =
            (self.container.radius + delta).clamp(self.settings.min_radius, self.max_radius());
        self.container.radius = radius;
        log::debug!("Radius {radius}");
    }

    /// Recompute pressure from the current count, temperature and area
    pub fn recompute_pressure(&mut self) -> f32 {
        self.pressure = pressure::pressure(
            self.particle_count(),
            self.settings.gas_constant,
            self.temperature,
            self.container.area(),
        );
        self.pressure
    }

    /// Pop the balloon if the latest pressure is over the limit
    pub fn update_phase(&mut self) {
        if self.phase == SimPhase::Running
            && pressure::is_over_pressure(self.pressure, self.settings.max_pressure)
        {
            self.phase = SimPhase::Popped;
            log::info!(
                "Balloon popped: P={:.1} > {} (n={}, T={}K, r={})",
                self.pressure,
                self.settings.max_pressure,
                self.particle_count(),
                self.temperature,
                self.container.radius
            );
        }
    }

    /// Read-only view for the presentation layer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            particle_positions: self.ensemble.positions().collect(),
            particle_count: self.particle_count(),
            temperature: self.temperature,
            pressure: self.pressure,
            max_pressure: self.settings.max_pressure,
            radius: self.container.radius,
            center: self.container.center,
            area: self.container.area(),
            phase: self.phase,
        }
    }
}

/// Per-tick view of the simulation handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub particle_positions: Vec<Vec2>,
    pub particle_count: usize,
    pub temperature: f32,
    pub pressure: f32,
    pub max_pressure: f32,
    pub radius: f32,
    pub center: Vec2,
    /// 2D stand-in for volume
    pub area: f32,
    pub phase: SimPhase,
}

impl Snapshot {
    /// Fraction of the pop pressure reached
    pub fn balloon_stage(&self) -> f32 {
        self.pressure / self.max_pressure
    }

    /// Balloon sprite index (0..=3), one per quarter of the pop pressure
    pub fn balloon_sprite(&self) -> usize {
        match self.balloon_stage() {
            s if s < 0.25 => 0,
            s if s < 0.5 => 1,
            s if s < 0.75 => 2,
            _ => 3,
        }
    }

    /// Balloon sprite scale relative to the wall diameter
    pub fn balloon_scale(&self) -> f32 {
        (1.0 + self.balloon_stage() / 2.0).min(1.7)
    }

    /// Particle colour: blue when cold, red from boiling water upward
    pub fn particle_tint(&self) -> [u8; 3] {
        let c = (self.temperature.min(WATER_BOILING_POINT) / WATER_BOILING_POINT * 255.0) as u8;
        [c, 100, 255 - c]
    }

    /// HUD lines
    pub fn stats_lines(&self) -> [String; 4] {
        [
            format!("n (particles): {}", self.particle_count),
            format!("V (volume): {:.1}", self.area),
            format!("T (temp): {:.0}K", self.temperature),
            format!("P (pressure): {:.1} / {:.0}", self.pressure, self.max_pressure),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn state() -> GasState {
        GasState::new(Settings::default(), 12345)
    }

    #[test]
    fn test_new_state_uses_starting_constants() {
        let s = state();
        assert_eq!(s.particle_count(), STARTING_PARTICLES);
        assert_eq!(s.temperature, STARTING_TEMPERATURE);
        assert_eq!(s.container.radius, STARTING_RADIUS);
        assert_eq!(s.container.center, Vec2::new(640.0, 360.0));
        assert_eq!(s.phase, SimPhase::Running);
        assert!((s.pressure - 5.29).abs() < 0.01);
    }

    #[test]
    fn test_same_seed_same_particles() {
        let a = state();
        let b = state();
        assert_eq!(a.ensemble.particles(), b.ensemble.particles());
    }

    #[test]
    fn test_temperature_clamps_at_floor() {
        let mut s = state();
        s.change_temperature(100.0);
        s.change_temperature(-1000.0);
        assert_eq!(s.temperature, MIN_TEMPERATURE);

        let expected = s.ensemble.kinetics().speed(MIN_TEMPERATURE);
        for p in s.ensemble.particles() {
            assert!((p.vel.length() - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn test_radius_clamps() {
        let mut s = state();
        s.change_radius(-100.0);
        assert_eq!(s.container.radius, MIN_RADIUS);
        s.change_radius(1000.0);
        assert_eq!(s.container.radius, s.max_radius());
    }

    #[test]
    fn test_pop_is_latched() {
        let mut s = state();
        s.pressure = MAX_PRESSURE + 1.0;
        s.update_phase();
        assert_eq!(s.phase, SimPhase::Popped);

        s.pressure = 0.0;
        s.update_phase();
        assert_eq!(s.phase, SimPhase::Popped);
    }

    #[test]
    fn test_reset_restores_start() {
        let mut s = state();
        s.change_temperature(500.0);
        s.change_radius(30.0);
        s.add_particle();
        s.phase = SimPhase::Popped;
        s.time_ticks = 99;

        s.reset();

        assert_eq!(s.particle_count(), STARTING_PARTICLES);
        assert_eq!(s.temperature, STARTING_TEMPERATURE);
        assert_eq!(s.container.radius, STARTING_RADIUS);
        assert_eq!(s.phase, SimPhase::Running);
        assert_eq!(s.time_ticks, 0);
        assert!((s.pressure - 5.29).abs() < 0.01);
    }

    #[test]
    fn test_snapshot_presentation_helpers() {
        let mut snap = state().snapshot();
        assert_eq!(snap.particle_positions.len(), STARTING_PARTICLES);
        assert_eq!(snap.balloon_sprite(), 0);
        assert_eq!(snap.particle_tint(), [34, 100, 221]);

        snap.pressure = 400.0;
        assert_eq!(snap.balloon_sprite(), 3);
        assert!((snap.balloon_scale() - 1.4).abs() < 1e-5);

        snap.pressure = 5000.0;
        snap.temperature = 1000.0;
        assert_eq!(snap.balloon_scale(), 1.7);
        assert_eq!(snap.particle_tint(), [255, 100, 0]);
    }

    #[test]
    fn test_stats_lines() {
        let lines = state().snapshot().stats_lines();
        assert_eq!(lines[0], "n (particles): 100");
        assert_eq!(lines[1], "V (volume): 7854.0");
        assert_eq!(lines[2], "T (temp): 50K");
        assert_eq!(lines[3], "P (pressure): 5.3 / 500");
    }

    #[test]
    fn test_snapshot_serializes() {
        let snap = state().snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.particle_count, snap.particle_count);
        assert_eq!(back.phase, SimPhase::Running);
    }
}
