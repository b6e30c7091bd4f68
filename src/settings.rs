//! Simulation settings
//!
//! Fixed at start-up: loaded once from an optional JSON file and never
//! reconfigured while the simulation runs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Start-up configuration for the balloon simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for particle placement (None = random per run)
    pub seed: Option<u64>,
    /// Host loop timestep in seconds
    pub sim_dt: f32,

    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Balloon ===
    pub starting_radius: f32,
    pub min_radius: f32,
    pub radius_step: f32,
    /// Spawn padding inside the wall
    pub wall_margin: f32,

    // === Gas ===
    pub starting_particles: usize,
    /// Kelvin
    pub starting_temperature: f32,
    /// Kelvin; temperature never drops below this
    pub min_temperature: f32,
    pub temperature_step: f32,
    /// Pressure above which the balloon pops
    pub max_pressure: f32,

    // === Physics ===
    pub gas_constant: f32,
    /// g/mol
    pub molar_mass: f32,
    pub display_speed_scale: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            sim_dt: SIM_DT,

            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            starting_radius: STARTING_RADIUS,
            min_radius: MIN_RADIUS,
            radius_step: RADIUS_STEP,
            wall_margin: WALL_MARGIN,

            starting_particles: STARTING_PARTICLES,
            starting_temperature: STARTING_TEMPERATURE,
            min_temperature: MIN_TEMPERATURE,
            temperature_step: TEMPERATURE_STEP,
            max_pressure: MAX_PRESSURE,

            gas_constant: GAS_CONSTANT,
            molar_mass: MOLAR_MASS_O2,
            display_speed_scale: DISPLAY_SPEED_SCALE,
        }
    }
}

impl Settings {
    /// Largest balloon radius that still fits on screen
    pub fn max_radius(&self) -> f32 {
        self.screen_width.min(self.screen_height) / 2.0 - SCREEN_EDGE_GAP
    }

    /// Load settings from a JSON file, falling back to defaults on any failure.
    ///
    /// Missing keys take their default values. The result is always sanitized.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let settings = match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {e}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {e}; using defaults", path.display());
                Self::default()
            }
        };
        settings.sanitized()
    }

    /// Write settings as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Repair values that would break the simulation invariants
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.sim_dt.is_finite() && self.sim_dt > 0.0) {
            log::warn!("sim_dt {} must be positive, using {}", self.sim_dt, defaults.sim_dt);
            self.sim_dt = defaults.sim_dt;
        }
        if !(self.wall_margin.is_finite() && self.wall_margin >= 0.0) {
            log::warn!(
                "wall_margin {} must be >= 0, using {}",
                self.wall_margin,
                defaults.wall_margin
            );
            self.wall_margin = defaults.wall_margin;
        }
        // Spawn square must stay non-empty at the smallest radius
        if !(self.min_radius.is_finite() && self.min_radius > self.wall_margin + WALL_PUSHBACK) {
            let fixed = (self.wall_margin + WALL_PUSHBACK).max(defaults.min_radius);
            log::warn!("min_radius {} too small, using {fixed}", self.min_radius);
            self.min_radius = fixed;
        }
        if !(self.max_radius().is_finite() && self.max_radius() >= self.min_radius) {
            log::warn!(
                "screen {}x{} too small for min_radius {}, using default screen",
                self.screen_width,
                self.screen_height,
                self.min_radius
            );
            self.screen_width = defaults.screen_width;
            self.screen_height = defaults.screen_height;
            if self.max_radius() < self.min_radius {
                self.min_radius = defaults.min_radius;
            }
        }
        if !self.starting_radius.is_finite() {
            log::warn!(
                "starting_radius {} must be finite, using {}",
                self.starting_radius,
                defaults.starting_radius
            );
            self.starting_radius = defaults.starting_radius;
        }
        let clamped = self.starting_radius.clamp(self.min_radius, self.max_radius());
        if clamped != self.starting_radius {
            log::warn!("starting_radius {} out of range, using {clamped}", self.starting_radius);
            self.starting_radius = clamped;
        }
        if !(self.radius_step.is_finite() && self.radius_step > 0.0) {
            self.radius_step = defaults.radius_step;
        }

        if self.starting_particles == 0 {
            log::warn!("starting_particles must be >= 1, using 1");
            self.starting_particles = 1;
        }
        if !(self.min_temperature.is_finite() && self.min_temperature > 0.0) {
            log::warn!(
                "min_temperature {} must be positive, using {}",
                self.min_temperature,
                defaults.min_temperature
            );
            self.min_temperature = defaults.min_temperature;
        }
        if !(self.starting_temperature.is_finite()
            && self.starting_temperature >= self.min_temperature)
        {
            log::warn!(
                "starting_temperature {} invalid, using {}",
                self.starting_temperature,
                self.min_temperature
            );
            self.starting_temperature = self.min_temperature;
        }
        if !(self.temperature_step.is_finite() && self.temperature_step > 0.0) {
            self.temperature_step = defaults.temperature_step;
        }
        if !(self.max_pressure.is_finite() && self.max_pressure > 0.0) {
            self.max_pressure = defaults.max_pressure;
        }
        if !(self.gas_constant.is_finite() && self.gas_constant > 0.0) {
            self.gas_constant = defaults.gas_constant;
        }
        if !(self.molar_mass.is_finite() && self.molar_mass > 0.0) {
            self.molar_mass = defaults.molar_mass;
        }
        if !(self.display_speed_scale.is_finite() && self.display_speed_scale > 0.0) {
            self.display_speed_scale = defaults.display_speed_scale;
        }

        self
    }
}
