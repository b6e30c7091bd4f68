//! Kinetic molecular theory: temperature to particle speed
//!
//! The root-mean-square speed of an ideal gas is `v_rms = sqrt(3RT/M)`,
//! with `M` in kg/mol. Real values (~500 m/s for O2 at room temperature)
//! are far too fast for screen space, so they are scaled down.

use serde::{Deserialize, Serialize};

use crate::Settings;

/// Converts a temperature into a scalar particle speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KineticModel {
    /// Gas constant R, J/(mol·K)
    pub gas_constant: f32,
    /// Molar mass, g/mol
    pub molar_mass: f32,
    /// Screen units per m/s
    pub display_scale: f32,
}

impl Default for KineticModel {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl KineticModel {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            gas_constant: settings.gas_constant,
            molar_mass: settings.molar_mass,
            display_scale: settings.display_speed_scale,
        }
    }

    /// Real rms speed in m/s
    #[inline]
    pub fn rms_speed(&self, temperature: f32) -> f32 {
        let molar_mass_kg = self.molar_mass / 1000.0;
        (3.0 * self.gas_constant * temperature / molar_mass_kg).sqrt()
    }

    /// Display speed in screen units per second.
    ///
    /// Callers keep `temperature` above a positive floor.
    #[inline]
    pub fn speed(&self, temperature: f32) -> f32 {
        self.rms_speed(temperature) * self.display_scale
    }
}
