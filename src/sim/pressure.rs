//! Ideal gas pressure
//!
//! The balloon is 2D, so the disk area stands in for volume in `PV = nRT`.

use std::f32::consts::PI;

/// Disk area of the balloon
#[inline]
pub fn area(radius: f32) -> f32 {
    PI * radius * radius
}

/// Pressure from the ideal gas law, treating the particle count as `n`
///
/// # Panics
/// If `volume` is not positive. The radius floor keeps it positive, so this
/// only fires when that invariant was broken elsewhere.
#[inline]
pub fn pressure(n: usize, gas_constant: f32, temperature: f32, volume: f32) -> f32 {
    assert!(volume > 0.0, "pressure needs a positive volume, got {volume}");
    n as f32 * gas_constant * temperature / volume
}

/// Strictly above the limit pops the balloon
#[inline]
pub fn is_over_pressure(pressure: f32, max_pressure: f32) -> bool {
    pressure > max_pressure
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::GAS_CONSTANT;
    use proptest::prelude::*;

    #[test]
    fn test_starting_area_and_pressure() {
        let v = area(50.0);
        assert!((v - 7853.98).abs() < 0.01);

        let p = pressure(100, GAS_CONSTANT, 50.0, v);
        assert!((p - 5.29).abs() < 0.01, "got {p}");
        assert!(!is_over_pressure(p, 500.0));
    }

    #[test]
    fn test_over_pressure_is_strict() {
        assert!(!is_over_pressure(500.0, 500.0));
        assert!(is_over_pressure(500.01, 500.0));
    }

    #[test]
    #[should_panic]
    fn test_zero_volume_panics() {
        pressure(10, GAS_CONSTANT, 300.0, 0.0);
    }

    proptest! {
        #[test]
        fn pressure_increases_with_temperature(
            n in 1usize..1000,
            radius in 20.0f32..340.0,
            t in 50.0f32..10_000.0,
            dt in 1.0f32..1000.0,
        ) {
            let v = area(radius);
            prop_assert!(pressure(n, GAS_CONSTANT, t + dt, v) > pressure(n, GAS_CONSTANT, t, v));
        }

        #[test]
        fn pressure_decreases_with_volume(
            n in 1usize..1000,
            radius in 20.0f32..339.0,
            dr in 1.0f32..50.0,
            t in 50.0f32..10_000.0,
        ) {
            let small = pressure(n, GAS_CONSTANT, t, area(radius));
            let large = pressure(n, GAS_CONSTANT, t, area(radius + dr));
            prop_assert!(large < small);
        }
    }
}
