//! Simulation tick
//!
//! Fixed per-tick order: input events -> wall collisions -> pressure -> pop check.

use serde::{Deserialize, Serialize};

use super::collision;
use super::state::{GasState, SimPhase};

/// A debounced player action
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    AddParticle,
    RemoveParticle,
    /// +temperature_step
    IncreaseTemperature,
    /// -temperature_step, floored at min_temperature
    DecreaseTemperature,
    /// Arbitrary temperature delta in Kelvin (e.g. from an external sensor)
    AdjustTemperature(f32),
    /// +radius_step, capped at the screen-derived maximum
    IncreaseRadius,
    /// -radius_step, floored at min_radius
    DecreaseRadius,
    Reset,
}

/// Input events for a single tick, each applied exactly once
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn single(event: InputEvent) -> Self {
        Self {
            events: vec![event],
        }
    }
}

/// Advance the simulation by one timestep
pub fn tick(state: &mut GasState, input: &TickInput, dt: f32) {
    // Parameter changes first; a reset in the same tick wins over them
    let mut reset = false;
    for &event in &input.events {
        match event {
            InputEvent::Reset => reset = true,
            _ => apply_event(state, event),
        }
    }
    if reset {
        state.reset();
    }

    state.time_ticks += 1;

    if state.phase != SimPhase::Popped {
        collision::advance(&mut state.ensemble, &state.container, dt, state.phase);
    }

    state.recompute_pressure();
    state.update_phase();
}

/// Apply one parameter-changing event; ignored once the balloon has popped.
///
/// `Reset` is handled by [`tick`] after all other events.
fn apply_event(state: &mut GasState, event: InputEvent) {
    if state.phase == SimPhase::Popped {
        log::debug!("Ignoring {event:?} while popped");
        return;
    }

    let temperature_step = state.settings.temperature_step;
    let radius_step = state.settings.radius_step;

    match event {
        InputEvent::AddParticle => state.add_particle(),
        InputEvent::RemoveParticle => state.remove_particle(),
        InputEvent::IncreaseTemperature => state.change_temperature(temperature_step),
        InputEvent::DecreaseTemperature => state.change_temperature(-temperature_step),
        InputEvent::AdjustTemperature(delta) => state.change_temperature(delta),
        InputEvent::IncreaseRadius => state.change_radius(radius_step),
        InputEvent::DecreaseRadius => state.change_radius(-radius_step),
        InputEvent::Reset => {}
    }
}
