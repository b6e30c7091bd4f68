//! Balloon Gas entry point
//!
//! Headless driver: heats the balloon on a fixed timestep until it pops,
//! logging the HUD statistics once per simulated second. Rendering and
//! keyboard input belong to the host application.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;

    use balloon_gas::Settings;
    use balloon_gas::sim::{GasState, InputEvent, SimPhase, TickInput, tick};

    /// Give up after two simulated minutes
    const MAX_TICKS: u64 = 60 * 120;
    /// Heat every few ticks so the run lasts a little while
    const HEAT_EVERY: u64 = 4;

    env_logger::init();
    log::info!("Balloon Gas (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => {
            if !Path::new(&path).exists() {
                if let Err(e) = Settings::default().save(&path) {
                    log::warn!("Could not write default settings to {path}: {e}");
                }
            }
            Settings::load(&path)
        }
        None => Settings::default(),
    };

    let seed = settings.seed.unwrap_or_else(rand::random);
    let ticks_per_second = (1.0 / settings.sim_dt).round().max(1.0) as u64;
    let dt = settings.sim_dt;
    let mut state = GasState::new(settings, seed);
    log::info!("Seed {seed}, {} particles", state.particle_count());

    let heat = TickInput::single(InputEvent::IncreaseTemperature);
    let idle = TickInput::default();

    for n in 1..=MAX_TICKS {
        let input = if n % HEAT_EVERY == 0 { &heat } else { &idle };
        tick(&mut state, input, dt);

        if n % ticks_per_second == 0 {
            log::info!("{}", state.snapshot().stats_lines().join(" | "));
        }
        if state.phase == SimPhase::Popped {
            log::info!("Popped after {n} ticks");
            break;
        }
    }

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Could not serialize snapshot: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The host page drives the simulation through the library
}
