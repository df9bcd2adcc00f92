//! Headless demo driver: load a roster, spin the wheel once with the
//! built-in hinge actuator, and log the winner.
//!
//! Usage: `wheelkit [roster-file] [config-file]`

use std::path::Path;
use tracing::info;
use wheelkit::{
    init_logging, Actuator, HingeActuator, SpinMode, WheelConfiguration, WheelOfFortune,
    BUILD_DATE, VERSION,
};

/// Simulation tick, matching a 50 Hz physics step
const TICK_SECS: f64 = 0.02;

/// How long the motor drives before the host releases it
const SPINUP_SECS: f64 = 2.0;

fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!("wheelkit {} (built {})", VERSION, BUILD_DATE);

    let args: Vec<String> = std::env::args().collect();

    let config = match args.get(2) {
        Some(path) => wheelkit::load_config(Path::new(path))?,
        None => WheelConfiguration::default(),
    };

    let roster = match args.get(1) {
        Some(path) => wheelkit::load_roster(Path::new(path))?,
        None => ["Alice", "Bob", "Cleo", "Dana", "Eve", "Finn"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    };

    let mut wheel = WheelOfFortune::new(config)?;
    wheel.load_roster(&roster)?;
    info!(parts = wheel.count(), "wheel ready");

    let mut actuator = HingeActuator::new();
    wheel.start_spin(&mut actuator)?;

    let mut elapsed = 0.0;
    while wheel.mode() == SpinMode::Running {
        actuator.step(TICK_SECS);
        wheel.tick(TICK_SECS, &mut actuator)?;
        elapsed += TICK_SECS;
        if actuator.is_engaged() && elapsed >= SPINUP_SECS {
            // Release the motor and let the wheel coast to a stop.
            actuator.disengage();
        }
    }

    match wheel.last_winner() {
        Some(winner) => info!(label = %winner.label, "winner"),
        None => info!("spin ended without a winner"),
    }

    Ok(())
}
