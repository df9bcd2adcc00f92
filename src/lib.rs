//! # WheelKit
//!
//! A physically-simulated wheel of fortune: a rotating disc divided into
//! labeled segments, spun through a black-box angular actuator, that
//! settles on a winning segment once its velocity decays.
//!
//! ## Architecture
//!
//! WheelKit is organized as a workspace with multiple crates:
//!
//! 1. **wheelkit-core** - Errors, wheel events, configuration
//! 2. **wheelkit-wheel** - Segment geometry, registry, layout, spin
//!    state machine, pointer resolution
//! 3. **wheelkit-settings** - Roster and configuration persistence
//! 4. **wheelkit** - Main binary integrating the crates into a headless
//!    demo driver

pub use wheelkit_core::{EventDispatcher, Result, WheelConfiguration, WheelError, WheelEvent};

pub use wheelkit_wheel::{
    generate_sector, verify_actuator, Actuator, AudioSink, HingeActuator, NullAudio,
    PointerResolver, SegmentGeometry, SegmentRegistry, SegmentSlot, SpinMachine, SpinMode,
    TickReport, User, WheelLayout, WheelOfFortune, WheelSegment, DEFAULT_MOTOR_FORCE,
    DEFAULT_TARGET_VELOCITY, DIVIDER_HIT_VOLUME, WHEEL_STEP_VOLUME, WIN_VOLUME,
};

pub use wheelkit_settings::{
    load_config, load_roster, parse_roster, save_config, save_roster, SettingsError,
    SettingsResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output, RUST_LOG environment
/// variable support, and an INFO default level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
