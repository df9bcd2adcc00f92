//! Spin state machine
//!
//! Owns the Stopped/Running modes. Every tick it reads actuator
//! telemetry, detects divider crossings (step cues) and full stop (win
//! detection), and reports the transition to the caller, which raises
//! the stopped event exactly once per spin.
//!
//! Velocity is negative while spinning and approaches zero from below;
//! "settled" means velocity is no longer more negative than the stop
//! threshold, continuously for the configured hold duration. The hold
//! timer resets while velocity is still past the threshold, so an early
//! divider-cross burst cannot bank hold-time toward a premature stop.

use tracing::{debug, trace};
use wheelkit_core::WheelConfiguration;

use crate::actuator::Actuator;

/// Wheel spin mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinMode {
    /// The wheel is at rest
    #[default]
    Stopped,
    /// The wheel is spinning
    Running,
}

impl std::fmt::Display for SpinMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpinMode::Stopped => write!(f, "Stopped"),
            SpinMode::Running => write!(f, "Running"),
        }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickReport {
    /// The wheel rotated past the step angle since the last crossing
    pub divider_step: bool,
    /// The wheel transitioned Running -> Stopped this tick
    pub stopped: bool,
}

/// Converts continuous rotation into discrete stop/step events
#[derive(Debug, Clone, Default)]
pub struct SpinMachine {
    mode: SpinMode,
    last_angle: f64,
    still_time: f64,
    auto_stop_remaining: Option<f64>,
}

impl SpinMachine {
    /// Create a machine in the Stopped state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode
    pub fn mode(&self) -> SpinMode {
        self.mode
    }

    /// Start a spin: engage the motor and enter Running
    ///
    /// Resets the stillness timer, clears any previously scheduled
    /// auto-stop, and arms a new one if the configuration asks for it.
    pub fn start(
        &mut self,
        actuator: &mut dyn Actuator,
        target_velocity: f64,
        force: f64,
        config: &WheelConfiguration,
    ) {
        actuator.engage(target_velocity, force);
        self.mode = SpinMode::Running;
        self.last_angle = actuator.angle();
        self.still_time = 0.0;
        self.auto_stop_remaining = config.auto_stop.map(|d| d.as_secs_f64());
        debug!(target_velocity, force, "spin started");
    }

    /// Abort the spin immediately
    ///
    /// Disengages the motor, cancels any pending auto-stop, and returns
    /// to Stopped without declaring a winner. Callable at any time.
    pub fn stop(&mut self, actuator: &mut dyn Actuator) {
        actuator.disengage();
        self.auto_stop_remaining = None;
        self.still_time = 0.0;
        if self.mode == SpinMode::Running {
            self.mode = SpinMode::Stopped;
            debug!("spin aborted");
        }
    }

    /// Advance the machine by one simulation tick
    ///
    /// Reads the actuator's angle and velocity. While Running, detects
    /// divider crossings and stop conditions; at most one tick per spin
    /// reports `stopped`. An armed auto-stop forces the transition when
    /// it expires, pre-empting natural settling.
    pub fn tick(
        &mut self,
        dt: f64,
        actuator: &mut dyn Actuator,
        config: &WheelConfiguration,
    ) -> TickReport {
        let mut report = TickReport::default();
        if self.mode != SpinMode::Running {
            return report;
        }

        let angle = actuator.angle();
        let velocity = actuator.velocity();

        if (angle - self.last_angle).abs() > config.step_angle_deg {
            self.last_angle = angle;
            report.divider_step = true;
        }

        let auto_stop_expired = match self.auto_stop_remaining.as_mut() {
            Some(remaining) => {
                *remaining -= dt;
                *remaining <= 0.0
            }
            None => false,
        };
        if auto_stop_expired {
            debug!("auto-stop timer expired, forcing settle");
            self.settle(actuator);
            report.stopped = true;
            return report;
        }

        if velocity < config.stop_velocity {
            // Still spinning fast; hold time only counts once decayed.
            self.still_time = 0.0;
        } else {
            self.still_time += dt;
        }
        trace!(angle, velocity, still_time = self.still_time, "spin tick");

        if self.still_time > config.stop_hold_secs {
            debug!(angle, velocity, "wheel settled");
            self.settle(actuator);
            report.stopped = true;
        }

        report
    }

    fn settle(&mut self, actuator: &mut dyn Actuator) {
        actuator.disengage();
        self.mode = SpinMode::Stopped;
        self.still_time = 0.0;
        self.auto_stop_remaining = None;
    }
}
