//! Actuator interface
//!
//! The physical rotational driver (motor plus joint) is an external
//! collaborator. The simulation only reads its telemetry and sets a
//! target-velocity/force pair; the host steps the physics once per tick.

use wheelkit_core::{Result, WheelError};

/// Black-box angular actuator
///
/// Angle is in degrees, velocity in degrees per second. Spin velocity is
/// negative by convention (the motor drives the wheel clockwise).
pub trait Actuator {
    /// Engage the motor with a target velocity and force limit
    fn engage(&mut self, target_velocity: f64, force: f64);

    /// Disengage the motor, leaving the wheel to coast
    fn disengage(&mut self);

    /// Current joint angle in degrees
    fn angle(&self) -> f64;

    /// Current angular velocity in degrees per second
    fn velocity(&self) -> f64;
}

/// Acceleration per unit of motor force, in degrees per second squared
const FORCE_ACCELERATION: f64 = 25.0;

/// Coasting friction, as a per-second fraction of velocity lost
const COAST_FRICTION: f64 = 0.8;

/// Deterministic hinge-joint stand-in
///
/// First-order motor model: while engaged, velocity ramps toward the
/// target at a rate bounded by the motor force; while coasting, velocity
/// decays exponentially toward zero. Used by the demo driver and
/// integration tests in place of a physics engine.
#[derive(Debug, Clone)]
pub struct HingeActuator {
    angle: f64,
    velocity: f64,
    target_velocity: f64,
    force: f64,
    engaged: bool,
}

impl HingeActuator {
    /// Create an actuator at rest at angle zero
    pub fn new() -> Self {
        Self {
            angle: 0.0,
            velocity: 0.0,
            target_velocity: 0.0,
            force: 0.0,
            engaged: false,
        }
    }

    /// Create an actuator at rest at a specific angle
    pub fn at_angle(angle: f64) -> Self {
        Self {
            angle,
            ..Self::new()
        }
    }

    /// Whether the motor is currently engaged
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Advance the physics by one tick
    pub fn step(&mut self, dt: f64) {
        if self.engaged {
            let max_delta = self.force * FORCE_ACCELERATION * dt;
            let delta = (self.target_velocity - self.velocity).clamp(-max_delta, max_delta);
            self.velocity += delta;
        } else {
            self.velocity -= self.velocity * (COAST_FRICTION * dt).min(1.0);
        }
        self.angle += self.velocity * dt;
    }
}

impl Default for HingeActuator {
    fn default() -> Self {
        Self::new()
    }
}

impl Actuator for HingeActuator {
    fn engage(&mut self, target_velocity: f64, force: f64) {
        self.target_velocity = target_velocity;
        self.force = force.max(0.0);
        self.engaged = true;
    }

    fn disengage(&mut self) {
        self.engaged = false;
    }

    fn angle(&self) -> f64 {
        self.angle
    }

    fn velocity(&self) -> f64 {
        self.velocity
    }
}

/// Probe the actuator at startup
///
/// A missing or unresponsive joint is fatal at initialization: telemetry
/// must be finite before the wheel starts reading it every tick.
pub fn verify_actuator(actuator: &dyn Actuator) -> Result<()> {
    let angle = actuator.angle();
    let velocity = actuator.velocity();
    if !angle.is_finite() || !velocity.is_finite() {
        return Err(WheelError::Actuator {
            message: format!("non-finite telemetry at startup: angle {angle}, velocity {velocity}"),
        });
    }
    Ok(())
}
