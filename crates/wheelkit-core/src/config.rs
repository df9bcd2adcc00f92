//! Wheel configuration
//!
//! The parameter set driving segment geometry and spin detection.
//! Mutating any geometry field triggers a full layout rebuild in the
//! wheel crate; validation here is what makes rebuilds all-or-nothing.

use crate::error::{Result, WheelError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for wheel geometry and spin detection
///
/// Angular resolution works in two tiers: `segment_resolution` is the
/// total number of angular subdivisions of the full circle, and
/// `vertex_density` is how many of those subdivisions one segment spans.
/// `resolution_multiplier` scales both when tessellating, without
/// changing the segment sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelConfiguration {
    /// Outer radius of the wheel
    pub wheel_radius: f64,
    /// Total angular subdivisions of the full circle
    pub segment_resolution: u32,
    /// Subdivisions spanned by a single segment
    pub vertex_density: u32,
    /// Tessellation multiplier applied to both tiers
    pub resolution_multiplier: u32,
    /// Minimum angle change (degrees) that counts as a divider crossing
    pub step_angle_deg: f64,
    /// Velocity threshold for stop detection, in degrees per second.
    /// Velocity is negative while spinning; the wheel counts as settled
    /// once velocity is no longer more negative than this value.
    pub stop_velocity: f64,
    /// Minimum continuous low-velocity time before declaring a stop
    pub stop_hold_secs: f64,
    /// Remove the winning segment from the wheel after each spin
    pub remove_winners: bool,
    /// Optional auto-stop: force the wheel to stop after this duration,
    /// independent of physical settling
    pub auto_stop: Option<Duration>,
}

impl Default for WheelConfiguration {
    fn default() -> Self {
        Self {
            wheel_radius: 5.0,
            segment_resolution: 64,
            vertex_density: 8,
            resolution_multiplier: 1,
            step_angle_deg: 5.0,
            stop_velocity: -1.0,
            stop_hold_secs: 1.0,
            remove_winners: false,
            auto_stop: None,
        }
    }
}

impl WheelConfiguration {
    /// Validate the configuration
    ///
    /// Returns `InvalidConfiguration` on the first violated constraint.
    /// Callers must validate before installing a new configuration so a
    /// rejected update leaves the previous one authoritative.
    pub fn validate(&self) -> Result<()> {
        if !(self.wheel_radius > 0.0) {
            return Err(WheelError::invalid_configuration(format!(
                "wheel_radius must be positive, got {}",
                self.wheel_radius
            )));
        }
        if self.vertex_density == 0 {
            return Err(WheelError::invalid_configuration(
                "vertex_density must be at least 1",
            ));
        }
        if self.segment_resolution < self.vertex_density {
            return Err(WheelError::invalid_configuration(format!(
                "segment_resolution ({}) must be at least vertex_density ({})",
                self.segment_resolution, self.vertex_density
            )));
        }
        if self.segment_resolution % self.vertex_density != 0 {
            return Err(WheelError::invalid_configuration(format!(
                "segment_resolution ({}) must be divisible by vertex_density ({})",
                self.segment_resolution, self.vertex_density
            )));
        }
        if self.resolution_multiplier == 0 {
            return Err(WheelError::invalid_configuration(
                "resolution_multiplier must be at least 1",
            ));
        }
        if !(self.step_angle_deg > 0.0) {
            return Err(WheelError::invalid_configuration(format!(
                "step_angle_deg must be positive, got {}",
                self.step_angle_deg
            )));
        }
        if !(self.stop_hold_secs > 0.0) {
            return Err(WheelError::invalid_configuration(format!(
                "stop_hold_secs must be positive, got {}",
                self.stop_hold_secs
            )));
        }
        Ok(())
    }

    /// Angular width of one segment, in degrees
    pub fn segment_sweep_deg(&self) -> f64 {
        360.0 * self.vertex_density as f64 / self.segment_resolution as f64
    }

    /// Maximum number of segments the configured resolution can hold
    pub fn max_parts(&self) -> u32 {
        self.segment_resolution / self.vertex_density
    }

    /// Triangles tessellating one segment's sector
    pub fn triangles_per_segment(&self) -> u32 {
        self.vertex_density * self.resolution_multiplier
    }

    /// Total angular subdivisions of the tessellated full circle
    pub fn total_subdivisions(&self) -> u32 {
        self.segment_resolution * self.resolution_multiplier
    }
}
