//! Pointer/selection resolver
//!
//! A fixed pointer sits just over the rim; while the wheel is running,
//! the resolver records whichever segment's sector is currently under
//! it. The recorded value is what the spin state machine samples when
//! the wheel settles.
//!
//! Last writer wins: if no sector is under the pointer (a geometry seam,
//! or a wheel below part capacity), the resolver retains its previous
//! value rather than resetting, so a stop event always has a segment.

use crate::layout::WheelLayout;
use crate::spin::SpinMode;

/// Tracks the segment currently under a fixed pointer location
#[derive(Debug, Clone)]
pub struct PointerResolver {
    /// World angle of the pointer, in degrees
    angle_deg: f64,
    /// Radial distance of the pointer from the wheel axis
    radial_distance: f64,
    /// Most recently observed segment id
    current: Option<u64>,
}

impl PointerResolver {
    /// Create a resolver for a pointer at the given world position
    pub fn new(angle_deg: f64, radial_distance: f64) -> Self {
        Self {
            angle_deg,
            radial_distance,
            current: None,
        }
    }

    /// World angle of the pointer
    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    /// Move the pointer to a new fixed position
    pub fn place(&mut self, angle_deg: f64, radial_distance: f64) {
        self.angle_deg = angle_deg;
        self.radial_distance = radial_distance;
    }

    /// Record the segment under the pointer, if the wheel is running and
    /// a sector overlaps the pointer position
    pub fn observe(&mut self, layout: &WheelLayout, wheel_angle_deg: f64, mode: SpinMode) {
        if mode != SpinMode::Running {
            return;
        }
        if self.radial_distance > layout.radius() {
            return;
        }
        if let Some(id) = layout.segment_at(self.angle_deg, wheel_angle_deg) {
            self.current = Some(id);
        }
    }

    /// The most recently observed segment
    pub fn current(&self) -> Option<u64> {
        self.current
    }
}
