//! Wheel layout builder
//!
//! Converts the segment registry plus configuration into a full set of
//! angularly-distributed sector geometries and divider placements.
//!
//! Rebuilds are wholesale: every rebuild produces a fresh `WheelLayout`
//! by value and the caller swaps it in, so a failed rebuild never leaves
//! a partially-installed layout. Rebuilds happen only on configuration
//! or segment-count changes, never per tick.

use nalgebra::{Rotation3, Vector3};
use tracing::debug;
use wheelkit_core::{Result, WheelConfiguration};

use crate::mesh::{generate_sector, SegmentGeometry};
use crate::segments::WheelSegment;

/// One placed segment: geometry plus its divider marker
#[derive(Debug, Clone)]
pub struct SegmentSlot {
    /// Id of the segment occupying this slot
    pub segment_id: u64,
    /// Sector geometry, already rotated into place
    pub geometry: SegmentGeometry,
    /// Divider marker angle, shared with the segment's leading edge
    pub divider_angle_deg: f64,
}

impl SegmentSlot {
    /// World transform for the divider marker
    pub fn divider_transform(&self) -> Rotation3<f64> {
        Rotation3::from_axis_angle(&Vector3::y_axis(), self.divider_angle_deg.to_radians())
    }
}

/// The generated wheel: ordered slots plus the shared sector parameters
#[derive(Debug, Clone, Default)]
pub struct WheelLayout {
    slots: Vec<SegmentSlot>,
    sweep_deg: f64,
    radius: f64,
}

impl WheelLayout {
    /// Build a layout for the given segments and configuration
    ///
    /// Segment `i` of `n` is placed at `i * 360 / n` degrees. Zero
    /// segments produce an empty layout, not an error.
    pub fn build(segments: &[WheelSegment], config: &WheelConfiguration) -> Result<WheelLayout> {
        config.validate()?;

        let n = segments.len();
        if n == 0 {
            debug!("rebuilding wheel layout with no segments");
            return Ok(WheelLayout {
                slots: Vec::new(),
                sweep_deg: config.segment_sweep_deg(),
                radius: config.wheel_radius,
            });
        }

        let spacing = 360.0 / n as f64;
        let mut slots = Vec::with_capacity(n);
        for (i, segment) in segments.iter().enumerate() {
            let offset = i as f64 * spacing;
            let sector = generate_sector(
                config.wheel_radius,
                config.triangles_per_segment(),
                config.total_subdivisions(),
            )?;
            slots.push(SegmentSlot {
                segment_id: segment.id,
                geometry: sector.rotated_y(offset),
                divider_angle_deg: offset,
            });
        }

        debug!(parts = n, spacing, "rebuilt wheel layout");
        Ok(WheelLayout {
            slots,
            sweep_deg: config.segment_sweep_deg(),
            radius: config.wheel_radius,
        })
    }

    /// Slots in wheel order
    pub fn slots(&self) -> &[SegmentSlot] {
        &self.slots
    }

    /// Number of placed segments
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if the layout holds no segments
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Outer radius the layout was built with
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Angular sweep of each sector, in degrees
    pub fn sweep_deg(&self) -> f64 {
        self.sweep_deg
    }

    /// Geometry for a segment id, if it is part of this layout
    pub fn geometry(&self, segment_id: u64) -> Option<&SegmentGeometry> {
        self.slots
            .iter()
            .find(|s| s.segment_id == segment_id)
            .map(|s| &s.geometry)
    }

    /// Resolve which segment's sector contains a world angle, given the
    /// wheel's current rotation
    ///
    /// Sectors are wound clockwise from their offset, so a sector at
    /// offset `o` covers local angles `[o - sweep, o)` measured
    /// clockwise. Angles between sectors (a wheel below part capacity
    /// leaves gaps) resolve to `None`.
    pub fn segment_at(&self, pointer_angle_deg: f64, wheel_angle_deg: f64) -> Option<u64> {
        if self.slots.is_empty() {
            return None;
        }
        let local = normalize_deg(pointer_angle_deg - wheel_angle_deg);
        self.slots
            .iter()
            .find(|slot| {
                let from_edge = normalize_deg(slot.divider_angle_deg - local);
                from_edge < self.sweep_deg
            })
            .map(|slot| slot.segment_id)
    }
}

/// Normalize an angle in degrees into `[0, 360)`
pub fn normalize_deg(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wheelkit_core::WheelConfiguration;

    fn segments(n: usize) -> Vec<WheelSegment> {
        (0..n)
            .map(|i| WheelSegment {
                id: i as u64,
                label: format!("{}", i + 1),
            })
            .collect()
    }

    #[test]
    fn test_build_distributes_segments() {
        let config = WheelConfiguration::default();
        for n in 1..=8 {
            let layout = WheelLayout::build(&segments(n), &config).unwrap();
            assert_eq!(layout.len(), n);
            let spacing = 360.0 / n as f64;
            for (i, slot) in layout.slots().iter().enumerate() {
                let expected = i as f64 * spacing;
                assert!((slot.divider_angle_deg - expected).abs() < 1e-9);
                assert!((slot.geometry.angular_offset_deg - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_empty_registry_builds_empty_layout() {
        let config = WheelConfiguration::default();
        let layout = WheelLayout::build(&[], &config).unwrap();
        assert!(layout.is_empty());
        assert_eq!(layout.segment_at(0.0, 0.0), None);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let config = WheelConfiguration::default();
        let segs = segments(5);
        let a = WheelLayout::build(&segs, &config).unwrap();
        let b = WheelLayout::build(&segs, &config).unwrap();
        assert_eq!(a.len(), b.len());
        for (sa, sb) in a.slots().iter().zip(b.slots()) {
            assert_eq!(sa.segment_id, sb.segment_id);
            assert_eq!(sa.geometry.vertices, sb.geometry.vertices);
            assert_eq!(sa.geometry.triangles, sb.geometry.triangles);
        }
    }

    #[test]
    fn test_invalid_config_rejected_before_building() {
        let config = WheelConfiguration {
            wheel_radius: -2.0,
            ..Default::default()
        };
        assert!(WheelLayout::build(&segments(3), &config).is_err());
    }

    #[test]
    fn test_segment_at_full_wheel() {
        // 8 segments at default config tile the full circle (sweep 45).
        let config = WheelConfiguration::default();
        let layout = WheelLayout::build(&segments(8), &config).unwrap();

        // Just clockwise of segment 0's leading edge.
        assert_eq!(layout.segment_at(-1.0, 0.0), Some(0));
        assert_eq!(layout.segment_at(-44.0, 0.0), Some(0));
        // Past segment 0's sweep, into segment 1's slot... slot 1 sits at
        // +45, covering [0, 45) clockwise, i.e. local (0, 45].
        assert_eq!(layout.segment_at(44.0, 0.0), Some(1));
    }

    #[test]
    fn test_segment_at_tracks_wheel_rotation() {
        let config = WheelConfiguration::default();
        let layout = WheelLayout::build(&segments(8), &config).unwrap();

        let fixed_pointer = -1.0;
        assert_eq!(layout.segment_at(fixed_pointer, 0.0), Some(0));
        // Rotating the wheel a quarter-turn clockwise brings slot 2
        // (offset 90) under the pointer.
        assert_eq!(layout.segment_at(fixed_pointer, -90.0), Some(2));
    }

    #[test]
    fn test_segment_at_gap_resolves_none() {
        // 2 segments spaced 180 apart, each sweeping only 45 degrees.
        let config = WheelConfiguration::default();
        let layout = WheelLayout::build(&segments(2), &config).unwrap();
        assert_eq!(layout.segment_at(-10.0, 0.0), Some(0));
        assert_eq!(layout.segment_at(-90.0, 0.0), None);
    }

    #[test]
    fn test_geometry_lookup_by_id() {
        let config = WheelConfiguration::default();
        let layout = WheelLayout::build(&segments(3), &config).unwrap();
        assert!(layout.geometry(2).is_some());
        assert!(layout.geometry(99).is_none());
    }

    #[test]
    fn test_divider_transform_matches_angle() {
        let config = WheelConfiguration::default();
        let layout = WheelLayout::build(&segments(4), &config).unwrap();
        let slot = &layout.slots()[1];
        let rotated = slot.divider_transform() * nalgebra::Point3::new(1.0, 0.0, 0.0);
        let theta = slot.divider_angle_deg.to_radians();
        assert!((rotated.x - theta.cos()).abs() < 1e-9);
        assert!((rotated.z + theta.sin()).abs() < 1e-9);
        // The divider transform and the segment geometry rotate the same
        // way, so the marker lands on the sector's leading rim vertex.
        let leading_rim = slot.geometry.vertices[1];
        let scaled = rotated * layout.radius();
        assert!((scaled - leading_rim).norm() < 1e-9);
    }
}
