//! Circular-sector mesh generation
//!
//! A wheel segment is a fan of triangles in the XZ plane: one center
//! vertex at the origin and a run of rim vertices at the outer radius.
//! The fan is wound clockwise (rim angles decrease), matching the
//! winding the renderer expects for an upward-facing wheel.
//!
//! Geometry is generated in segment-local space and rotated into place
//! by the layout builder, never with a baked-in absolute offset.

use nalgebra::{Point3, Rotation3, Vector3};
use wheelkit_core::{Result, WheelError};

/// A triangulated circular sector with label anchor points
///
/// `center` and `outer_midpoint` are the two reference points a label
/// needs to sit on the segment and face outward: the label is placed at
/// `center` and aimed at `outer_midpoint`.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentGeometry {
    /// Mesh vertices; index 0 is the wheel center
    pub vertices: Vec<Point3<f64>>,
    /// Triangle indices into `vertices`
    pub triangles: Vec<[u32; 3]>,
    /// Label anchor: mean of the origin and the two outermost rim vertices
    pub center: Point3<f64>,
    /// Label aim point: midpoint of the two outermost rim vertices
    pub outer_midpoint: Point3<f64>,
    /// Rotation applied by the layout builder, in degrees
    pub angular_offset_deg: f64,
}

impl SegmentGeometry {
    /// Number of triangles in the fan
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Rotate the sector about the wheel axis (Y) into its layout slot
    pub fn rotated_y(&self, offset_deg: f64) -> SegmentGeometry {
        let rotation = Rotation3::from_axis_angle(&Vector3::y_axis(), offset_deg.to_radians());
        SegmentGeometry {
            vertices: self.vertices.iter().map(|v| rotation * *v).collect(),
            triangles: self.triangles.clone(),
            center: rotation * self.center,
            outer_midpoint: rotation * self.outer_midpoint,
            angular_offset_deg: offset_deg,
        }
    }
}

/// Generate a circular-sector mesh
///
/// `total_subdivisions` is the tessellation of the full circle;
/// `triangle_count` is how many of those subdivisions this sector spans.
/// A sector equal to `total_subdivisions` is a full disc.
///
/// Produces `triangle_count + 2` vertices and `triangle_count` triangles.
/// Rim vertices sit at `angle_i = -i * 2π / total_subdivisions`, all at
/// distance `radius` from the origin.
pub fn generate_sector(
    radius: f64,
    triangle_count: u32,
    total_subdivisions: u32,
) -> Result<SegmentGeometry> {
    if !(radius > 0.0) {
        return Err(WheelError::invalid_configuration(format!(
            "sector radius must be positive, got {radius}"
        )));
    }
    if triangle_count == 0 {
        return Err(WheelError::invalid_configuration(
            "sector triangle count must be at least 1",
        ));
    }
    if total_subdivisions == 0 {
        return Err(WheelError::invalid_configuration(
            "circle subdivision count must be at least 1",
        ));
    }
    if triangle_count > total_subdivisions {
        return Err(WheelError::invalid_configuration(format!(
            "sector spans {triangle_count} subdivisions but the circle only has {total_subdivisions}"
        )));
    }

    let step = std::f64::consts::TAU / total_subdivisions as f64;
    let mut vertices = Vec::with_capacity(triangle_count as usize + 2);
    let mut triangles = Vec::with_capacity(triangle_count as usize);

    vertices.push(Point3::origin());
    for i in 0..=triangle_count {
        let angle = -(i as f64) * step;
        vertices.push(Point3::new(
            angle.cos() * radius,
            0.0,
            angle.sin() * radius,
        ));
        if i > 0 {
            triangles.push([0, i, i + 1]);
        }
    }

    let first_rim = vertices[1];
    let last_rim = vertices[vertices.len() - 1];
    let center = Point3::from(
        (Point3::origin().coords + first_rim.coords + last_rim.coords) / 3.0,
    );
    let outer_midpoint = Point3::from((first_rim.coords + last_rim.coords) / 2.0);

    Ok(SegmentGeometry {
        vertices,
        triangles,
        center,
        outer_midpoint,
        angular_offset_deg: 0.0,
    })
}
