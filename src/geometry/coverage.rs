//! Rotation-aware coverage sizing.
//!
//! Patterns are generated unrotated and then rotated as one group about
//! the page center, so the candidate field must be the bounding box of
//! the rotated page or the corners come out bare.

use glam::{DVec2, dvec2};

use crate::types::Angle;

/// Size of the field that still covers a `width` × `height` rectangle
/// after rotating it by `angle`.
pub fn coverage_size(width: f64, height: f64, angle: Angle) -> DVec2 {
    let (sin, cos) = angle.radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    dvec2(width * cos + height * sin, width * sin + height * cos)
}

/// Rotate `p` by `angle` about `center` (clockwise on a Y-down canvas for positive angles).
pub fn rotate_about(p: DVec2, center: DVec2, angle: Angle) -> DVec2 {
    let (sin, cos) = angle.radians().sin_cos();
    let d = p - center;
    center + dvec2(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
}
