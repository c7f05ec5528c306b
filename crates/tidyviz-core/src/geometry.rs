// File: crates/tidyviz-core/src/geometry.rs
// Summary: Polar helpers for placing labels around a circle.

use std::f64::consts::TAU;

/// Cartesian point at angle `theta` (radians) on a circle of `radius`.
#[inline]
pub fn polar_to_cartesian(radius: f64, theta: f64) -> (f64, f64) {
    (radius * theta.cos(), radius * theta.sin())
}

/// Text rotation for a label at `theta`: the angle in degrees, turned half a revolution
/// so the label reads outward from the centre.
#[inline]
pub fn label_rotation(theta: f64) -> f64 {
    180.0 + 360.0 * (theta / TAU)
}
