//! Evenly spaced vertices around a horizontal circle.

use crate::float_types::{Real, TAU};
use nalgebra::Point3;

/// Place `count` vertices on the circle of `radius` around the z axis at `height`.
///
/// Vertex `i` sits at angle `i * τ / count`, so the first vertex is always on the
/// +X side of the axis and consecutive vertices are one equal angular step apart.
///
/// * `count == 0` yields no vertices.
/// * `radius == 0` yields `count` copies of `(0, 0, height)`.
pub fn ring(height: Real, radius: Real, count: usize) -> Vec<Point3<Real>> {
    if count == 0 {
        return Vec::new();
    }

    let step = TAU / count as Real;
    (0..count)
        .map(|i| {
            let theta = i as Real * step;
            Point3::new(radius * theta.cos(), radius * theta.sin(), height)
        })
        .collect()
}
