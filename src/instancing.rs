//! Per-vertex instance placement, for scattering copies of an object over a wireframe.

use crate::float_types::{PI, Real, tolerance};
use crate::wireframe::Wireframe;
use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Transform placing one instance on `vertex`.
///
/// With `rotate`, the instance's local +Z is turned to point away from the origin
/// along the vertex direction. A vertex sitting on the origin keeps the identity
/// rotation.
pub fn vertex_instance(vertex: &Point3<Real>, rotate: bool) -> Isometry3<Real> {
    let translation = Translation3::from(vertex.coords);
    if !rotate || vertex.coords.norm() <= tolerance() {
        return Isometry3::from_parts(translation, UnitQuaternion::identity());
    }

    let rotation = UnitQuaternion::rotation_between(&Vector3::z(), &vertex.coords)
        // Only undefined for the antiparallel case: straight down.
        .unwrap_or_else(|| UnitQuaternion::from_axis_angle(&Vector3::x_axis(), PI));
    Isometry3::from_parts(translation, rotation)
}

/// One transform per wireframe vertex, in vertex order.
#[cfg(not(feature = "parallel"))]
pub fn vertex_instances(wireframe: &Wireframe, rotate: bool) -> Vec<Isometry3<Real>> {
    wireframe
        .vertices()
        .iter()
        .map(|v| vertex_instance(v, rotate))
        .collect()
}

/// Parallel version of the per-vertex transforms.
#[cfg(feature = "parallel")]
pub fn vertex_instances(wireframe: &Wireframe, rotate: bool) -> Vec<Isometry3<Real>> {
    wireframe
        .vertices()
        .par_iter()
        .map(|v| vertex_instance(v, rotate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::homogeneous_sphere;

    #[test]
    fn translation_only_without_rotation() {
        let iso = vertex_instance(&Point3::new(1.0, 2.0, 3.0), false);
        assert_eq!(iso.translation.vector, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(iso.rotation, UnitQuaternion::identity());
    }

    #[test]
    fn rotation_points_local_z_outwards() {
        let wf = homogeneous_sphere(12, 2.0).unwrap();
        for (v, iso) in wf.vertices().iter().zip(vertex_instances(&wf, true)) {
            let up = iso.rotation * Vector3::z();
            let expected = v.coords.normalize();
            assert!(
                (up - expected).norm() < 1e-9,
                "instance at {v} faces {up}, expected {expected}"
            );
            assert_eq!(iso.translation.vector, v.coords);
        }
    }

    #[test]
    fn south_pole_is_flipped() {
        let iso = vertex_instance(&Point3::new(0.0, 0.0, -1.0), true);
        let up = iso.rotation * Vector3::z();
        assert!((up - Vector3::new(0.0, 0.0, -1.0)).norm() < 1e-9);
    }

    #[test]
    fn origin_keeps_identity() {
        let iso = vertex_instance(&Point3::origin(), true);
        assert_eq!(iso.rotation, UnitQuaternion::identity());
    }
}
