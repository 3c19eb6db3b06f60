//! Spheres whose vertices keep a near-constant surface density.
//!
//! A UV sphere puts the same number of vertices on every latitude ring, so rings
//! crowd together towards the poles. Here every ring instead receives a vertex count
//! proportional to its circumference, divided by one target arc length taken from
//! the equator of a regular `segments`-gon. Neighbouring vertices therefore sit at
//! roughly the same distance from each other everywhere on the sphere.
//!
//! ```text
//!            north pole (last vertex)
//!        .-- ring ring_amount-1 --.
//!      /                            \
//!     |  ...  rings 2..ring_amount-2  |
//!      \                            /
//!        '------- ring 1 ---------'
//!            south pole (first vertex)
//! ```
//!
//! Rings are only connected to themselves: no edge ever joins two rings or a ring
//! to a pole.

use crate::errors::ValidationError;
use crate::float_types::{FRAC_PI_2, PI, Real, TAU};
use crate::wireframe::{Wireframe, ring};
use nalgebra::Point3;

/// Default number of segments offered to users.
pub const DEFAULT_SEGMENTS: usize = 32;
/// Smallest accepted number of segments.
pub const MIN_SEGMENTS: usize = 3;
/// Above this the sphere is still built, but a warning is logged.
pub const SOFT_MAX_SEGMENTS: usize = 100;
pub const DEFAULT_RADIUS: Real = 1.0;
/// Below this the sphere is still built, but a warning is logged.
pub const SOFT_MIN_RADIUS: Real = 0.001;

/// Parameters of a homogeneous sphere, checked on construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HomogeneousSphere {
    segments: usize,
    radius: Real,
}

impl Default for HomogeneousSphere {
    fn default() -> Self {
        HomogeneousSphere {
            segments: DEFAULT_SEGMENTS,
            radius: DEFAULT_RADIUS,
        }
    }
}

/// One latitude ring, as produced by [`HomogeneousSphere::rings`].
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    /// Position between the poles, `1..ring_amount`.
    pub index: usize,
    /// Latitude in radians, `-π/2` being the south pole.
    pub angle: Real,
    pub height: Real,
    pub radius: Real,
    pub vertices: Vec<Point3<Real>>,
}

impl HomogeneousSphere {
    /// Validate `segments` and `radius`.
    ///
    /// `segments < 3` is rejected: fewer segments leave no room for a ring between
    /// the poles and would divide by zero when spacing the latitudes.
    /// A negative radius is accepted and mirrors the sphere across the XY plane:
    /// the first pole lands on +Z and rings are built from the top down.
    pub fn new(segments: usize, radius: Real) -> Result<Self, ValidationError> {
        if segments < MIN_SEGMENTS {
            return Err(ValidationError::invalid_parameter(
                "segments",
                format!("must be at least {MIN_SEGMENTS}, got {segments}"),
            ));
        }
        if !radius.is_finite() {
            return Err(ValidationError::invalid_parameter(
                "radius",
                format!("must be finite, got {radius}"),
            ));
        }

        if segments > SOFT_MAX_SEGMENTS {
            log::warn!("{segments} segments is above the usual maximum of {SOFT_MAX_SEGMENTS}");
        }
        if radius < SOFT_MIN_RADIUS {
            log::warn!("radius {radius} is below the usual minimum of {SOFT_MIN_RADIUS}");
        }

        Ok(HomogeneousSphere { segments, radius })
    }

    pub const fn segments(&self) -> usize {
        self.segments
    }

    pub const fn radius(&self) -> Real {
        self.radius
    }

    /// Number of latitude steps from pole to pole. Rings sit on the
    /// `ring_amount - 1` inner steps.
    pub const fn ring_amount(&self) -> usize {
        self.segments / 2
    }

    /// Latitude step between consecutive rings.
    pub fn base_angle(&self) -> Real {
        PI / self.ring_amount() as Real
    }

    /// Odd segment counts put no ring on the equator; both target lengths are
    /// shrunk by `cos(base_angle / 2)` to account for it. The factor is a
    /// heuristic kept for compatibility, not an exact correction.
    fn parity_factor(&self) -> Real {
        if self.segments % 2 == 0 {
            1.0
        } else {
            (self.base_angle() / 2.0).cos()
        }
    }

    /// Target arc length between neighbouring ring vertices: the equatorial
    /// spacing of a regular `segments`-gon. Never negative.
    pub fn arc(&self) -> Real {
        TAU * self.radius.abs() * self.parity_factor() / self.segments as Real
    }

    /// Straight-line counterpart of [`HomogeneousSphere::arc`].
    pub fn chord(&self) -> Real {
        2.0 * self.radius.abs() * self.parity_factor() * (PI / self.segments as Real).sin()
    }

    /// Vertices given to a ring at latitude `angle`: its circumference over the
    /// target arc, both taken on the unit sphere. Scaling cancels out of the
    /// ratio, so the count stays the same for any radius, and an arc that would
    /// underflow or overflow at extreme radii never enters the division.
    fn ring_vertex_count(&self, angle: Real) -> usize {
        let unit_arc = TAU * self.parity_factor() / self.segments as Real;
        (TAU * angle.cos().abs() / unit_arc) as usize
    }

    /// Latitude, height, local radius and vertex count of ring `index`.
    fn ring_layout(&self, index: usize) -> (Real, Real, Real, usize) {
        let angle = index as Real * self.base_angle() - FRAC_PI_2;
        let height = self.radius * angle.sin();
        let local_radius = (self.radius * angle.cos()).abs();
        (angle, height, local_radius, self.ring_vertex_count(angle))
    }

    /// Lazily generate the rings between the poles, south to north.
    pub fn rings(&self) -> Rings<'_> {
        Rings { sphere: self, next: 1 }
    }

    /// Total number of vertices [`HomogeneousSphere::build`] will produce, poles included.
    pub fn vertex_count(&self) -> usize {
        2 + (1..self.ring_amount())
            .map(|i| self.ring_layout(i).3)
            .sum::<usize>()
    }

    /// Build the wireframe: south pole, every ring in latitude order, north pole.
    pub fn build(&self) -> Wireframe {
        log::debug!(
            "homogeneous sphere: segments={} radius={} rings={} base_angle={} arc={} chord={}",
            self.segments,
            self.radius,
            self.ring_amount().saturating_sub(1),
            self.base_angle(),
            self.arc(),
            self.chord(),
        );

        let vertex_count = self.vertex_count();
        let mut wireframe = Wireframe::with_capacity(vertex_count, vertex_count - 2);

        wireframe.push_vertex(Point3::new(0.0, 0.0, -self.radius));
        for ring in self.rings() {
            wireframe.merge_ring(ring.vertices);
        }
        wireframe.push_vertex(Point3::new(0.0, 0.0, self.radius));

        wireframe
    }
}

/// Iterator returned by [`HomogeneousSphere::rings`].
#[derive(Clone, Debug)]
pub struct Rings<'a> {
    sphere: &'a HomogeneousSphere,
    next: usize,
}

impl Iterator for Rings<'_> {
    type Item = Ring;

    fn next(&mut self) -> Option<Ring> {
        if self.next >= self.sphere.ring_amount() {
            return None;
        }
        let index = self.next;
        self.next += 1;

        let (angle, height, radius, count) = self.sphere.ring_layout(index);
        log::trace!("ring {index}: angle={angle} z={height} r={radius} vertices={count}");

        Some(Ring {
            index,
            angle,
            height,
            radius,
            vertices: ring(height, radius, count),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.sphere.ring_amount().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Rings<'_> {}

/// Validate the parameters and build the sphere in one call.
pub fn homogeneous_sphere(segments: usize, radius: Real) -> Result<Wireframe, ValidationError> {
    Ok(HomogeneousSphere::new(segments, radius)?.build())
}
