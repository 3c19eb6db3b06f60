//! Boundary to a host application that owns the scene.
//!
//! The sphere generator itself never touches a scene. A host implements
//! [`MeshHost`] to turn a wireframe into one of its own objects, and
//! [`AddHomogeneousSphere`] drives it: build the sphere, create the object at a
//! location, and optionally scatter another scene object over its vertices.

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::sphere::{DEFAULT_RADIUS, DEFAULT_SEGMENTS, HomogeneousSphere};
use crate::wireframe::Edge;
use nalgebra::Point3;
use std::fmt::Debug;

/// Name given to objects created by [`AddHomogeneousSphere`].
pub const OBJECT_NAME: &str = "HSphere";

/// The mesh-construction side of a host application.
pub trait MeshHost {
    /// Handle to an object living in the host's scene.
    type ObjectId: Clone + Debug;
    type Error: std::error::Error + Send + Sync + 'static;

    fn has_object(&self, name: &str) -> bool;

    /// Create and select a new object from raw geometry, placed at `location`.
    fn create_wireframe_object(
        &mut self,
        name: &str,
        location: Point3<Real>,
        vertices: &[Point3<Real>],
        edges: &[Edge],
        faces: &[Vec<usize>],
    ) -> Result<Self::ObjectId, Self::Error>;

    /// The name the host actually gave `object` (it may have de-duplicated it).
    fn object_name(&self, object: &Self::ObjectId) -> String;

    /// Parent the object named `child` to `parent` and instance it on each of
    /// `parent`'s vertices, aligned to them when `rotate` is set.
    fn instance_on_vertices(
        &mut self,
        parent: &Self::ObjectId,
        child: &str,
        rotate: bool,
    ) -> Result<(), Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum AdapterError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("host rejected the operation: {0}")]
    Host(#[source] E),
}

/// "Add homogeneous sphere" operation, with the settings a host would expose.
#[derive(Clone, Debug, PartialEq)]
pub struct AddHomogeneousSphere {
    pub segments: usize,
    pub radius: Real,
    /// Instance `dupli` on every generated vertex.
    pub use_dupli: bool,
    /// Name of the scene object to instance.
    pub dupli: Option<String>,
}

impl Default for AddHomogeneousSphere {
    fn default() -> Self {
        AddHomogeneousSphere {
            segments: DEFAULT_SEGMENTS,
            radius: DEFAULT_RADIUS,
            use_dupli: false,
            dupli: None,
        }
    }
}

impl AddHomogeneousSphere {
    /// Build the sphere and hand it to `host` at `location`.
    ///
    /// Instancing is skipped silently when the named object does not exist or is
    /// the freshly created sphere itself.
    pub fn execute<H: MeshHost>(
        &self,
        host: &mut H,
        location: Point3<Real>,
    ) -> Result<H::ObjectId, AdapterError<H::Error>> {
        let wireframe = HomogeneousSphere::new(self.segments, self.radius)?.build();

        let object = host
            .create_wireframe_object(
                OBJECT_NAME,
                location,
                wireframe.vertices(),
                wireframe.edges(),
                &[],
            )
            .map_err(AdapterError::Host)?;

        if let Some(dupli) = self.dupli.as_deref().filter(|_| self.use_dupli) {
            if host.has_object(dupli) && host.object_name(&object) != dupli {
                host.instance_on_vertices(&object, dupli, true)
                    .map_err(AdapterError::Host)?;
            } else {
                log::debug!("skipping vertex instancing: no usable object named {dupli:?}");
            }
        }

        Ok(object)
    }
}
