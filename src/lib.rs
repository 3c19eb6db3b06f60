//! Sphere approximations with a **homogeneous vertex distribution**.
//!
//! A UV sphere spends the same number of vertices on every latitude, so density
//! explodes near the poles. `hsphere` instead sizes every latitude ring by its
//! circumference, keeping the distance between neighbouring vertices nearly
//! constant over the whole surface. The result is a [`Wireframe`]: vertices and
//! per-ring edges, no faces, ready to hand over to whatever builds meshes on the
//! caller's side.
//!
//! ```rust
//! use hsphere::sphere::homogeneous_sphere;
//!
//! let sphere = homogeneous_sphere(32, 1.0)?;
//! assert_eq!(sphere.vertices().first().map(|p| p.z), Some(-1.0));
//! assert_eq!(sphere.vertices().last().map(|p| p.z), Some(1.0));
//! # Ok::<(), hsphere::errors::ValidationError>(())
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **dxf-io**: `.dxf` export of wireframes
//! - **cli**: the `hsphere` command-line tool
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for per-vertex instancing

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod adapter;
pub mod errors;
pub mod float_types;
pub mod instancing;
pub mod io;
pub mod sphere;
pub mod wireframe;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use sphere::{HomogeneousSphere, homogeneous_sphere};
pub use wireframe::{Edge, Wireframe};
