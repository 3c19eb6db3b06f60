//! `Wireframe` struct: an append-only vertex buffer and the edges connecting it.

use crate::errors::ValidationError;
use crate::float_types::Real;
use nalgebra::{Point3, Vector3};
use std::{fmt, ops::Range};

pub mod ring;

pub use ring::ring;

/// A pair of indices into a [`Wireframe`]'s vertex buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge(pub usize, pub usize);

impl Edge {
    pub const fn new(a: usize, b: usize) -> Self {
        Edge(a, b)
    }

    /// The same edge walked the other way.
    pub const fn reversed(self) -> Self {
        Edge(self.1, self.0)
    }

    pub const fn as_array(self) -> [usize; 2] {
        [self.0, self.1]
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl From<(usize, usize)> for Edge {
    fn from((a, b): (usize, usize)) -> Self {
        Edge(a, b)
    }
}

/// Shortest, longest and average edge length of a wireframe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeLengthStats {
    pub min: Real,
    pub max: Real,
    pub mean: Real,
}

impl EdgeLengthStats {
    /// `max / min`; 1.0 means perfectly even spacing.
    pub fn spread(&self) -> Real {
        if self.min > 0.0 {
            self.max / self.min
        } else {
            Real::INFINITY
        }
    }
}

/// Vertices and edges only; no faces.
///
/// Both buffers only ever grow: vertices are never reordered or rewritten once
/// pushed, which keeps every [`Edge`] index stable for the lifetime of the value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wireframe {
    vertices: Vec<Point3<Real>>,
    edges: Vec<Edge>,
}

impl Wireframe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Wireframe {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
        }
    }

    pub fn vertices(&self) -> &[Point3<Real>] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Hand both buffers over to the caller.
    pub fn into_parts(self) -> (Vec<Point3<Real>>, Vec<Edge>) {
        (self.vertices, self.edges)
    }

    /// Append a lone vertex with no edges and return its index.
    pub fn push_vertex(&mut self, vertex: Point3<Real>) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    /// Append a ring of vertices and connect it.
    ///
    /// With `n` new vertices starting at index `base`:
    /// - `n > 2`: `n` edges closing a cycle, `(base + i, base + (i + 1) % n)`
    /// - `n == 2`: a single edge `(base, base + 1)`
    /// - `n <= 1`: no edges
    ///
    /// Returns the index range the ring now occupies.
    pub fn merge_ring<I>(&mut self, new_vertices: I) -> Range<usize>
    where
        I: IntoIterator<Item = Point3<Real>>,
    {
        let base = self.vertices.len();
        self.vertices.extend(new_vertices);
        let n = self.vertices.len() - base;

        match n {
            0 | 1 => {},
            2 => self.edges.push(Edge(base, base + 1)),
            _ => self
                .edges
                .extend((0..n).map(|i| Edge(base + i, base + (i + 1) % n))),
        }

        base..base + n
    }

    /// Check that every edge joins two distinct, existing vertices.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let vertex_count = self.vertices.len();
        for &edge in &self.edges {
            if edge.0 >= vertex_count || edge.1 >= vertex_count {
                return Err(ValidationError::EdgeOutOfRange { edge, vertex_count });
            }
            if edge.0 == edge.1 {
                return Err(ValidationError::DegenerateEdge { edge });
            }
        }
        Ok(())
    }

    /// Euclidean length of one edge.
    ///
    /// Panics if the edge does not index into this wireframe; run [`Wireframe::validate`]
    /// first on edges of unknown origin.
    pub fn edge_length(&self, edge: Edge) -> Real {
        (self.vertices[edge.1] - self.vertices[edge.0]).norm()
    }

    /// Min / max / mean edge length, or `None` without edges.
    pub fn edge_length_stats(&self) -> Option<EdgeLengthStats> {
        if self.edges.is_empty() {
            return None;
        }

        let mut min = Real::MAX;
        let mut max: Real = 0.0;
        let mut sum: Real = 0.0;
        for &edge in &self.edges {
            let len = self.edge_length(edge);
            min = min.min(len);
            max = max.max(len);
            sum += len;
        }

        Some(EdgeLengthStats {
            min,
            max,
            mean: sum / self.edges.len() as Real,
        })
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` when there are no vertices.
    pub fn bounding_box(&self) -> Option<(Point3<Real>, Point3<Real>)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(lo, hi), v| (lo.inf(v), hi.sup(v))),
        )
    }

    /// A copy with every vertex moved by `offset`; edges are unchanged.
    pub fn translated(&self, offset: Vector3<Real>) -> Wireframe {
        Wireframe {
            vertices: self.vertices.iter().map(|v| v + offset).collect(),
            edges: self.edges.clone(),
        }
    }
}
