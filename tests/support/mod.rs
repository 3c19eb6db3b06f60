//! Test support library
//! Provides various helper functions & utilities for tests.

#![allow(dead_code)]

use hsphere::{float_types::Real, wireframe::Edge};
use nalgebra::Point3;
use std::collections::HashMap;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Distance of a point from the z axis.
pub fn axial_distance(p: &Point3<Real>) -> Real {
    (p.x * p.x + p.y * p.y).sqrt()
}

/// Group consecutive vertices that share the same height into rings, returning
/// their index ranges. Poles come out as one-vertex groups.
pub fn height_groups(vertices: &[Point3<Real>]) -> Vec<std::ops::Range<usize>> {
    let mut groups: Vec<std::ops::Range<usize>> = Vec::new();
    for (i, v) in vertices.iter().enumerate() {
        let same_height = groups
            .last()
            .is_some_and(|last| last.end == i && vertices[last.start].z == v.z);
        if same_height {
            if let Some(last) = groups.last_mut() {
                last.end = i + 1;
            }
        } else {
            groups.push(i..i + 1);
        }
    }
    groups
}

/// Returns true when `edges` form exactly one cycle through every index in `range`.
pub fn is_single_cycle(edges: &[Edge], range: std::ops::Range<usize>) -> bool {
    let n = range.len();
    if edges.len() != n {
        return false;
    }

    let mut neighbours: HashMap<usize, Vec<usize>> = HashMap::new();
    for e in edges {
        if !range.contains(&e.0) || !range.contains(&e.1) || e.0 == e.1 {
            return false;
        }
        neighbours.entry(e.0).or_default().push(e.1);
        neighbours.entry(e.1).or_default().push(e.0);
    }
    if neighbours.len() != n || neighbours.values().any(|adj| adj.len() != 2) {
        return false;
    }

    // Walk the cycle and make sure it comes back after visiting every vertex.
    let start = range.start;
    let mut previous = start;
    let mut current = neighbours[&start][0];
    let mut steps = 1;
    while current != start {
        let adj = &neighbours[&current];
        let next = if adj[0] == previous { adj[1] } else { adj[0] };
        previous = current;
        current = next;
        steps += 1;
        if steps > n {
            return false;
        }
    }
    steps == n
}
