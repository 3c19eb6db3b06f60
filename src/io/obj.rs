use crate::wireframe::Wireframe;
use std::fmt::Write;

/// Export to Wavefront OBJ.
///
/// One `v` line per vertex and one `l` line per edge, indices 1-based as OBJ
/// expects. Vertices without edges (the poles of a sphere) are kept as bare `v`
/// lines so vertex positions survive the round trip.
///
/// ```rust
/// # use hsphere::sphere::homogeneous_sphere;
/// let sphere = homogeneous_sphere(16, 1.0).unwrap();
/// let text = sphere.to_obj("sphere");
/// assert!(text.starts_with("o sphere\n"));
/// ```
pub fn to_obj(wireframe: &Wireframe, name: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "o {name}");

    for v in wireframe.vertices() {
        let _ = writeln!(out, "v {:.6} {:.6} {:.6}", v.x, v.y, v.z);
    }
    for edge in wireframe.edges() {
        let [a, b] = edge.as_array();
        let _ = writeln!(out, "l {} {}", a + 1, b + 1);
    }

    out
}

impl Wireframe {
    pub fn to_obj(&self, name: &str) -> String {
        self::to_obj(self, name)
    }
}
