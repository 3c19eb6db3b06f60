use crate::io::IoError;
use crate::wireframe::Wireframe;

use dxf::Drawing;
use dxf::entities::{Entity, EntityType, Line, ModelPoint};

#[allow(clippy::unnecessary_cast)]
fn dxf_point(v: &nalgebra::Point3<crate::float_types::Real>) -> dxf::Point {
    dxf::Point::new(v.x as f64, v.y as f64, v.z as f64)
}

/// Export to DXF: one `LINE` per edge, plus one `POINT` per vertex that no edge touches.
pub fn to_dxf(wireframe: &Wireframe) -> Result<Vec<u8>, IoError> {
    let vertices = wireframe.vertices();
    wireframe
        .validate()
        .map_err(|e| IoError::MalformedInput(e.to_string()))?;

    let mut drawing = Drawing::new();
    let mut touched = vec![false; vertices.len()];

    for edge in wireframe.edges() {
        touched[edge.0] = true;
        touched[edge.1] = true;
        let line = Line::new(dxf_point(&vertices[edge.0]), dxf_point(&vertices[edge.1]));
        drawing.add_entity(Entity::new(EntityType::Line(line)));
    }

    for (v, _) in vertices.iter().zip(&touched).filter(|(_, t)| !**t) {
        let point = ModelPoint::new(dxf_point(v));
        drawing.add_entity(Entity::new(EntityType::ModelPoint(point)));
    }

    let mut buffer = Vec::new();
    drawing.save(&mut buffer)?;
    Ok(buffer)
}

impl Wireframe {
    pub fn to_dxf(&self) -> Result<Vec<u8>, IoError> {
        self::to_dxf(self)
    }
}
