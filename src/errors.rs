//! Validation errors

use crate::wireframe::Edge;

/// All the possible validation issues we might encounter
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (InvalidParameter) A generation parameter is outside its admissible range
    #[error("(InvalidParameter) `{name}` {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    /// (EdgeOutOfRange) An edge references a vertex index past the end of the buffer
    #[error("(EdgeOutOfRange) Edge {edge} references a vertex outside 0..{vertex_count}")]
    EdgeOutOfRange { edge: Edge, vertex_count: usize },
    /// (DegenerateEdge) Both ends of an edge are the same vertex
    #[error("(DegenerateEdge) Edge {edge} connects a vertex to itself")]
    DegenerateEdge { edge: Edge },
}

impl ValidationError {
    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        ValidationError::InvalidParameter { name, reason: reason.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_parameter() {
        let err = ValidationError::invalid_parameter("segments", "must be at least 3, got 2");
        assert_eq!(err.to_string(), "(InvalidParameter) `segments` must be at least 3, got 2");
    }

    #[test]
    fn edge_errors_show_indices() {
        let err = ValidationError::EdgeOutOfRange { edge: Edge(1, 7), vertex_count: 5 };
        assert_eq!(
            err.to_string(),
            "(EdgeOutOfRange) Edge (1, 7) references a vertex outside 0..5"
        );
    }
}
