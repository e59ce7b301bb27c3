//! Engine error types
//!
//! Construction errors are raised once by [`crate::Hypercube::new`]; projection
//! errors can come out of any frame.

use std::fmt;
use tesseract_math::ProjectionError;

use crate::hypercube::MAX_DIMENSION;

/// Error type for engine operations
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Vertex count is zero or not a power of two
    InvalidVertexCount(usize),
    /// Vertex count describes a hypercube with more than 4 axes
    TooManyDimensions { vertex_count: usize, dimension: u32 },
    /// A rotated vertex could not be projected
    Projection { vertex: usize, source: ProjectionError },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidVertexCount(n) => {
                write!(f, "Vertex count must be a positive power of two, got {}", n)
            }
            EngineError::TooManyDimensions { vertex_count, dimension } => write!(
                f,
                "Vertex count {} describes a {}-cube, at most {} axes are supported",
                vertex_count, dimension, MAX_DIMENSION
            ),
            EngineError::Projection { vertex, source } => {
                write!(f, "Projection failed for vertex {}: {}", vertex, source)
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Projection { source, .. } => Some(source),
            EngineError::InvalidVertexCount(_) => None,
            EngineError::TooManyDimensions { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_vertex_count_display() {
        let msg = format!("{}", EngineError::InvalidVertexCount(12));
        assert!(msg.contains("power of two"));
        assert!(msg.contains("12"));
    }

    #[test]
    fn test_too_many_dimensions_display() {
        let err = EngineError::TooManyDimensions { vertex_count: 32, dimension: 5 };
        let msg = format!("{}", err);
        assert!(msg.contains("5-cube"));
        assert!(msg.contains("at most 4"));
    }

    #[test]
    fn test_projection_error_has_source() {
        let err = EngineError::Projection {
            vertex: 3,
            source: ProjectionError::BehindLight { w: 2.0, light_distance: 1.5 },
        };
        assert!(format!("{}", err).contains("vertex 3"));
        assert!(err.source().is_some());
        assert!(EngineError::InvalidVertexCount(0).source().is_none());
    }
}
