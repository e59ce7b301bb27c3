//! Wireframe primitives for 4D geometry
//!
//! Shapes are pure geometric data: vertex positions plus the edges that join
//! them. Drawing styles are chosen by the renderer from each edge's
//! [`EdgeColorClass`].

use serde::{Serialize, Deserialize};
use tesseract_math::Vec4;

/// Bit of the lower endpoint label that selects an edge's color class
pub const COLOR_CLASS_MASK: usize = 0b0100;

/// Two-way split of edges into visually distinct groups
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeColorClass {
    Primary,
    Secondary,
}

impl EdgeColorClass {
    /// 0 for [`EdgeColorClass::Primary`], 1 for [`EdgeColorClass::Secondary`]
    #[inline]
    pub fn index(self) -> usize {
        match self {
            EdgeColorClass::Primary => 0,
            EdgeColorClass::Secondary => 1,
        }
    }
}

/// Classify the edge between two labels by its lower endpoint
pub fn color_class_of(a: usize, b: usize) -> EdgeColorClass {
    if a.min(b) & COLOR_CLASS_MASK != 0 {
        EdgeColorClass::Secondary
    } else {
        EdgeColorClass::Primary
    }
}

/// An edge between two vertex labels, `a < b`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Lower endpoint
    pub a: usize,
    /// Upper endpoint
    pub b: usize,
    pub color_class: EdgeColorClass,
}

impl Edge {
    /// Create an edge; endpoints are stored in ascending order
    pub fn new(a: usize, b: usize) -> Self {
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        Self { a, b, color_class: color_class_of(a, b) }
    }

    /// Endpoints as `(lower, upper)`
    #[inline]
    pub fn endpoints(&self) -> (usize, usize) {
        (self.a, self.b)
    }
}

/// Trait for 4D shapes drawn as a wireframe
///
/// Vertex and edge order is positional: renderers correlate their draw
/// objects to these indices, so implementors must never reorder them.
pub trait Wireframe4D: Send + Sync {
    /// Get the vertices of this shape
    fn vertices(&self) -> &[Vec4];

    /// Get the edges of this shape
    fn edges(&self) -> &[Edge];

    /// Get the number of vertices
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Get the number of edges
    #[inline]
    fn edge_count(&self) -> usize {
        self.edges().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_class_uses_lower_endpoint() {
        assert_eq!(color_class_of(0, 5).index(), 0);
        assert_eq!(color_class_of(4, 5).index(), 1);
        // Order of arguments does not matter
        assert_eq!(color_class_of(5, 4), EdgeColorClass::Secondary);
        // Upper endpoint has bit 4 set, lower does not
        assert_eq!(color_class_of(1, 5), EdgeColorClass::Primary);
    }

    #[test]
    fn test_edge_new_orders_endpoints() {
        let e = Edge::new(12, 4);
        assert_eq!(e.endpoints(), (4, 12));
        assert_eq!(e.color_class, EdgeColorClass::Secondary);
    }
}
