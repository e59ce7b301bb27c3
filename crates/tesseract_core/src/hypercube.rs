//! Hypercube vertex/edge graph
//!
//! Vertices are labelled `0..n`. The binary digits of a label are its
//! per-axis coordinate bits, read most significant first: digit 0 is X,
//! digit 1 is Y, digit 2 is Z, digit 3 is W. Each bit becomes `bit - 0.5`,
//! so the cube has edge length 1 and is centered on the origin. Hypercubes
//! with fewer than four axes leave the missing trailing axes at zero.
//!
//! Two vertices are joined by an edge exactly when their labels differ in
//! one bit (Hamming distance 1).

use log::debug;
use tesseract_math::Vec4;

use crate::error::EngineError;
use crate::shape::{Edge, Wireframe4D};

/// Highest supported number of axes
pub const MAX_DIMENSION: u32 = 4;

/// Vertex count of the standard tesseract
pub const TESSERACT_VERTEX_COUNT: usize = 1 << MAX_DIMENSION;

/// Triangles covering the six faces of the cubic cell formed by labels `0..8`
///
/// With MSB-first labelling this is the tesseract's `x = -0.5` cell.
pub const CELL_TRIANGLES: [[usize; 3]; 12] = [
    [0, 3, 2], [0, 1, 3],
    [1, 7, 3], [1, 5, 7],
    [5, 6, 7], [5, 4, 6],
    [4, 2, 6], [4, 0, 2],
    [2, 7, 6], [2, 3, 7],
    [4, 1, 0], [4, 5, 1],
];

/// Number of bit positions in which two labels differ
#[inline]
pub fn hamming_distance(a: usize, b: usize) -> u32 {
    (a ^ b).count_ones()
}

/// Number of axes of the hypercube with `n` vertices
pub fn dimension_of(n: usize) -> Result<u32, EngineError> {
    if n == 0 || !n.is_power_of_two() {
        return Err(EngineError::InvalidVertexCount(n));
    }
    let dimension = n.trailing_zeros();
    if dimension > MAX_DIMENSION {
        return Err(EngineError::TooManyDimensions { vertex_count: n, dimension });
    }
    Ok(dimension)
}

/// Coordinate of a single label in a hypercube with `dimension` axes
fn vertex_for_label(label: usize, dimension: u32) -> Vec4 {
    let mut coords = [0.0f64; 4];
    for (axis, coord) in coords.iter_mut().enumerate().take(dimension as usize) {
        let bit = (label >> (dimension as usize - 1 - axis)) & 1;
        *coord = bit as f64 - 0.5;
    }
    Vec4::from_array(coords)
}

fn vertices_for_dimension(dimension: u32) -> Vec<Vec4> {
    (0..1usize << dimension)
        .map(|label| vertex_for_label(label, dimension))
        .collect()
}

fn edges_for_dimension(dimension: u32) -> Vec<Edge> {
    let n = 1usize << dimension;
    let mut edges = Vec::with_capacity(n * dimension as usize / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            if hamming_distance(i, j) == 1 {
                edges.push(Edge::new(i, j));
            }
        }
    }
    edges
}

/// Vertex coordinates for labels `0..n`, in ascending label order
pub fn build_vertices(n: usize) -> Result<Vec<Vec4>, EngineError> {
    dimension_of(n).map(vertices_for_dimension)
}

/// Edges of the `n`-vertex hypercube
///
/// Ordered by lower endpoint, then by upper endpoint.
pub fn build_edges(n: usize) -> Result<Vec<Edge>, EngineError> {
    dimension_of(n).map(edges_for_dimension)
}

/// One cubic cell of a tesseract, as labels plus a triangle list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundaryCell {
    /// Labels of the cell's 8 vertices
    pub labels: [usize; 8],
    /// Triangles indexing into `labels`
    pub triangles: [[usize; 3]; 12],
}

/// Immutable vertex and edge tables of a hypercube
#[derive(Clone, Debug)]
pub struct Hypercube {
    dimension: u32,
    vertices: Vec<Vec4>,
    edges: Vec<Edge>,
}

impl Hypercube {
    /// Build the hypercube with `vertex_count` vertices
    ///
    /// # Errors
    /// [`EngineError::InvalidVertexCount`] if `vertex_count` is zero or not a
    /// power of two, [`EngineError::TooManyDimensions`] past 16 vertices.
    pub fn new(vertex_count: usize) -> Result<Self, EngineError> {
        dimension_of(vertex_count).map(Self::with_dimension)
    }

    /// The standard 16-vertex tesseract
    pub fn tesseract() -> Self {
        Self::with_dimension(MAX_DIMENSION)
    }

    fn with_dimension(dimension: u32) -> Self {
        let vertices = vertices_for_dimension(dimension);
        let edges = edges_for_dimension(dimension);

        debug!(
            "Built {}-cube: {} vertices, {} edges",
            dimension,
            vertices.len(),
            edges.len()
        );

        Self { dimension, vertices, edges }
    }

    /// Number of axes
    #[inline]
    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    /// The cell made of labels `0..8`, only defined for the tesseract
    pub fn boundary_cell(&self) -> Option<BoundaryCell> {
        if self.dimension != MAX_DIMENSION {
            return None;
        }
        Some(BoundaryCell {
            labels: [0, 1, 2, 3, 4, 5, 6, 7],
            triangles: CELL_TRIANGLES,
        })
    }
}

impl Wireframe4D for Hypercube {
    fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
