//! Engine boundary used by the renderer
//!
//! The renderer calls [`TesseractEngine::initialize`] once, builds one draw
//! object per vertex/edge by index, then calls
//! [`TesseractEngine::compute_frame`] every display refresh.

use std::sync::Arc;
use tesseract_math::{Projector, RotationAngles, Vec4};

use crate::error::EngineError;
use crate::hypercube::Hypercube;
use crate::pipeline::{self, ProjectedVertex};
use crate::shape::{Edge, Wireframe4D};

/// Immutable hypercube tables plus the projection used for every frame
#[derive(Clone, Debug)]
pub struct TesseractEngine {
    /// Shared read-only; cloning the engine shares the tables
    shape: Arc<Hypercube>,
    projector: Projector,
}

impl TesseractEngine {
    /// Build the vertex and edge tables for `vertex_count` vertices
    pub fn initialize(vertex_count: usize) -> Result<Self, EngineError> {
        let shape = Hypercube::new(vertex_count)?;
        log::info!(
            "Initialized {}-cube: {} vertices, {} edges",
            shape.dimension(),
            shape.vertex_count(),
            shape.edge_count()
        );
        Ok(Self {
            shape: Arc::new(shape),
            projector: Projector::default(),
        })
    }

    /// Builder: replace the projector
    pub fn with_projector(mut self, projector: Projector) -> Self {
        self.projector = projector;
        self
    }

    #[inline]
    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    /// Shared handle to the tables
    pub fn shape(&self) -> Arc<Hypercube> {
        Arc::clone(&self.shape)
    }

    pub fn vertices(&self) -> &[Vec4] {
        self.shape.vertices()
    }

    pub fn edges(&self) -> &[Edge] {
        self.shape.edges()
    }

    /// Projected positions for this frame, in vertex table order
    pub fn compute_frame(&self, angles: RotationAngles) -> Result<Vec<ProjectedVertex>, EngineError> {
        pipeline::compute_frame(self.shape.vertices(), angles, &self.projector)
    }

    /// Same as [`Self::compute_frame`] into a reusable buffer
    pub fn compute_frame_into(
        &self,
        out: &mut Vec<ProjectedVertex>,
        angles: RotationAngles,
    ) -> Result<(), EngineError> {
        pipeline::compute_frame_into(out, self.shape.vertices(), angles, &self.projector)
    }
}
