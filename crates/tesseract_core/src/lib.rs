//! Core geometry engine for the rotating tesseract
//!
//! - [`Hypercube`] - immutable vertex/edge tables built from binary labels
//! - [`pipeline`] - per-frame rotate-then-project
//! - [`AnimationDriver`] - autorotating or manual angle source
//! - [`TesseractEngine`] - the boundary a renderer talks to

pub mod animation;
pub mod engine;
pub mod error;
pub mod hypercube;
pub mod pipeline;
pub mod shape;

pub use animation::{AnimationDriver, RotationMode};
pub use engine::TesseractEngine;
pub use error::EngineError;
pub use hypercube::{build_edges, build_vertices, hamming_distance, BoundaryCell, Hypercube};
pub use pipeline::{compute_frame, frame_as_bytes, ProjectedVertex};
pub use shape::{color_class_of, Edge, EdgeColorClass, Wireframe4D};

// Re-export math types callers need alongside the engine
pub use tesseract_math::{Projector, RotationAngles, Rotor4D, Vec3, Vec4};
