//! Per-frame rotate-then-project pipeline
//!
//! Every frame the three plane angles are composed into one [`Rotor4D`],
//! each vertex is rotated by it, and the rotated point is projected using
//! its *rotated* w. Because w changes per vertex as the shape turns, the
//! foreshortening changes too, which is what makes the 4D rotation visible.

use tesseract_math::{Projector, RotationAngles, Rotor4D, Vec3, Vec4};

use crate::error::EngineError;

/// A vertex after rotation and projection, in table order
pub type ProjectedVertex = Vec3;

/// Rotate and project every vertex
///
/// Output has the same length and order as `vertices`. Identical inputs
/// give bit-identical output.
///
/// # Errors
/// [`EngineError::Projection`] naming the first vertex that ends up at or
/// behind the light.
pub fn compute_frame(
    vertices: &[Vec4],
    angles: RotationAngles,
    projector: &Projector,
) -> Result<Vec<ProjectedVertex>, EngineError> {
    let mut out = Vec::with_capacity(vertices.len());
    compute_frame_into(&mut out, vertices, angles, projector)?;
    Ok(out)
}

/// Same as [`compute_frame`], writing into a reusable buffer
///
/// `out` is cleared first. On error its contents are unspecified.
pub fn compute_frame_into(
    out: &mut Vec<ProjectedVertex>,
    vertices: &[Vec4],
    angles: RotationAngles,
    projector: &Projector,
) -> Result<(), EngineError> {
    let rotor = Rotor4D::compose(angles);
    out.clear();
    out.reserve(vertices.len());
    for (vertex, &point) in vertices.iter().enumerate() {
        let rotated = rotor.apply(point);
        let projected = projector
            .project(rotated)
            .map_err(|source| EngineError::Projection { vertex, source })?;
        out.push(projected);
    }
    Ok(())
}

/// View a frame as raw bytes for a vertex buffer upload
pub fn frame_as_bytes(frame: &[ProjectedVertex]) -> &[u8] {
    bytemuck::cast_slice(frame)
}
