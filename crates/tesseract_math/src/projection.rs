//! Light-source perspective projection from 4D to 3D
//!
//! A virtual point light sits at `w = light_distance` on the W axis. A point
//! `(x, y, z, w)` is scaled by `1 / (light_distance - w)` and its w is
//! dropped, so points closer to the light come out larger.
//!
//! Points at or beyond the light have no meaningful image (the scale is
//! infinite or flips sign). Those are reported as
//! [`ProjectionError::BehindLight`] instead of producing non-finite output.

use std::fmt;
use crate::{Vec3, Vec4};

/// Light distance used by the tesseract animation
pub const DEFAULT_LIGHT_DISTANCE: f64 = 1.5;

/// Error type for projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionError {
    /// The point's w reaches or passes the light
    BehindLight { w: f64, light_distance: f64 },
    /// The light distance itself is NaN or infinite
    InvalidLightDistance(f64),
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::BehindLight { w, light_distance } => write!(
                f,
                "point at w = {} is not in front of the light at w = {}",
                w, light_distance
            ),
            ProjectionError::InvalidLightDistance(d) => {
                write!(f, "light distance must be finite, got {}", d)
            }
        }
    }
}

impl std::error::Error for ProjectionError {}

/// Perspective projector with a fixed light distance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    light_distance: f64,
}

impl Default for Projector {
    fn default() -> Self {
        Self { light_distance: DEFAULT_LIGHT_DISTANCE }
    }
}

impl Projector {
    /// Create a projector with the light at `w = light_distance`
    pub fn new(light_distance: f64) -> Result<Self, ProjectionError> {
        if !light_distance.is_finite() {
            return Err(ProjectionError::InvalidLightDistance(light_distance));
        }
        Ok(Self { light_distance })
    }

    #[inline]
    pub fn light_distance(&self) -> f64 {
        self.light_distance
    }

    /// Scale factor applied to a point with the given w
    pub fn scale_for(&self, w: f64) -> Result<f64, ProjectionError> {
        let depth = self.light_distance - w;
        if !depth.is_finite() || depth <= 0.0 {
            return Err(ProjectionError::BehindLight {
                w,
                light_distance: self.light_distance,
            });
        }
        Ok(1.0 / depth)
    }

    /// Project a 4D point to 3D
    pub fn project(&self, point: Vec4) -> Result<Vec3, ProjectionError> {
        let s = self.scale_for(point.w)?;
        Ok(point.xyz() * s)
    }
}

/// Project `point` with the light at `w = light_distance`
pub fn project(point: Vec4, light_distance: f64) -> Result<Vec3, ProjectionError> {
    Projector::new(light_distance)?.project(point)
}
