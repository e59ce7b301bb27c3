//! Composed 4D rotations in the three planes that contain the W axis
//!
//! In 4D, rotations happen in planes rather than around axes. The tesseract
//! animation only turns the shape through W, so three planes are used:
//! XW, YW and ZW. Each plane rotation is a 4x4 matrix that is the identity
//! on the two axes outside the plane.
//!
//! The YW plane turns in the opposite sense to XW and ZW:
//!
//! | Plane | axis'                 | W'                    |
//! |-------|-----------------------|-----------------------|
//! | XW    | `x·cosθ − w·sinθ`     | `x·sinθ + w·cosθ`     |
//! | YW    | `y·cosθ + w·sinθ`     | `−y·sinθ + w·cosθ`    |
//! | ZW    | `z·cosθ − w·sinθ`     | `z·sinθ + w·cosθ`     |

use serde::{Serialize, Deserialize};
use crate::mat4::{self, Mat4};
use crate::Vec4;

/// The 3 rotation planes that include the W axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationPlane {
    /// XW plane
    XW,
    /// YW plane (opposite sense to XW/ZW)
    YW,
    /// ZW plane
    ZW,
}

impl RotationPlane {
    /// All planes in application order
    pub const ALL: [RotationPlane; 3] = [RotationPlane::XW, RotationPlane::YW, RotationPlane::ZW];

    /// Rotation matrix for this plane
    pub fn matrix(self, angle: f64) -> Mat4 {
        let (sn, cs) = angle.sin_cos();
        self.matrix_sin_cos(sn, cs)
    }

    fn matrix_sin_cos(self, sn: f64, cs: f64) -> Mat4 {
        // (p1, p2) order encodes the sense of rotation, see `mat4::plane_rotation`
        match self {
            RotationPlane::XW => mat4::plane_rotation_sin_cos(sn, cs, 0, 3),
            RotationPlane::YW => mat4::plane_rotation_sin_cos(sn, cs, 3, 1),
            RotationPlane::ZW => mat4::plane_rotation_sin_cos(sn, cs, 2, 3),
        }
    }
}

/// One angle per W-plane, in radians
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationAngles {
    pub xw: f64,
    pub yw: f64,
    pub zw: f64,
}

impl RotationAngles {
    pub const ZERO: Self = Self { xw: 0.0, yw: 0.0, zw: 0.0 };

    pub const fn new(xw: f64, yw: f64, zw: f64) -> Self {
        Self { xw, yw, zw }
    }

    /// Same angle in every plane
    pub const fn uniform(angle: f64) -> Self {
        Self::new(angle, angle, angle)
    }

    /// Angle for a single plane
    pub fn get(&self, plane: RotationPlane) -> f64 {
        match plane {
            RotationPlane::XW => self.xw,
            RotationPlane::YW => self.yw,
            RotationPlane::ZW => self.zw,
        }
    }

    /// Set the angle for a single plane
    pub fn set(&mut self, plane: RotationPlane, angle: f64) {
        match plane {
            RotationPlane::XW => self.xw = angle,
            RotationPlane::YW => self.yw = angle,
            RotationPlane::ZW => self.zw = angle,
        }
    }
}

/// A 4D rotation stored as its 4x4 matrix
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotor4D {
    matrix: Mat4,
}

impl Default for Rotor4D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Rotor4D {
    /// Identity rotor (no rotation)
    pub const IDENTITY: Self = Self { matrix: mat4::IDENTITY };

    /// Wrap an existing matrix
    pub const fn from_matrix(matrix: Mat4) -> Self {
        Self { matrix }
    }

    /// Rotation in a single plane
    pub fn from_plane_angle(plane: RotationPlane, angle: f64) -> Self {
        Self::from_matrix(plane.matrix(angle))
    }

    /// Compose the three plane rotations: XW is applied first, then YW, then ZW.
    ///
    /// The plane rotations do not commute, so this order is part of the
    /// result. Zero angles give exactly [`Rotor4D::IDENTITY`].
    pub fn compose(angles: RotationAngles) -> Self {
        let mut matrix = mat4::IDENTITY;
        for plane in RotationPlane::ALL {
            let (sn, cs) = angles.get(plane).sin_cos();
            matrix = mat4::mul(plane.matrix_sin_cos(sn, cs), matrix);
        }
        Self { matrix }
    }

    /// Rotor that applies `self` first and then `next`
    pub fn then(self, next: Rotor4D) -> Self {
        Self::from_matrix(mat4::mul(next.matrix, self.matrix))
    }

    /// Rotate a point
    #[inline]
    pub fn apply(&self, point: Vec4) -> Vec4 {
        mat4::transform(&self.matrix, point)
    }

    /// The underlying column-major matrix
    #[inline]
    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }
}
