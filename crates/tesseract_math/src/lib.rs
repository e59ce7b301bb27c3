//! 4D Mathematics Library
//!
//! This crate provides the vector, rotation and projection types used to
//! animate a tesseract.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Vec3`] - projected 3D point
//! - [`Mat4`] - 4x4 column-major matrix
//! - [`Rotor4D`] - composed rotation in the XW, YW and ZW planes
//! - [`Projector`] - light-source perspective projection from 4D to 3D

mod vec4;
pub mod mat4;
pub mod rotor4;
pub mod projection;

pub use vec4::{Vec3, Vec4};
pub use mat4::Mat4;
pub use rotor4::{Rotor4D, RotationAngles, RotationPlane};
pub use projection::{project, Projector, ProjectionError, DEFAULT_LIGHT_DISTANCE};
