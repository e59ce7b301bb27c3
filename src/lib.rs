//! Tesseract - rotating 4D hypercube projected to 3D
//!
//! Library half of the `tesseract` binary, exposed so integration tests can
//! load configuration and drive the frame loop.

pub mod app;
pub mod config;
pub mod systems;
