//! Frame loop simulation system
//!
//! Drives the engine one display frame at a time:
//! - Fixed-timestep clock (so runs are reproducible)
//! - Angles from the animation driver
//! - Rotate and project into a reused buffer

use std::time::{Duration, Instant};

use tesseract_core::{AnimationDriver, EngineError, ProjectedVertex, TesseractEngine};
use tesseract_math::RotationAngles;

/// Result of one simulated frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameResult {
    /// Zero-based frame number
    pub frame: u64,
    /// Simulated time of this frame in seconds
    pub time: f64,
    /// Angles the frame was computed with
    pub angles: RotationAngles,
    /// Largest distance of a projected vertex from the origin
    pub max_radius: f64,
    /// Wall-clock time spent rotating and projecting
    pub compute_time: Duration,
}

/// Manages the per-frame loop
pub struct SimulationSystem {
    engine: TesseractEngine,
    driver: AnimationDriver,
    timestep: f64,
    frame: u64,
    positions: Vec<ProjectedVertex>,
}

impl SimulationSystem {
    /// Create a new simulation stepping `1 / fps` seconds per frame
    pub fn new(engine: TesseractEngine, driver: AnimationDriver, fps: f64) -> Self {
        let positions = Vec::with_capacity(engine.vertices().len());
        Self {
            engine,
            driver,
            timestep: 1.0 / fps,
            frame: 0,
            positions,
        }
    }

    pub fn engine(&self) -> &TesseractEngine {
        &self.engine
    }

    pub fn driver_mut(&mut self) -> &mut AnimationDriver {
        &mut self.driver
    }

    /// Projected vertices of the most recent frame
    pub fn positions(&self) -> &[ProjectedVertex] {
        &self.positions
    }

    /// Run one simulation frame
    pub fn update(&mut self) -> Result<FrameResult, EngineError> {
        let time = self.frame as f64 * self.timestep;
        let angles = self.driver.angles(time);

        let start = Instant::now();
        self.engine.compute_frame_into(&mut self.positions, angles)?;
        let compute_time = start.elapsed();

        let max_radius = self
            .positions
            .iter()
            .map(|p| p.length())
            .fold(0.0f64, f64::max);

        let result = FrameResult {
            frame: self.frame,
            time,
            angles,
            max_radius,
            compute_time,
        };
        log::trace!("Frame {}: {:?}", self.frame, result);

        self.frame += 1;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tesseract_core::RotationMode;

    fn system(mode: RotationMode) -> SimulationSystem {
        let engine = TesseractEngine::initialize(16).unwrap();
        let driver = AnimationDriver::new().with_mode(mode).with_speed(1.0);
        SimulationSystem::new(engine, driver, 10.0)
    }

    #[test]
    fn test_fixed_timestep() {
        let mut sim = system(RotationMode::Autorotate);
        let first = sim.update().unwrap();
        let second = sim.update().unwrap();
        assert_eq!(first.frame, 0);
        assert_eq!(first.time, 0.0);
        assert_eq!(second.frame, 1);
        assert!((second.time - 0.1).abs() < 1e-12);
        assert!((second.angles.zw - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_positions_track_latest_frame() {
        let mut sim = system(RotationMode::Autorotate);
        for _ in 0..5 {
            sim.update().unwrap();
        }
        let expected = sim
            .engine()
            .compute_frame(RotationAngles::uniform(0.4))
            .unwrap();
        assert_eq!(sim.positions().len(), 16);
        for (a, b) in sim.positions().iter().zip(&expected) {
            assert!((a.x - b.x).abs() < 1e-12);
            assert!((a.y - b.y).abs() < 1e-12);
            assert!((a.z - b.z).abs() < 1e-12);
        }
    }

    #[test]
    fn test_identity_frame_radius() {
        let mut sim = system(RotationMode::Manual);
        sim.driver_mut().set_manual_angle(tesseract_math::RotationPlane::XW, 0.0);
        let result = sim.update().unwrap();
        // Vertices with w = 0.5: |xyz| = sqrt(0.75), scale 1
        assert!((result.max_radius - 0.75f64.sqrt()).abs() < 1e-12);
    }
}
