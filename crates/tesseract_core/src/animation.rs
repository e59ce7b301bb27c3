//! Angle source for each frame
//!
//! Either autorotating (every plane turns at the same rate with elapsed
//! time) or manual (three angles set by a control surface, each kept in
//! `[0, 2π]`).

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use serde::{Serialize, Deserialize};
use tesseract_math::{RotationAngles, RotationPlane};

/// Default autorotation speed: 50 degrees per second in every plane
pub const DEFAULT_SPEED: f64 = 50.0 * PI / 180.0;

/// Manual angles shown before the user touches anything
pub const DEFAULT_MANUAL_ANGLES: RotationAngles = RotationAngles::new(FRAC_PI_2, 0.0, 0.0);

/// Where the frame angles come from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationMode {
    Autorotate,
    Manual,
}

/// Angles for time `time` (seconds)
///
/// Autorotation gives `(speed·time, speed·time, speed·time)`; otherwise
/// `manual` is returned unchanged.
pub fn angles(time: f64, autorotate: bool, manual: RotationAngles, speed: f64) -> RotationAngles {
    if autorotate {
        RotationAngles::uniform(speed * time)
    } else {
        manual
    }
}

/// Holds the rotation mode, autorotation speed and manual angles
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationDriver {
    mode: RotationMode,
    /// Radians per second
    speed: f64,
    manual: RotationAngles,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self {
            mode: RotationMode::Autorotate,
            speed: DEFAULT_SPEED,
            manual: DEFAULT_MANUAL_ANGLES,
        }
    }
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the autorotation speed in radians per second
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Builder: set the rotation mode
    pub fn with_mode(mut self, mode: RotationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder: set all manual angles (each clamped to `[0, 2π]`)
    pub fn with_manual_angles(mut self, manual: RotationAngles) -> Self {
        for plane in RotationPlane::ALL {
            self.set_manual_angle(plane, manual.get(plane));
        }
        self
    }

    #[inline]
    pub fn mode(&self) -> RotationMode {
        self.mode
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn manual_angles(&self) -> RotationAngles {
        self.manual
    }

    pub fn set_mode(&mut self, mode: RotationMode) {
        self.mode = mode;
    }

    /// Flip between autorotate and manual, returning the new mode
    pub fn toggle_autorotate(&mut self) -> RotationMode {
        self.mode = match self.mode {
            RotationMode::Autorotate => RotationMode::Manual,
            RotationMode::Manual => RotationMode::Autorotate,
        };
        log::debug!("Rotation mode: {:?}", self.mode);
        self.mode
    }

    /// Set one manual angle, clamped to `[0, 2π]`
    pub fn set_manual_angle(&mut self, plane: RotationPlane, angle: f64) {
        let clamped = if angle.is_nan() { 0.0 } else { angle.clamp(0.0, TAU) };
        if clamped != angle {
            log::warn!("{:?} angle {} clamped to {}", plane, angle, clamped);
        }
        self.manual.set(plane, clamped);
    }

    /// Angles for time `time` (seconds) in the current mode
    pub fn angles(&self, time: f64) -> RotationAngles {
        angles(time, self.mode == RotationMode::Autorotate, self.manual, self.speed)
    }
}
