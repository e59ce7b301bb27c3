//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`TESS_SECTION__KEY`)

use std::f64::consts::TAU;
use std::path::Path;

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use tesseract_core::animation::{DEFAULT_MANUAL_ANGLES, DEFAULT_SPEED};
use tesseract_core::hypercube::{dimension_of, TESSERACT_VERTEX_COUNT};
use tesseract_core::{AnimationDriver, RotationMode};
use tesseract_math::{RotationAngles, DEFAULT_LIGHT_DISTANCE};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Hypercube and projection configuration
    #[serde(default)]
    pub geometry: GeometryConfig,
    /// Angle source configuration
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Frame loop configuration
    #[serde(default)]
    pub run: RunConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`TESS_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // TESS_RUN__FRAMES=10 -> run.frames = 10
        figment = figment.merge(Env::prefixed("TESS_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Err(e) = dimension_of(self.geometry.vertex_count) {
            return Err(ConfigError::invalid(format!("geometry.vertex_count: {}", e)));
        }
        if !self.geometry.light_distance.is_finite() {
            return Err(ConfigError::invalid("geometry.light_distance must be finite"));
        }
        let a = self.animation.manual_angles;
        for (name, angle) in [("xw", a.xw), ("yw", a.yw), ("zw", a.zw)] {
            if !(0.0..=TAU).contains(&angle) {
                return Err(ConfigError::invalid(format!(
                    "animation.manual_angles.{} must be within [0, 2π], got {}",
                    name, angle
                )));
            }
        }
        if !self.animation.speed_deg_per_sec.is_finite() {
            return Err(ConfigError::invalid("animation.speed_deg_per_sec must be finite"));
        }
        if !(self.run.fps.is_finite() && self.run.fps > 0.0) {
            return Err(ConfigError::invalid(format!(
                "run.fps must be positive, got {}",
                self.run.fps
            )));
        }
        Ok(())
    }
}

/// Hypercube and projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Number of hypercube vertices (power of two, at most 16)
    pub vertex_count: usize,
    /// Position of the projection light on the W axis
    pub light_distance: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            vertex_count: TESSERACT_VERTEX_COUNT,
            light_distance: DEFAULT_LIGHT_DISTANCE,
        }
    }
}

/// Angle source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Start autorotating (otherwise use `manual_angles`)
    pub autorotate: bool,
    /// Autorotation speed in degrees per second
    pub speed_deg_per_sec: f64,
    /// Manual XW, YW and ZW angles in radians, each within [0, 2π]
    pub manual_angles: RotationAngles,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            autorotate: true,
            speed_deg_per_sec: DEFAULT_SPEED.to_degrees(),
            manual_angles: DEFAULT_MANUAL_ANGLES,
        }
    }
}

impl AnimationConfig {
    /// Build the animation driver described by this config
    pub fn to_driver(&self) -> AnimationDriver {
        let mode = if self.autorotate {
            RotationMode::Autorotate
        } else {
            RotationMode::Manual
        };
        AnimationDriver::new()
            .with_speed(self.speed_deg_per_sec.to_radians())
            .with_mode(mode)
            .with_manual_angles(self.manual_angles)
    }
}

/// Frame loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of frames to compute
    pub frames: u32,
    /// Simulated frames per second
    pub fps: f64,
    /// Print the last frame's projected vertices to stdout
    pub print_final_frame: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: 120,
            fps: 60.0,
            print_final_frame: true,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: impl Into<String>) -> Self {
        ConfigError {
            message: message.into(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.geometry.vertex_count, 16);
        assert_eq!(config.geometry.light_distance, 1.5);
        assert!(config.animation.autorotate);
        assert!((config.animation.speed_deg_per_sec - 50.0).abs() < 1e-9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("vertex_count"));
        assert!(toml.contains("light_distance"));
        assert!(toml.contains("[animation.manual_angles]"));
    }

    #[test]
    fn test_validate_rejects_bad_vertex_count() {
        let mut config = AppConfig::default();
        config.geometry.vertex_count = 12;
        let msg = config.validate().unwrap_err().to_string();
        assert!(msg.contains("vertex_count"));
    }

    #[test]
    fn test_validate_rejects_more_than_four_axes() {
        let mut config = AppConfig::default();
        config.geometry.vertex_count = 32;
        let msg = config.validate().unwrap_err().to_string();
        assert!(msg.contains("5-cube"), "{}", msg);

        config.geometry.vertex_count = 8;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_angle() {
        let mut config = AppConfig::default();
        config.animation.manual_angles.yw = 7.0;
        let msg = config.validate().unwrap_err().to_string();
        assert!(msg.contains("yw"));
    }

    #[test]
    fn test_validate_rejects_zero_fps() {
        let mut config = AppConfig::default();
        config.run.fps = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_to_driver() {
        let mut config = AppConfig::default();
        config.animation.autorotate = false;
        let driver = config.animation.to_driver();
        assert_eq!(driver.mode(), RotationMode::Manual);
        assert_eq!(driver.angles(3.0), DEFAULT_MANUAL_ANGLES);
    }
}
