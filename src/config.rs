//! Game configuration
//!
//! Immutable for the lifetime of a run. Loaded from JSON (missing keys fall
//! back to defaults) and validated before any state is built from it.

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a configuration is rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("orbit_radius ({orbit}) must be inside star_orbit_radius ({star})")]
    OrbitOutsideStarOrbit { orbit: f32, star: f32 },

    #[error("star_orbit_radius ({star}) leaves no room to turn around before the center")]
    TurnaroundBand { star: f32 },

    #[error("platform_length ({0}) must be shorter than a full turn")]
    PlatformTooLong(f32),
}

/// Arena geometry and base speeds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub center_x: f32,
    pub center_y: f32,
    /// Radius the platforms sweep (and where cube/platform contact is checked)
    pub orbit_radius: f32,
    /// Radius stars spawn on
    pub star_orbit_radius: f32,
    pub cube_size: f32,
    /// Radial thickness of a platform (rendering only)
    pub platform_width: f32,
    /// Base platform arc length in radians (platforms randomize their own)
    pub platform_length: f32,
    /// Radius units per millisecond
    pub cube_speed: f32,
    /// Base platform speed in rad/ms (platforms randomize their own)
    pub platform_speed: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            center_x: CENTER_X,
            center_y: CENTER_Y,
            orbit_radius: ORBIT_RADIUS,
            star_orbit_radius: STAR_ORBIT_RADIUS,
            cube_size: CUBE_SIZE,
            platform_width: PLATFORM_WIDTH,
            platform_length: PLATFORM_LENGTH,
            cube_speed: CUBE_SPEED,
            platform_speed: PLATFORM_SPEED,
        }
    }
}

impl GameConfig {
    /// Arena center as a point
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x, self.center_y)
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject geometry the update engine cannot run on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("center_x", self.center_x),
            ("center_y", self.center_y),
            ("orbit_radius", self.orbit_radius),
            ("star_orbit_radius", self.star_orbit_radius),
            ("cube_size", self.cube_size),
            ("platform_width", self.platform_width),
            ("platform_length", self.platform_length),
            ("cube_speed", self.cube_speed),
            ("platform_speed", self.platform_speed),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        // Everything except the center must be strictly positive
        for &(field, value) in &fields[2..] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.orbit_radius >= self.star_orbit_radius {
            return Err(ConfigError::OrbitOutsideStarOrbit {
                orbit: self.orbit_radius,
                star: self.star_orbit_radius,
            });
        }
        if self.star_orbit_radius - OUTER_TURN_MARGIN <= CENTER_TURN_RADIUS {
            return Err(ConfigError::TurnaroundBand {
                star: self.star_orbit_radius,
            });
        }
        if self.platform_length >= TAU {
            return Err(ConfigError::PlatformTooLong(self.platform_length));
        }

        log::debug!("Config validated: {:?}", self);
        Ok(())
    }
}
