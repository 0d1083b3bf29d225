//! Starcatcher - An orbital arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, game state, transitions)
//! - `config`: Immutable per-run game configuration
//! - `session`: Fixed-timestep driver that serializes commands into the sim

pub mod config;
pub mod session;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use session::{InputEvent, Key, Session};

use glam::Vec2;
use std::f32::consts::TAU;

/// Game configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// Fixed simulation timestep in milliseconds (~60 Hz)
    pub const TICK_MS: f32 = 16.0;
    /// Maximum substeps per update to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default arena layout
    pub const CENTER_X: f32 = 400.0;
    pub const CENTER_Y: f32 = 300.0;
    pub const ORBIT_RADIUS: f32 = 150.0;
    pub const STAR_ORBIT_RADIUS: f32 = 250.0;

    /// Cube defaults
    pub const CUBE_SIZE: f32 = 20.0;
    /// Radius units per millisecond
    pub const CUBE_SPEED: f32 = 0.12;
    /// Cube turns back inward this far short of the star orbit
    pub const OUTER_TURN_MARGIN: f32 = 20.0;
    /// Cube turns back outward at or below this radius
    pub const CENTER_TURN_RADIUS: f32 = 5.0;
    /// Cosmetic spin (rad/ms) while away from the center
    pub const CUBE_SPIN_MOVING: f32 = 0.01;
    /// Cosmetic spin (rad/ms) while parked at the center
    pub const CUBE_SPIN_IDLE: f32 = 0.005;

    /// Platform defaults
    pub const PLATFORM_WIDTH: f32 = 8.0;
    pub const PLATFORM_LENGTH: f32 = PI / 3.0;
    pub const PLATFORM_SPEED: f32 = 0.002;
    /// Randomized platform speed range (rad/ms)
    pub const PLATFORM_SPEED_MIN: f32 = 0.0005;
    pub const PLATFORM_SPEED_SPREAD: f32 = 0.003;
    /// Randomized platform arc length range (30°..90°)
    pub const PLATFORM_LENGTH_MIN: f32 = PI / 6.0;
    pub const PLATFORM_LENGTH_SPREAD: f32 = PI / 3.0;
    /// Angular gap between the two platforms at spawn (60°..180°)
    pub const PLATFORM_GAP_MIN: f32 = PI / 3.0;
    pub const PLATFORM_GAP_MAX: f32 = PI;
    /// Push applied to overlapping platforms (radians)
    pub const PLATFORM_SEPARATION: f32 = 0.02;
}

/// Normalize angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Smallest circular distance between two angles, in [0, π]
#[inline]
pub fn angular_distance(a: f32, b: f32) -> f32 {
    let diff = (normalize_angle(a) - normalize_angle(b)).abs();
    diff.min(TAU - diff)
}

/// Convert polar (r, theta) around `center` to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(center: Vec2, r: f32, theta: f32) -> Vec2 {
    center + Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Direction from `center` to `pos`, in radians
#[inline]
pub fn bearing(center: Vec2, pos: Vec2) -> f32 {
    let d = pos - center;
    d.y.atan2(d.x)
}
