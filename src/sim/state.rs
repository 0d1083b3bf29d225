//! Game state and core simulation types
//!
//! `GameState` is the single owned root of the simulation. Every entity lives
//! inside it by value, and the seeded RNG travels with it so transitions stay
//! reproducible.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arc::ArcSpan;
use super::spawn::{spawn_platform_pair, spawn_star};
use crate::config::{ConfigError, GameConfig};
use crate::normalize_angle;
use crate::polar_to_cartesian;

/// A 2D point in arena coordinates
pub type Position = Vec2;

/// Phase of a run, derived from the started/over flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start (or after a reset)
    Idle,
    /// Active gameplay
    Playing,
    /// Run ended on a platform
    GameOver,
}

/// The player-steered cube
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    /// Derived from `angle` and `radius`, never set directly
    pub position: Position,
    /// Distance from the arena center, clamped to [0, star_orbit_radius]
    pub radius: f32,
    /// Travel direction (radians, unbounded)
    pub angle: f32,
    /// Cosmetic spin accumulator (radians, never wraps)
    pub rotation: f32,
    pub moving_out: bool,
    /// Radius units per millisecond
    pub speed: f32,
}

impl Cube {
    /// Cube parked at the center of the arena
    pub fn at_center(config: &GameConfig) -> Self {
        Self {
            position: config.center(),
            radius: 0.0,
            angle: 0.0,
            rotation: 0.0,
            moving_out: false,
            speed: config.cube_speed,
        }
    }

    /// Recompute `position` from the polar pose
    pub fn sync_position(&mut self, center: Vec2) {
        self.position = polar_to_cartesian(center, self.radius, self.angle);
    }
}

/// A rotating arc obstacle on the inner orbit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Arc center (radians, normalized to [0, 2π))
    pub angle: f32,
    /// Angular speed magnitude (rad/ms), fixed at creation
    pub speed: f32,
    /// Full arc length (radians), fixed at creation
    pub length: f32,
    /// +1 or -1
    pub direction: f32,
    /// Radial thickness for rendering
    pub width: f32,
}

impl Platform {
    pub fn new(angle: f32, speed: f32, length: f32, direction: f32, width: f32) -> Self {
        Self {
            angle: normalize_angle(angle),
            speed,
            length,
            direction,
            width,
        }
    }

    /// Angular extent covered by this platform
    pub fn span(&self) -> ArcSpan {
        ArcSpan::centered(self.angle, self.length)
    }

    /// Rotate by `direction * speed * dt`
    pub fn rotate(&mut self, dt: f32) {
        self.angle = normalize_angle(self.angle + self.direction * self.speed * dt);
    }

    /// Reverse rotation direction
    pub fn bounce(&mut self) {
        self.direction = -self.direction;
    }

    /// Shift the arc center by `delta` radians
    pub fn nudge(&mut self, delta: f32) {
        self.angle = normalize_angle(self.angle + delta);
    }
}

/// The collectible on the outer orbit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub position: Position,
    /// Orbit radius the star sits on
    pub radius: f32,
    pub angle: f32,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub cube: Cube,
    /// Always exactly two
    pub platforms: [Platform; 2],
    pub star: Option<Star>,
    pub score: u32,
    pub started: bool,
    pub over: bool,
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Random source for platform and star spawns
    pub rng: Pcg32,
}

impl GameState {
    /// Create an idle game state with the given config and seed
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::idle(config, seed))
    }

    /// Idle state with default config
    pub fn with_seed(seed: u64) -> Self {
        Self::idle(GameConfig::default(), seed)
    }

    /// Build the idle shape; its platforms depend only on `seed`
    pub(crate) fn idle(config: GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let platforms = spawn_platform_pair(&mut rng, &config);
        Self {
            cube: Cube::at_center(&config),
            platforms,
            star: None,
            score: 0,
            started: false,
            over: false,
            config,
            seed,
            rng,
        }
    }

    /// Fresh playing state: new platforms, a star, cube at center
    pub(crate) fn fresh_run(&self) -> Self {
        let mut rng = self.rng.clone();
        let platforms = spawn_platform_pair(&mut rng, &self.config);
        let star = spawn_star(&mut rng, &self.config);
        Self {
            cube: Cube::at_center(&self.config),
            platforms,
            star: Some(star),
            score: 0,
            started: true,
            over: false,
            config: self.config,
            seed: self.seed,
            rng,
        }
    }

    /// The initial idle shape again. Only the run RNG carries over, so the
    /// next start still draws a new layout.
    pub(crate) fn reset(&self) -> Self {
        Self {
            rng: self.rng.clone(),
            ..Self::idle(self.config, self.seed)
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.over {
            GamePhase::GameOver
        } else if self.started {
            GamePhase::Playing
        } else {
            GamePhase::Idle
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.started && !self.over
    }

    /// Read-only projection for presenters
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cube: self.cube.clone(),
            platforms: self
                .platforms
                .iter()
                .map(|p| PlatformView {
                    platform: p.clone(),
                    span: p.span(),
                })
                .collect(),
            star: self.star.clone(),
            score: self.score,
            started: self.started,
            over: self.over,
            phase: self.phase(),
            config: self.config,
        }
    }
}

/// Platform plus its precomputed span, for drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformView {
    #[serde(flatten)]
    pub platform: Platform,
    pub span: ArcSpan,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub cube: Cube,
    pub platforms: Vec<PlatformView>,
    pub star: Option<Star>,
    pub score: u32,
    pub started: bool,
    pub over: bool,
    pub phase: GamePhase,
    pub config: GameConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(GameConfig::default(), 7).unwrap();
        assert_eq!(state.phase(), GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert!(state.star.is_none());
        assert_eq!(state.cube.radius, 0.0);
        assert_eq!(state.cube.position, state.config.center());
        assert!(!state.cube.moving_out);
        assert_eq!(state.cube.speed, 0.12);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = GameConfig {
            star_orbit_radius: -1.0,
            ..Default::default()
        };
        assert!(GameState::new(config, 1).is_err());
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = GameState::with_seed(42);
        let b = GameState::with_seed(42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_platform_rotate_and_bounce() {
        let mut p = Platform::new(0.1, 0.001, 0.5, -1.0, 8.0);
        p.rotate(200.0);
        assert!((p.angle - (std::f32::consts::TAU - 0.1)).abs() < 1e-4);
        p.bounce();
        assert_eq!(p.direction, 1.0);
        assert_eq!(p.speed, 0.001);
        assert_eq!(p.length, 0.5);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::with_seed(3).fresh_run();
        let snap = state.snapshot();
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.platforms.len(), 2);

        let json = serde_json::to_string(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.score, snap.score);
        assert_eq!(back.platforms.len(), 2);
        assert!(back.star.is_some());
    }
}
