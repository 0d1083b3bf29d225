//! Randomized entity construction
//!
//! Factories take the random source as a parameter so callers (and tests)
//! decide where randomness comes from.

use rand::Rng;

use super::state::{Platform, Star};
use crate::config::GameConfig;
use crate::consts::*;
use crate::{normalize_angle, polar_to_cartesian};
use std::f32::consts::TAU;

/// One platform at `angle` with randomized speed and arc length
pub fn spawn_platform<R: Rng + ?Sized>(
    rng: &mut R,
    angle: f32,
    direction: f32,
    config: &GameConfig,
) -> Platform {
    let speed = PLATFORM_SPEED_MIN + rng.random::<f32>() * PLATFORM_SPEED_SPREAD;
    let length = PLATFORM_LENGTH_MIN + rng.random::<f32>() * PLATFORM_LENGTH_SPREAD;
    Platform::new(angle, speed, length, direction, config.platform_width)
}

/// Two platforms spinning in opposite directions, at least 60° apart
pub fn spawn_platform_pair<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> [Platform; 2] {
    let first_angle = normalize_angle(rng.random::<f32>() * TAU);
    let gap = PLATFORM_GAP_MIN + rng.random::<f32>() * (PLATFORM_GAP_MAX - PLATFORM_GAP_MIN);
    let second_angle = normalize_angle(first_angle + gap);

    let first = spawn_platform(rng, first_angle, 1.0, config);
    let second = spawn_platform(rng, second_angle, -1.0, config);
    log::debug!(
        "Spawned platforms at {:.3} and {:.3} rad (gap {:.3})",
        first.angle,
        second.angle,
        gap
    );
    [first, second]
}

/// A star at a random angle on the star orbit
pub fn spawn_star<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Star {
    let angle = normalize_angle(rng.random::<f32>() * TAU);
    let star = Star {
        position: polar_to_cartesian(config.center(), config.star_orbit_radius, angle),
        radius: config.star_orbit_radius,
        angle,
    };
    log::debug!("Spawned star at {:.3} rad", angle);
    star
}
