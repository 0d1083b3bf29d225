//! Collision detection
//!
//! Pure predicates over a state snapshot. Nothing here mutates state; the
//! caller dispatches whatever transition `resolve_collisions` names.

use super::state::{Cube, GameState, Platform, Star};
use super::transition::Action;
use crate::angular_distance;
use crate::config::GameConfig;

/// Check whether the cube is touching any platform
///
/// Only the cube's angle matters once it is within `cube_size` of the
/// platform orbit.
pub fn cube_platform_collision(cube: &Cube, platforms: &[Platform], config: &GameConfig) -> bool {
    if (cube.radius - config.orbit_radius).abs() > config.cube_size {
        return false;
    }

    platforms
        .iter()
        .any(|platform| platform.span().contains_angle(cube.angle))
}

/// Check whether the cube has reached the star
pub fn cube_star_collision(cube: &Cube, star: Option<&Star>, config: &GameConfig) -> bool {
    let Some(star) = star else {
        return false;
    };
    cube.position.distance(star.position) < config.cube_size * 2.0
}

/// Whether two platforms overlap, and whether they overlap deeply enough
/// to need pushing apart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformContact {
    Clear,
    Touching,
    Overlapping,
}

/// Classify contact between two platforms by the distance of their centers
pub fn platform_contact(a: &Platform, b: &Platform) -> PlatformContact {
    let distance = angular_distance(a.angle, b.angle);
    let threshold = (a.length + b.length) / 2.0;

    if distance >= threshold {
        PlatformContact::Clear
    } else if distance < threshold / 2.0 {
        PlatformContact::Overlapping
    } else {
        PlatformContact::Touching
    }
}

/// Transition to dispatch after a tick, if any
///
/// Platform contact wins over a star pickup in the same tick. Stars only
/// count while the cube is heading outward.
pub fn resolve_collisions(state: &GameState) -> Option<Action> {
    if !state.is_playing() {
        return None;
    }

    if cube_platform_collision(&state.cube, &state.platforms, &state.config) {
        return Some(Action::GameOver);
    }

    if state.cube.moving_out
        && cube_star_collision(&state.cube, state.star.as_ref(), &state.config)
    {
        return Some(Action::Collect);
    }

    None
}
