//! Per-tick simulation advance
//!
//! Moves the cube along its radius, spins the platforms, bounces platforms off
//! each other and respawns the star once the cube is back at the center.
//! Times are in milliseconds.

use super::collision::{PlatformContact, platform_contact};
use super::spawn::spawn_star;
use super::state::{Cube, GameState, Platform};
use crate::bearing;
use crate::config::GameConfig;
use crate::consts::*;

/// Advance the game state by `dt` milliseconds
///
/// No-op unless a run is in progress, and for negative or non-finite `dt`.
/// Score is never touched here.
pub fn advance(state: &mut GameState, dt: f32) {
    if !state.is_playing() || !dt.is_finite() || dt < 0.0 {
        return;
    }

    let config = state.config;

    // Aim at the live star, if there is one
    if let Some(star) = &state.star {
        state.cube.angle = bearing(config.center(), star.position);
    }

    move_cube(&mut state.cube, &config, dt);

    for platform in state.platforms.iter_mut() {
        platform.rotate(dt);
    }
    resolve_platform_contact(&mut state.platforms);

    if state.cube.radius <= CENTER_TURN_RADIUS && state.star.is_none() {
        let star = spawn_star(&mut state.rng, &config);
        log::debug!("Cube back at center, new star at {:.3} rad", star.angle);
        state.star = Some(star);
    }
}

/// Radial motion with auto-reversal near either end, plus cosmetic spin
pub fn move_cube(cube: &mut Cube, config: &GameConfig, dt: f32) {
    let step = cube.speed * dt;
    let outer = config.star_orbit_radius;

    if cube.moving_out {
        cube.radius = (cube.radius + step).clamp(0.0, outer);
        if cube.radius >= outer - OUTER_TURN_MARGIN {
            cube.moving_out = false;
        }
    } else {
        cube.radius = (cube.radius - step).clamp(0.0, outer);
        if cube.radius <= CENTER_TURN_RADIUS {
            cube.moving_out = true;
        }
    }

    let spin = if cube.radius > 0.0 {
        CUBE_SPIN_MOVING
    } else {
        CUBE_SPIN_IDLE
    };
    cube.rotation += spin * dt;

    cube.sync_position(config.center());
}

/// Reverse both platforms on contact; push them apart when deeply overlapped
pub fn resolve_platform_contact(platforms: &mut [Platform; 2]) {
    let contact = platform_contact(&platforms[0], &platforms[1]);
    if contact == PlatformContact::Clear {
        return;
    }

    for platform in platforms.iter_mut() {
        platform.bounce();
    }

    if contact == PlatformContact::Overlapping {
        platforms[0].nudge(-PLATFORM_SEPARATION);
        platforms[1].nudge(PLATFORM_SEPARATION);
    }
}
