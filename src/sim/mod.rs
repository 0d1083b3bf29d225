//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through `Action::Advance`
//! - Seeded RNG only, carried inside `GameState`
//! - No rendering, input or platform dependencies

pub mod arc;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod transition;

pub use arc::ArcSpan;
pub use collision::{
    PlatformContact, cube_platform_collision, cube_star_collision, platform_contact,
    resolve_collisions,
};
pub use spawn::{spawn_platform, spawn_platform_pair, spawn_star};
pub use state::{Cube, GamePhase, GameState, Platform, PlatformView, Position, Snapshot, Star};
pub use tick::{advance, move_cube, resolve_platform_contact};
pub use transition::{Action, apply, reduce};
