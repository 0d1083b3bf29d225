//! Control surface
//!
//! Every change to a `GameState` goes through `apply`. Transitions are pure:
//! the same state (RNG included) and action always give the same result, and
//! nothing reads the clock except through `Advance`'s `dt`.

use serde::{Deserialize, Serialize};

use super::state::GameState;
use super::tick::advance;

/// Commands accepted by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Begin a new run from any state
    Start,
    /// Flip the cube between heading out and heading in
    ToggleDirection,
    /// Advance the simulation by `dt` milliseconds
    Advance { dt: f32 },
    /// Cube reached the star
    Collect,
    /// Cube hit a platform
    GameOver,
    /// Back to the idle screen
    Reset,
}

/// Apply `action` to `state`, producing the next state
pub fn apply(state: &GameState, action: Action) -> GameState {
    let mut next = state.clone();
    reduce(&mut next, action);
    next
}

/// In-place form of `apply` for callers that own the state
pub fn reduce(state: &mut GameState, action: Action) {
    match action {
        Action::Start => {
            *state = state.fresh_run();
            log::info!("Run started (seed {})", state.seed);
        }
        Action::ToggleDirection => {
            if state.is_playing() {
                state.cube.moving_out = !state.cube.moving_out;
            }
        }
        Action::Advance { dt } => advance(state, dt),
        Action::Collect => {
            // A finished run keeps its final score
            if state.over {
                return;
            }
            state.score += 1;
            state.star = None;
            state.cube.moving_out = false;
            log::info!("Star collected, score {}", state.score);
        }
        Action::GameOver => {
            if !state.over {
                log::info!("Game over with score {}", state.score);
            }
            state.over = true;
            state.started = false;
        }
        Action::Reset => {
            *state = state.reset();
        }
    }
}
