//! Fixed-timestep session driver
//!
//! Owns a `GameState` and a FIFO of pending commands. Input may arrive at any
//! time; it is queued and applied at the start of the next step, so exactly
//! one transition touches the state at a time. Each step is: drain queue,
//! one `Advance`, collision check, dispatch.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, GameConfig};
use crate::consts::*;
use crate::sim::{Action, GamePhase, GameState, Snapshot, reduce, resolve_collisions};

/// Keys the session knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Space,
    Enter,
    Other(u32),
}

/// Raw input from the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Click or tap anywhere
    PointerActivated,
    KeyDown(Key),
}

/// Notable things that happened during an update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    StarSpawned { angle: f32 },
    StarCollected { score: u32 },
    Crashed { score: u32 },
}

/// A running game plus its command queue and tick clock
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    pending: VecDeque<Action>,
    accumulator: f32,
    /// Key that flips the cube's direction
    toggle_key: Key,
    /// Whether the tick source is live
    running: bool,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Ok(Self::from_state(GameState::new(config, seed)?))
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            pending: VecDeque::new(),
            accumulator: 0.0,
            toggle_key: Key::Space,
            running: false,
        }
    }

    /// Use a different key for direction toggles
    pub fn with_toggle_key(mut self, key: Key) -> Self {
        self.toggle_key = key;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Queue a new run
    pub fn start(&mut self) {
        self.pending.push_back(Action::Start);
        self.running = true;
    }

    /// Queue a return to the idle screen
    pub fn reset(&mut self) {
        self.pending.push_back(Action::Reset);
    }

    /// Queue a direction flip
    pub fn toggle_direction(&mut self) {
        self.pending.push_back(Action::ToggleDirection);
    }

    /// Map raw input to commands; returns whether it was recognized
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        let recognized = match event {
            InputEvent::PointerActivated => true,
            InputEvent::KeyDown(key) => key == self.toggle_key,
        };
        if recognized {
            self.toggle_direction();
        } else {
            log::trace!("Ignoring input {:?}", event);
        }
        recognized
    }

    /// Stop the tick source. No `Advance` is dispatched until the next start.
    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator = 0.0;
    }

    /// Feed elapsed wall time (ms) and run as many fixed steps as it covers
    pub fn update(&mut self, elapsed_ms: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();

        // Commands apply even when no full step is due, or the clock is stopped
        self.drain_pending();
        if !self.running {
            return events;
        }

        self.accumulator += elapsed_ms.max(0.0);
        let mut substeps = 0;
        while self.accumulator >= TICK_MS && substeps < MAX_SUBSTEPS {
            self.accumulator -= TICK_MS;
            substeps += 1;
            self.step(TICK_MS, &mut events);
            if !self.running {
                break;
            }
        }

        // Drop backlog we could not catch up on
        if substeps == MAX_SUBSTEPS && self.accumulator >= TICK_MS {
            log::debug!("Dropping {:.1} ms of backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        events
    }

    /// One serialized step: queued commands, advance, collisions
    fn step(&mut self, dt: f32, events: &mut Vec<GameEvent>) {
        self.drain_pending();
        if !self.running || !self.state.is_playing() {
            return;
        }

        let had_star = self.state.star.is_some();
        reduce(&mut self.state, Action::Advance { dt });
        if let (false, Some(star)) = (had_star, &self.state.star) {
            events.push(GameEvent::StarSpawned { angle: star.angle });
        }

        match resolve_collisions(&self.state) {
            Some(Action::GameOver) => {
                reduce(&mut self.state, Action::GameOver);
                events.push(GameEvent::Crashed {
                    score: self.state.score,
                });
                self.stop();
            }
            Some(Action::Collect) => {
                reduce(&mut self.state, Action::Collect);
                events.push(GameEvent::StarCollected {
                    score: self.state.score,
                });
            }
            _ => {}
        }
    }

    fn drain_pending(&mut self) {
        while let Some(action) = self.pending.pop_front() {
            reduce(&mut self.state, action);
            match action {
                Action::Start => {
                    self.running = true;
                    self.accumulator = 0.0;
                }
                Action::Reset => self.stop(),
                _ => {}
            }
        }
    }
}
