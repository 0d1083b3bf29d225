//! End-to-end scenarios driven through the public transition API, applying
//! one Advance per tick followed by collision dispatch.

use std::f32::consts::{PI, TAU};

use starcatcher::sim::{
    Action, GamePhase, GameState, Platform, Star, apply, resolve_collisions,
};
use starcatcher::{GameConfig, InputEvent, Session, angular_distance, polar_to_cartesian};

/// One driver tick: advance, then dispatch whatever the collision check names
fn tick(state: GameState, dt: f32) -> GameState {
    let state = apply(&state, Action::Advance { dt });
    match resolve_collisions(&state) {
        Some(action) => apply(&state, action),
        None => state,
    }
}

fn started(seed: u64) -> GameState {
    apply(&GameState::with_seed(seed), Action::Start)
}

#[test]
fn flying_out_to_a_star_scores() {
    let mut state = started(21);
    let center = state.config.center();

    // Star straight along the cube's current heading
    state.star = Some(Star {
        position: polar_to_cartesian(center, 250.0, 0.0),
        radius: 250.0,
        angle: 0.0,
    });
    // Park the platforms on the far side, nearly still
    for platform in state.platforms.iter_mut() {
        *platform = Platform::new(PI, 1e-7, 0.4, platform.direction, 8.0);
    }
    state.cube.moving_out = true;

    let mut closest = f32::MAX;
    for _ in 0..200 {
        if state.score > 0 {
            break;
        }
        let star = state.star.clone().expect("star present until collected");
        closest = closest.min(state.cube.position.distance(star.position));
        state = tick(state, 16.0);
    }

    assert_eq!(state.score, 1);
    assert!(state.star.is_none());
    assert!(!state.cube.moving_out);
    assert_eq!(state.phase(), GamePhase::Playing);
    assert!(state.cube.radius > 210.0 && state.cube.radius <= 250.0);
    assert!(closest >= 40.0);
}

#[test]
fn co_centered_platforms_flip_and_separate() {
    let mut state = started(22);
    state.platforms = [
        Platform::new(0.0, 0.002, 0.6, 1.0, 8.0),
        Platform::new(0.0, 0.003, 0.8, -1.0, 8.0),
    ];

    let next = apply(&state, Action::Advance { dt: 0.0 });
    let [a, b] = &next.platforms;
    assert_eq!(a.direction, -1.0);
    assert_eq!(b.direction, 1.0);
    assert!((a.angle - (TAU - 0.02)).abs() < 1e-5);
    assert!((b.angle - 0.02).abs() < 1e-5);
    assert!((angular_distance(a.angle, b.angle) - 0.04).abs() < 1e-5);

    // Speed and length are untouched by the bounce
    assert_eq!((a.speed, a.length), (0.002, 0.6));
    assert_eq!((b.speed, b.length), (0.003, 0.8));
}

#[test]
fn cube_on_platform_ends_the_run() {
    let mut state = started(23);
    let angle = state.platforms[1].angle;
    state.cube.radius = state.config.orbit_radius;
    state.cube.angle = angle;
    state.cube.sync_position(state.config.center());

    assert_eq!(resolve_collisions(&state), Some(Action::GameOver));
    let over = apply(&state, Action::GameOver);
    assert!(!over.started);
    assert!(over.over);
    assert_eq!(over.phase(), GamePhase::GameOver);

    // Nothing moves after the end
    assert_eq!(apply(&over, Action::Advance { dt: 16.0 }), over);
    assert_eq!(resolve_collisions(&over), None);
}

#[test]
fn returning_to_center_spawns_one_star() {
    let mut state = started(24);
    state = apply(&state, Action::Collect);
    assert!(state.star.is_none());

    state.cube.radius = 4.0;
    state.cube.moving_out = false;
    state = apply(&state, Action::Advance { dt: 16.0 });

    let star = state.star.clone().expect("star spawned");
    let center = state.config.center();
    assert!((star.position.distance(center) - state.config.star_orbit_radius).abs() < 1e-3);
    assert_eq!(star.radius, state.config.star_orbit_radius);

    // The cube now aims at the new star
    state = apply(&state, Action::Advance { dt: 16.0 });
    assert_eq!(state.star, Some(star.clone()));
    let heading = state.cube.angle.rem_euclid(TAU);
    assert!(angular_distance(heading, star.angle) < 1e-3);
}

#[test]
fn start_always_separates_platforms() {
    let mut state = GameState::with_seed(25);
    for _ in 0..200 {
        state = apply(&state, Action::Start);
        let [a, b] = &state.platforms;
        assert!(angular_distance(a.angle, b.angle) >= PI / 3.0 - 1e-4);
        assert_eq!(state.score, 0);
        assert!(state.star.is_some());
    }
}

#[test]
fn seeded_sessions_replay_identically() {
    let inputs = |session: &mut Session, frame: u32| {
        if frame % 45 == 0 {
            session.handle_input(InputEvent::PointerActivated);
        }
    };

    let run = |seed: u64| {
        let mut session = Session::new(GameConfig::default(), seed).unwrap();
        session.start();
        let mut events = Vec::new();
        for frame in 0..600 {
            inputs(&mut session, frame);
            events.extend(session.update(16.0));
        }
        (session.snapshot(), events)
    };

    let (snap_a, events_a) = run(31337);
    let (snap_b, events_b) = run(31337);
    assert_eq!(snap_a, snap_b);
    assert_eq!(events_a, events_b);
}
