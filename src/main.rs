//! Starcatcher entry point
//!
//! Headless native runner: drives a `Session` at a fixed cadence with a
//! simple autopilot standing in for the player, then prints the final
//! snapshot as JSON.
//!
//! Usage: `starcatcher [--seed N] [--config path.json] [--ticks N]`

use std::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};

use starcatcher::consts::TICK_MS;
use starcatcher::session::GameEvent;
use starcatcher::sim::GamePhase;
use starcatcher::{GameConfig, InputEvent, Session};

/// Radial distance from the platform orbit at which the autopilot reacts
const AUTOPILOT_LOOKAHEAD: f32 = 45.0;

struct Args {
    seed: u64,
    config: GameConfig,
    ticks: u32,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut seed = None;
    let mut config = GameConfig::default();
    let mut ticks = 60 * 120;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                seed = Some(value.parse()?);
            }
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                config = GameConfig::from_json(&std::fs::read_to_string(&path)?)?;
                log::info!("Loaded config from {}", path);
            }
            "--ticks" => {
                let value = args.next().ok_or("--ticks needs a value")?;
                ticks = value.parse()?;
            }
            other => return Err(format!("unknown argument: {other}").into()),
        }
    }

    let seed = match seed {
        Some(seed) => seed,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64,
    };
    Ok(Args {
        seed,
        config,
        ticks,
    })
}

/// Click when heading outward toward a platform that will be in the way
fn autopilot(session: &mut Session) {
    let state = session.state();
    let cube = &state.cube;
    if !state.is_playing() || !cube.moving_out {
        return;
    }

    let gap = state.config.orbit_radius - cube.radius;
    if gap <= 0.0 || gap > AUTOPILOT_LOOKAHEAD {
        return;
    }

    let blocked = state.platforms.iter().any(|p| {
        // Pad the arc by how far it can sweep before the cube arrives
        let eta = gap / cube.speed;
        let padded = p.length + 2.0 * p.speed * eta;
        starcatcher::sim::ArcSpan::centered(p.angle, padded).contains_angle(cube.angle)
    });
    if blocked {
        log::debug!("Autopilot dodging at radius {:.1}", cube.radius);
        session.handle_input(InputEvent::PointerActivated);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    log::info!("Starcatcher (native) starting...");

    let args = parse_args()?;
    let mut session = Session::new(args.config, args.seed)?;
    log::info!("Seed: {}", args.seed);

    session.start();
    for _ in 0..args.ticks {
        autopilot(&mut session);
        for event in session.update(TICK_MS) {
            match event {
                GameEvent::StarSpawned { angle } => log::debug!("Star at {:.2} rad", angle),
                GameEvent::StarCollected { score } => log::info!("Score: {}", score),
                GameEvent::Crashed { score } => log::info!("Crashed with score {}", score),
            }
        }
        if session.phase() == GamePhase::GameOver {
            break;
        }
    }
    session.stop();

    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    Ok(())
}
