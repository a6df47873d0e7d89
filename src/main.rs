//! Shell Strike entry point
//!
//! Headless demo driver: builds a small city block, clocks the sim with a
//! fixed-timestep accumulator, feeds scripted input, and prints the UI
//! notifications a real frontend would render.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use glam::Vec3;

use shell_strike::Tuning;
use shell_strike::consts::{MAX_SUBSTEPS, SIM_DT};
use shell_strike::sim::{GamePhase, GameState, SimEvent, TickInput, tick};

/// Three sim-minutes is plenty for a demo run
const DEMO_TICK_LIMIT: u64 = 3 * 60 * 60;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let tuning = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            let tuning = Tuning::from_json(&json)?;
            log::info!("loaded tuning from {path}");
            tuning
        }
        None => Tuning::default(),
    };

    let seed = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let mut state = GameState::with_tuning(seed, tuning);
    build_city_block(&mut state);
    log::info!(
        "demo world ready: {} obstacles, seed {seed}",
        state.field.obstacle_count()
    );

    // Fixed-timestep accumulator: display pacing never changes sim behavior
    let mut last = Instant::now();
    let mut accumulator = 0.0f32;

    while state.phase != GamePhase::GameOver && state.time_ticks < DEMO_TICK_LIMIT {
        let now = Instant::now();
        accumulator += (now - last).as_secs_f32().min(0.1);
        last = now;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = demo_input(&state);
            tick(&mut state, &input);
            accumulator -= SIM_DT;
            substeps += 1;
        }

        for event in state.drain_events() {
            print_event(&event);
        }

        std::thread::sleep(Duration::from_millis(2));
    }

    println!("final score: {}", state.score);
    Ok(())
}

/// Scripted stand-in for a human: walk at the nearest threat, swing in reach.
fn demo_input(state: &GameState) -> TickInput {
    let target = state
        .enemies
        .iter()
        .chain(state.boss.as_ref())
        .min_by(|a, b| {
            let da = a.pos.distance_squared(state.player.pos);
            let db = b.pos.distance_squared(state.player.pos);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|actor| actor.pos);

    match target {
        Some(pos) => {
            let to = pos - state.player.pos;
            let mut input = TickInput::with_camera(Vec3::new(to.x, 0.0, to.y));
            input.move_forward = to.length() > 50.0;
            input.attack = to.length() < 70.0;
            input
        }
        None => TickInput::default(),
    }
}

/// A sparse grid of building footprints around an open plaza, with rooftop
/// steam columns the renderer would animate.
fn build_city_block(state: &mut GameState) {
    for ix in -2..=2i32 {
        for iz in -2..=2i32 {
            if ix == 0 && iz == 0 {
                continue;
            }
            let x = ix as f32 * 320.0;
            let z = iz as f32 * 320.0;
            state.add_obstacle(x, z, 140.0, 140.0);
            state.register_steam_emitter(
                Vec3::new(x + 40.0, 5.0, z),
                0.3,
                (ix + 3 * iz) as f32,
            );
        }
    }
}

fn print_event(event: &SimEvent) {
    match event {
        SimEvent::ScoreChanged(score) => println!("score: {score}"),
        SimEvent::HealthChanged { current, max } => println!("health: {current}/{max}"),
        SimEvent::BossSpawned { pos } => {
            println!("boss incoming at ({:.0}, {:.0})", pos.x, pos.y)
        }
        SimEvent::GameOver { score } => println!("GAME OVER - final score {score}"),
        // Renderer-only notifications; nothing to show on a console
        SimEvent::EnemySpawned { .. }
        | SimEvent::EffectBurst { .. }
        | SimEvent::SlashDecal { .. } => {}
    }
}
