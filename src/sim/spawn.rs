//! Timed enemy waves and the score-gated boss trigger
//!
//! Enemy spawns are best-effort: one placement search per interval, bounded
//! at ten attempts, skipped silently when the chosen edge band is blocked.
//! The boss gate is independent of the wave timer and re-arms at a higher
//! score each time it fires.

use glam::Vec2;
use rand::Rng;

use super::state::{Actor, GameState, SimEvent};

/// Advance the wave timer and evaluate the boss gate. Both checks run every
/// tick regardless of each other's outcome.
pub fn run(state: &mut GameState) {
    state.spawn.timer += 1;
    if state.spawn.timer >= state.tuning.spawn.enemy_interval {
        state.spawn.timer = 0;
        try_spawn_enemy(state);
    }

    // A boss that died earlier this tick no longer holds the gate shut
    let boss_alive = state.boss.as_ref().is_some_and(|b| !b.is_dead());
    if state.score >= state.spawn.boss_threshold && !boss_alive {
        spawn_boss(state);
    }
}

/// One spawn attempt on a randomly chosen cardinal edge band. The edge is
/// fixed for the whole search; only the offset along it is re-rolled.
fn try_spawn_enemy(state: &mut GameState) {
    let dist = state.tuning.spawn.edge_distance;
    let side = state.rng.random_range(0..4u32);

    for _ in 0..state.tuning.spawn.placement_attempts {
        let offset = (state.rng.random::<f32>() - 0.5) * dist;
        let (x, z) = match side {
            0 => (offset, -dist),
            1 => (dist, offset),
            2 => (offset, dist),
            _ => (-dist, offset),
        };
        if !state.field.blocked(x, z) {
            let speed = state.tuning.enemy.base_speed
                + state.rng.random::<f32>() * state.tuning.enemy.speed_jitter;
            let pos = Vec2::new(x, z);
            state.enemies.push(Actor::enemy(pos, speed, &state.tuning));
            state.events.push(SimEvent::EnemySpawned { pos });
            return;
        }
    }
    log::debug!("enemy spawn skipped: no clear point on edge {side}");
}

fn spawn_boss(state: &mut GameState) {
    let boss = Actor::boss(&state.tuning);
    let pos = boss.pos;
    state.boss = Some(boss);
    state.spawn.boss_threshold += state.tuning.spawn.boss_score_step;
    state.events.push(SimEvent::BossSpawned { pos });
    log::info!(
        "boss spawned at ({}, {}); next gate at {}",
        pos.x,
        pos.y,
        state.spawn.boss_threshold
    );
}
