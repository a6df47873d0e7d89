//! Simulation tick
//!
//! Core game loop that advances the world one tick: player update (attack
//! resolution folded in), enemy updates, boss update, spawn bookkeeping,
//! effect aging, then the terminal check. Once the phase is `GameOver` a
//! tick is a no-op; the transition is one-way.

use glam::{Vec2, Vec3};

use super::collision::CollisionField;
use super::combat;
use super::movement;
use super::spawn;
use super::state::{Actor, ActorKind, GamePhase, GameState, SimEvent};
use crate::consts::{ATTACK_POSE_RESET, FACING_LERP, WALK_CYCLE_RATE};
use crate::heading;
use crate::tuning::Tuning;

/// Input snapshot for a single tick
///
/// The camera basis arrives already flattened to the ground plane and
/// normalized; the four move flags add and subtract the basis vectors.
#[derive(Debug, Clone)]
pub struct TickInput {
    pub forward: Vec2,
    pub right: Vec2,
    pub move_forward: bool,
    pub move_back: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub attack: bool,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            forward: Vec2::new(0.0, -1.0),
            right: Vec2::new(1.0, 0.0),
            move_forward: false,
            move_back: false,
            strafe_left: false,
            strafe_right: false,
            attack: false,
        }
    }
}

impl TickInput {
    /// Build a snapshot from a raw camera-forward vector: drop the vertical
    /// component, renormalize, and derive the right vector on the ground
    /// plane.
    pub fn with_camera(camera_forward: Vec3) -> Self {
        let forward = Vec2::new(camera_forward.x, camera_forward.z).normalize_or_zero();
        let right = Vec2::new(-forward.y, forward.x);
        Self {
            forward,
            right,
            ..Self::default()
        }
    }
}

/// Advance the game state by one tick.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.time_ticks += 1;

    update_player(state, input);

    let GameState {
        player,
        enemies,
        boss,
        field,
        events,
        tuning,
        ..
    } = &mut *state;
    for enemy in enemies.iter_mut() {
        update_enemy(enemy, player, field, events, tuning);
    }
    if let Some(boss) = boss {
        update_boss(boss, player, field, events, tuning);
    }

    spawn::run(state);

    let secs = state.sim_seconds();
    state.effects.update(secs);

    decay_flashes(state);
    prune_dead(state);
    check_game_over(state);
}

/// Player movement, facing, and attack initiation.
fn update_player(state: &mut GameState, input: &TickInput) {
    let mut dir = Vec2::ZERO;
    if input.move_forward {
        dir += input.forward;
    }
    if input.move_back {
        dir -= input.forward;
    }
    if input.strafe_left {
        dir -= input.right;
    }
    if input.strafe_right {
        dir += input.right;
    }
    let moving = dir != Vec2::ZERO;

    if moving {
        let dir = dir.normalize();
        let next = movement::step(&state.field, state.player.pos, dir * state.player.speed);
        state.player.pos = movement::clamp_to_world(next);
        // Plain lerp toward the heading; holds whenever idle
        let target = heading(dir);
        state.player.facing += (target - state.player.facing) * FACING_LERP;
    }

    let ready = matches!(
        state.player.kind,
        ActorKind::Player { attack_cooldown: 0, .. }
    );
    if input.attack && ready {
        begin_attack(state);
    }

    let ActorKind::Player {
        attacking,
        attack_cooldown,
        walk_cycle,
        ..
    } = &mut state.player.kind
    else {
        return;
    };
    if moving {
        *walk_cycle += WALK_CYCLE_RATE;
    } else {
        *walk_cycle = 0.0;
    }
    if *attack_cooldown > 0 {
        *attack_cooldown -= 1;
    }
    if *attacking && *attack_cooldown < ATTACK_POSE_RESET {
        *attacking = false;
    }
}

/// Start a swing: pose, cooldown, decal, and the one-shot hit probe.
fn begin_attack(state: &mut GameState) {
    if let ActorKind::Player {
        attacking,
        attack_cooldown,
        ..
    } = &mut state.player.kind
    {
        *attacking = true;
        *attack_cooldown = state.tuning.player.attack_cooldown;
    }
    state.events.push(SimEvent::SlashDecal {
        pos: state.player.pos,
        facing: state.player.facing,
    });
    combat::resolve_attack(state);
}

/// Distance-band enemy behavior, re-evaluated from scratch every tick.
fn update_enemy(
    enemy: &mut Actor,
    player: &mut Actor,
    field: &CollisionField,
    events: &mut Vec<SimEvent>,
    tuning: &Tuning,
) {
    let ActorKind::Enemy {
        damage,
        attack_cooldown,
        dead,
    } = &mut enemy.kind
    else {
        return;
    };
    if *dead {
        return;
    }

    let to_player = player.pos - enemy.pos;
    let distance = to_player.length();
    let dir = to_player.normalize_or_zero();
    // Enemies snap their facing; only the player smooths it
    enemy.facing = heading(to_player);

    if distance > tuning.enemy.chase_radius {
        enemy.pos = movement::step(field, enemy.pos, dir * enemy.speed);
    }

    if distance < tuning.enemy.attack_radius && *attack_cooldown == 0 {
        combat::damage_player(player, *damage, events);
        *attack_cooldown = tuning.enemy.attack_cooldown;
        // Lunge cue toward the target
        enemy.pos += dir * tuning.enemy.lunge_step;
    }

    if *attack_cooldown > 0 {
        *attack_cooldown -= 1;
    }
}

/// Boss behavior: dash band, advance band, or stationary, then melee.
fn update_boss(
    boss: &mut Actor,
    player: &mut Actor,
    field: &CollisionField,
    events: &mut Vec<SimEvent>,
    tuning: &Tuning,
) {
    let ActorKind::Boss {
        damage,
        attack_cooldown,
        dash_cooldown,
        dead,
    } = &mut boss.kind
    else {
        return;
    };
    if *dead {
        return;
    }

    let to_player = player.pos - boss.pos;
    let distance = to_player.length();
    let dir = to_player.normalize_or_zero();
    boss.facing = heading(to_player);

    if *dash_cooldown == 0 && distance > tuning.boss.dash_radius {
        // Fixed-length closing step, not scaled by walk speed
        boss.pos = movement::step(field, boss.pos, dir * tuning.boss.dash_step);
        *dash_cooldown = tuning.boss.dash_cooldown;
    } else if distance > tuning.boss.advance_radius {
        boss.pos = movement::step(field, boss.pos, dir * boss.speed);
    }

    if distance < tuning.boss.attack_radius && *attack_cooldown == 0 {
        combat::damage_player(player, *damage, events);
        *attack_cooldown = tuning.boss.attack_cooldown;
    }

    if *attack_cooldown > 0 {
        *attack_cooldown -= 1;
    }
    if *dash_cooldown > 0 {
        *dash_cooldown -= 1;
    }
}

fn decay_flashes(state: &mut GameState) {
    state.player.flash_ticks = state.player.flash_ticks.saturating_sub(1);
    for enemy in &mut state.enemies {
        enemy.flash_ticks = enemy.flash_ticks.saturating_sub(1);
    }
    if let Some(boss) = &mut state.boss {
        boss.flash_ticks = boss.flash_ticks.saturating_sub(1);
    }
}

/// Drop this tick's corpses so the next tick's active set excludes them.
fn prune_dead(state: &mut GameState) {
    state.enemies.retain(|e| !e.is_dead());
    if state.boss.as_ref().is_some_and(Actor::is_dead) {
        state.boss = None;
    }
}

fn check_game_over(state: &mut GameState) {
    if state.player.health == 0 {
        state.phase = GamePhase::GameOver;
        state.events.push(SimEvent::GameOver { score: state.score });
        log::info!("game over at score {}", state.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward_input() -> TickInput {
        TickInput {
            forward: Vec2::new(0.0, 1.0),
            right: Vec2::new(-1.0, 0.0),
            move_forward: true,
            ..Default::default()
        }
    }

    fn add_enemy(state: &mut GameState, pos: Vec2) {
        let speed = state.tuning.enemy.base_speed;
        let enemy = Actor::enemy(pos, speed, &state.tuning);
        state.enemies.push(enemy);
    }

    #[test]
    fn test_idle_tick_holds_player() {
        let mut state = GameState::new(1);
        state.player.facing = 1.0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.pos, Vec2::ZERO);
        assert_eq!(state.player.facing, 1.0, "facing holds while idle");
    }

    #[test]
    fn test_forward_movement_follows_camera_basis() {
        let mut state = GameState::new(1);
        tick(&mut state, &forward_input());
        assert_eq!(state.player.pos, Vec2::new(0.0, 4.0));
    }

    #[test]
    fn test_diagonal_input_is_normalized() {
        let mut state = GameState::new(1);
        let input = TickInput {
            move_forward: true,
            strafe_right: true,
            ..forward_input()
        };
        tick(&mut state, &input);
        assert!((state.player.pos.length() - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_with_camera_flattens_and_derives_right() {
        let input = TickInput::with_camera(Vec3::new(0.0, -3.0, 4.0));
        assert!((input.forward - Vec2::new(0.0, 1.0)).length() < 1e-6);
        assert!((input.right - Vec2::new(-1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_player_clamped_to_world_bound() {
        let mut state = GameState::new(1);
        state.player.pos = Vec2::new(0.0, 999.0);
        for _ in 0..5 {
            tick(&mut state, &forward_input());
        }
        assert_eq!(state.player.pos.y, 1000.0);
    }

    #[test]
    fn test_player_slides_along_wall() {
        let mut state = GameState::new(1);
        // Padded footprint spans x in [-30, 30], z in [10, 70]
        state.add_obstacle(0.0, 40.0, 40.0, 40.0);
        state.player.pos = Vec2::new(0.0, 8.0);
        let input = TickInput {
            move_forward: true,
            strafe_right: true,
            ..forward_input()
        };
        tick(&mut state, &input);
        // Forward (+z) is blocked, strafe (-x) still applies
        let step = 4.0 / 2.0_f32.sqrt();
        assert_eq!(state.player.pos.y, 8.0);
        assert!((state.player.pos.x - -step).abs() < 1e-4);
    }

    #[test]
    fn test_facing_lerps_toward_heading() {
        let mut state = GameState::new(1);
        let input = TickInput {
            strafe_right: true,
            ..TickInput::default()
        };
        // Default basis: right is +X, heading π/2
        tick(&mut state, &input);
        let expected = std::f32::consts::FRAC_PI_2 * FACING_LERP;
        assert!((state.player.facing - expected).abs() < 1e-5);
    }

    #[test]
    fn test_walk_cycle_advances_and_resets() {
        let mut state = GameState::new(1);
        tick(&mut state, &forward_input());
        tick(&mut state, &forward_input());
        let ActorKind::Player { walk_cycle, .. } = state.player.kind else {
            unreachable!()
        };
        assert!((walk_cycle - 2.0 * WALK_CYCLE_RATE).abs() < 1e-6);

        tick(&mut state, &TickInput::default());
        let ActorKind::Player { walk_cycle, .. } = state.player.kind else {
            unreachable!()
        };
        assert_eq!(walk_cycle, 0.0);
    }

    #[test]
    fn test_attack_cooldown_and_pose_cycle() {
        let mut state = GameState::new(1);
        let input = TickInput {
            attack: true,
            ..TickInput::default()
        };
        tick(&mut state, &input);
        let ActorKind::Player {
            attacking,
            attack_cooldown,
            ..
        } = state.player.kind
        else {
            unreachable!()
        };
        assert!(attacking);
        assert_eq!(attack_cooldown, 29, "cooldown set then decremented");
        assert!(matches!(
            state.drain_events().first(),
            Some(SimEvent::SlashDecal { .. })
        ));

        // Pose resets once the cooldown dips under the threshold
        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        let ActorKind::Player {
            attacking,
            attack_cooldown,
            ..
        } = state.player.kind
        else {
            unreachable!()
        };
        assert_eq!(attack_cooldown, 19);
        assert!(!attacking);
    }

    #[test]
    fn test_held_attack_fires_once_per_cooldown() {
        let mut state = GameState::new(1);
        add_enemy(&mut state, Vec2::new(0.0, 40.0));
        state.enemies[0].health = 1000;
        state.player.facing = 0.0;
        let input = TickInput {
            attack: true,
            ..TickInput::default()
        };
        for _ in 0..30 {
            tick(&mut state, &input);
        }
        // One swing at tick 1; the cooldown gates the rest of the window
        assert_eq!(state.enemies[0].health, 1000 - 50);
        tick(&mut state, &input);
        assert_eq!(state.enemies[0].health, 1000 - 100);
    }

    #[test]
    fn test_attack_kills_enemy_end_to_end() {
        let mut state = GameState::new(1);
        // Facing +Z at an enemy 40 units out: the probe lands on it
        add_enemy(&mut state, Vec2::new(0.0, 40.0));
        let input = TickInput {
            attack: true,
            ..TickInput::default()
        };
        tick(&mut state, &input);

        assert_eq!(state.score, 100);
        assert!(state.enemies.is_empty(), "corpse pruned by end of tick");
        // The dead enemy got no strike in: full player health
        assert_eq!(state.player.health, 100);
        let events = state.drain_events();
        assert!(events.contains(&SimEvent::ScoreChanged(100)));
        assert!(events.iter().any(|e| matches!(e, SimEvent::EffectBurst { .. })));
    }

    #[test]
    fn test_enemy_advances_when_far() {
        let mut state = GameState::new(1);
        add_enemy(&mut state, Vec2::new(0.0, 100.0));
        tick(&mut state, &TickInput::default());
        let enemy = &state.enemies[0];
        assert!((enemy.pos.y - 98.5).abs() < 1e-4);
        assert!((enemy.facing - std::f32::consts::PI).abs() < 1e-4, "faces the player directly");
    }

    #[test]
    fn test_enemy_attacks_in_close_band() {
        let mut state = GameState::new(1);
        add_enemy(&mut state, Vec2::new(0.0, 40.0));
        tick(&mut state, &TickInput::default());

        assert_eq!(state.player.health, 90);
        // Advanced 1.5 in the chase band, then lunged 5 on the hit
        assert!((state.enemies[0].pos.y - 33.5).abs() < 1e-4);
        let ActorKind::Enemy { attack_cooldown, .. } = state.enemies[0].kind else {
            unreachable!()
        };
        assert_eq!(attack_cooldown, 59);
        assert!(
            state
                .drain_events()
                .contains(&SimEvent::HealthChanged { current: 90, max: 100 })
        );
    }

    #[test]
    fn test_enemy_cooldown_gates_hits() {
        let mut state = GameState::new(1);
        add_enemy(&mut state, Vec2::new(0.0, 40.0));
        for _ in 0..60 {
            tick(&mut state, &TickInput::default());
        }
        // First hit at tick 1, cooldown runs 59..0 over the next 59 ticks
        assert_eq!(state.player.health, 90);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.health, 80);
    }

    #[test]
    fn test_boss_dash_band() {
        let mut state = GameState::new(1);
        let mut boss = Actor::boss(&state.tuning);
        boss.pos = Vec2::new(0.0, 300.0);
        state.boss = Some(boss);

        tick(&mut state, &TickInput::default());
        let boss = state.boss.as_ref().unwrap();
        assert!((boss.pos.y - 290.0).abs() < 1e-4, "fixed 10-unit dash step");

        // Dash on cooldown: falls back to the walk band
        tick(&mut state, &TickInput::default());
        let boss = state.boss.as_ref().unwrap();
        assert!((boss.pos.y - 288.8).abs() < 1e-3);
    }

    #[test]
    fn test_boss_advance_band() {
        let mut state = GameState::new(1);
        let mut boss = Actor::boss(&state.tuning);
        boss.pos = Vec2::new(0.0, 100.0);
        state.boss = Some(boss);
        tick(&mut state, &TickInput::default());
        assert!((state.boss.as_ref().unwrap().pos.y - 98.8).abs() < 1e-4);
    }

    #[test]
    fn test_boss_stationary_band_still_melees() {
        let mut state = GameState::new(1);
        let mut boss = Actor::boss(&state.tuning);
        boss.pos = Vec2::new(0.0, 40.0);
        state.boss = Some(boss);
        tick(&mut state, &TickInput::default());

        let boss = state.boss.as_ref().unwrap();
        assert_eq!(boss.pos, Vec2::new(0.0, 40.0), "inside both bands: no movement");
        assert_eq!(state.player.health, 75);
        let ActorKind::Boss { attack_cooldown, .. } = boss.kind else {
            unreachable!()
        };
        assert_eq!(attack_cooldown, 39);
    }

    #[test]
    fn test_boss_death_clears_slot() {
        let mut state = GameState::new(1);
        state.spawn.boss_threshold = u64::MAX; // keep the gate shut
        let mut boss = Actor::boss(&state.tuning);
        boss.pos = Vec2::new(0.0, 60.0);
        boss.health = 50;
        state.boss = Some(boss);

        let input = TickInput {
            attack: true,
            ..TickInput::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.score, 1000);
        assert!(state.boss.is_none(), "slot cleared in the death tick");
    }

    #[test]
    fn test_boss_respawns_when_kill_crosses_gate() {
        let mut state = GameState::new(1);
        let mut boss = Actor::boss(&state.tuning);
        boss.pos = Vec2::new(0.0, 60.0);
        boss.health = 50;
        state.boss = Some(boss);

        let input = TickInput {
            attack: true,
            ..TickInput::default()
        };
        // The kill pushes score to 1000, past the 500 gate: a fresh boss
        // takes the slot in the same tick's spawn pass.
        tick(&mut state, &input);
        let boss = state.boss.as_ref().unwrap();
        assert!(!boss.is_dead());
        assert_eq!(boss.health, 300);
        assert_eq!(state.spawn.boss_threshold, 1000);
    }

    #[test]
    fn test_game_over_freezes_simulation() {
        let mut state = GameState::new(1);
        state.player.health = 10;
        add_enemy(&mut state, Vec2::new(0.0, 40.0));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.health, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(
            state
                .drain_events()
                .contains(&SimEvent::GameOver { score: 0 })
        );

        let ticks = state.time_ticks;
        tick(&mut state, &forward_input());
        assert_eq!(state.time_ticks, ticks, "terminal phase is inert");
        assert_eq!(state.player.pos, Vec2::ZERO);
    }

    #[test]
    fn test_spawn_director_runs_inside_tick() {
        let mut state = GameState::new(9);
        for _ in 0..100 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_flash_countdown_decays() {
        let mut state = GameState::new(1);
        add_enemy(&mut state, Vec2::new(500.0, 500.0));
        state.enemies[0].flash_ticks = 3;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.enemies[0].flash_ticks, 2);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = GameState::new(77);
        let mut b = GameState::new(77);
        let input = forward_input();
        for _ in 0..250 {
            tick(&mut a, &input);
            tick(&mut b, &input);
        }
        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.score, b.score);
        assert_eq!(a.enemies.len(), b.enemies.len());
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.pos, eb.pos);
            assert_eq!(ea.speed, eb.speed);
        }
    }
}
