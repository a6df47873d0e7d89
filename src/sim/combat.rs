//! Melee hit detection and damage/death resolution
//!
//! The player's swing is a single area probe fired at attack initiation, not
//! a sweep over the cooldown window. Death is resolved inside the same damage
//! call that crosses zero: score award, events, and the fragment burst all
//! happen synchronously, and the corpse is pruned by the tick loop afterward.

use glam::Vec3;
use rand_pcg::Pcg32;

use super::effects::EffectQueue;
use super::state::{Actor, ActorKind, GameState, SimEvent};
use crate::consts::{
    ATTACK_PROBE_DIST, BOSS_BURST_COLOR, BOSS_BURST_COUNT, BOSS_BURST_HEIGHT, BOSS_FLASH_TICKS,
    ENEMY_BURST_COLOR, ENEMY_BURST_COUNT, ENEMY_BURST_HEIGHT, ENEMY_FLASH_TICKS,
};
use crate::heading_dir;

/// Resolve one player swing against every live target.
///
/// The probe point sits a fixed distance ahead of the player along its
/// facing; every live enemy within the enemy hit radius takes full damage
/// (area hit, no falloff), and a live boss is tested with its own larger
/// radius.
pub fn resolve_attack(state: &mut GameState) {
    let probe = state.player.pos + heading_dir(state.player.facing) * ATTACK_PROBE_DIST;

    let GameState {
        enemies,
        boss,
        score,
        events,
        effects,
        rng,
        tuning,
        ..
    } = &mut *state;
    let damage = tuning.player.attack_damage;

    for enemy in enemies.iter_mut() {
        if enemy.is_dead() {
            continue;
        }
        if enemy.pos.distance(probe) < tuning.player.hit_radius {
            strike(enemy, damage, tuning.enemy.score, score, events, effects, rng);
        }
    }

    if let Some(boss) = boss {
        if !boss.is_dead() && boss.pos.distance(probe) < tuning.player.boss_hit_radius {
            strike(boss, damage, tuning.boss.score, score, events, effects, rng);
        }
    }
}

/// Apply damage to an enemy or boss; resolves death in the same call.
pub(super) fn strike(
    target: &mut Actor,
    amount: i32,
    award: u64,
    score: &mut u64,
    events: &mut Vec<SimEvent>,
    effects: &mut EffectQueue,
    rng: &mut Pcg32,
) {
    let (dead, flash, color, count, height) = match &mut target.kind {
        ActorKind::Enemy { dead, .. } => (
            dead,
            ENEMY_FLASH_TICKS,
            ENEMY_BURST_COLOR,
            ENEMY_BURST_COUNT,
            ENEMY_BURST_HEIGHT,
        ),
        ActorKind::Boss { dead, .. } => (
            dead,
            BOSS_FLASH_TICKS,
            BOSS_BURST_COLOR,
            BOSS_BURST_COUNT,
            BOSS_BURST_HEIGHT,
        ),
        ActorKind::Player { .. } => return,
    };
    if *dead {
        return;
    }

    target.health = (target.health - amount).max(0);
    target.flash_ticks = flash;

    if target.health == 0 {
        *dead = true;
        *score += award;
        events.push(SimEvent::ScoreChanged(*score));
        let burst_pos = Vec3::new(target.pos.x, height, target.pos.y);
        events.push(SimEvent::EffectBurst {
            pos: burst_pos,
            color,
            count,
        });
        effects.burst(burst_pos, color, count, rng);
    }
}

/// Apply melee damage to the player, clamping health at zero.
pub(super) fn damage_player(player: &mut Actor, amount: i32, events: &mut Vec<SimEvent>) {
    player.health = (player.health - amount).max(0);
    events.push(SimEvent::HealthChanged {
        current: player.health,
        max: player.max_health,
    });
}
