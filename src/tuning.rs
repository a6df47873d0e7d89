//! Data-driven game balance
//!
//! Every gameplay number that a designer might touch lives here; structural
//! constants stay in [`crate::consts`]. Defaults reproduce the shipped
//! balance, and a whole table can be overridden from JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Player balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerTuning {
    /// Movement speed in units per tick
    pub speed: f32,
    pub max_health: i32,
    /// Melee reach carried on the actor record (display/AI hinting)
    pub attack_range: f32,
    /// Ticks between attacks
    pub attack_cooldown: u32,
    /// Damage dealt to every target caught by the hit probe
    pub attack_damage: i32,
    /// Hit-probe radius against regular enemies
    pub hit_radius: f32,
    /// Hit-probe radius against the boss (larger target)
    pub boss_hit_radius: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 4.0,
            max_health: 100,
            attack_range: 70.0,
            attack_cooldown: 30,
            attack_damage: 50,
            hit_radius: 60.0,
            boss_hit_radius: 80.0,
        }
    }
}

/// Regular enemy balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyTuning {
    /// Base movement speed; each spawn adds `rng[0, speed_jitter)`
    pub base_speed: f32,
    pub speed_jitter: f32,
    pub max_health: i32,
    /// Melee damage dealt to the player
    pub damage: i32,
    /// Ticks between melee hits
    pub attack_cooldown: u32,
    /// Advance toward the player beyond this distance
    pub chase_radius: f32,
    /// Melee connects inside this distance
    pub attack_radius: f32,
    /// One-shot lunge nudge applied on a connecting hit
    pub lunge_step: f32,
    /// Score awarded on death
    pub score: u64,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            base_speed: 1.5,
            speed_jitter: 1.0,
            max_health: 50,
            damage: 10,
            attack_cooldown: 60,
            chase_radius: 35.0,
            attack_radius: 45.0,
            lunge_step: 5.0,
            score: 100,
        }
    }
}

/// Boss balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossTuning {
    pub speed: f32,
    pub max_health: i32,
    pub damage: i32,
    pub attack_cooldown: u32,
    /// Ticks between dash steps
    pub dash_cooldown: u32,
    /// Fixed dash step length (not scaled by `speed`)
    pub dash_step: f32,
    /// Dash band: closes with dashes beyond this distance
    pub dash_radius: f32,
    /// Advance band: walks at `speed` beyond this distance
    pub advance_radius: f32,
    /// Melee connects inside this distance
    pub attack_radius: f32,
    /// Score awarded on death
    pub score: u64,
    /// Fixed map location where the boss appears
    pub spawn_pos: Vec2,
}

impl Default for BossTuning {
    fn default() -> Self {
        Self {
            speed: 1.2,
            max_health: 300,
            damage: 25,
            attack_cooldown: 40,
            dash_cooldown: 5,
            dash_step: 10.0,
            dash_radius: 150.0,
            advance_radius: 50.0,
            attack_radius: 60.0,
            score: 1000,
            spawn_pos: Vec2::new(0.0, -500.0),
        }
    }
}

/// Wave/boss spawn pacing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnTuning {
    /// Ticks between enemy spawn attempts
    pub enemy_interval: u32,
    /// Distance of the four spawn edge-bands from the origin
    pub edge_distance: f32,
    /// Bounded placement search length
    pub placement_attempts: u32,
    /// Score gate for the first boss
    pub boss_score_start: u64,
    /// Gate increase after each boss spawn
    pub boss_score_step: u64,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            enemy_interval: 100,
            edge_distance: 800.0,
            placement_attempts: 10,
            boss_score_start: 500,
            boss_score_step: 500,
        }
    }
}

/// Complete balance table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub boss: BossTuning,
    pub spawn: SpawnTuning,
}

impl Tuning {
    /// Parse a tuning table from JSON; missing sections keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
