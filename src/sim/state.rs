//! Simulation state and core types
//!
//! One `GameState` owns every mutable gameplay value; only `tick` mutates it.
//! Player, enemies, and the boss share one `Actor` record with a tagged
//! variant for the fields that differ; behavior dispatch is a `match`, not a
//! trait object.

use glam::{Vec2, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::CollisionField;
use super::effects::EffectQueue;
use crate::tuning::Tuning;

/// Current phase of a run. `GameOver` is terminal; ticks become no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    GameOver,
}

/// Variant-specific actor fields
#[derive(Debug, Clone)]
pub enum ActorKind {
    Player {
        /// Weapon currently in the swing pose (cosmetic)
        attacking: bool,
        attack_range: f32,
        attack_cooldown: u32,
        /// Leg-swing phase, advanced only while moving (cosmetic)
        walk_cycle: f32,
    },
    Enemy {
        damage: i32,
        attack_cooldown: u32,
        dead: bool,
    },
    Boss {
        damage: i32,
        attack_cooldown: u32,
        dash_cooldown: u32,
        dead: bool,
    },
}

/// Shared movement/health record underlying every combatant
#[derive(Debug, Clone)]
pub struct Actor {
    /// Ground-plane position (x, z)
    pub pos: Vec2,
    /// Heading from +Z toward +X, radians
    pub facing: f32,
    pub health: i32,
    pub max_health: i32,
    /// Movement speed in units per tick
    pub speed: f32,
    /// Damage-flash countdown (cosmetic)
    pub flash_ticks: u32,
    pub kind: ActorKind,
}

impl Actor {
    pub fn player(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::ZERO,
            facing: 0.0,
            health: tuning.player.max_health,
            max_health: tuning.player.max_health,
            speed: tuning.player.speed,
            flash_ticks: 0,
            kind: ActorKind::Player {
                attacking: false,
                attack_range: tuning.player.attack_range,
                attack_cooldown: 0,
                walk_cycle: 0.0,
            },
        }
    }

    pub fn enemy(pos: Vec2, speed: f32, tuning: &Tuning) -> Self {
        Self {
            pos,
            facing: 0.0,
            health: tuning.enemy.max_health,
            max_health: tuning.enemy.max_health,
            speed,
            flash_ticks: 0,
            kind: ActorKind::Enemy {
                damage: tuning.enemy.damage,
                attack_cooldown: 0,
                dead: false,
            },
        }
    }

    pub fn boss(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.boss.spawn_pos,
            facing: 0.0,
            health: tuning.boss.max_health,
            max_health: tuning.boss.max_health,
            speed: tuning.boss.speed,
            flash_ticks: 0,
            kind: ActorKind::Boss {
                damage: tuning.boss.damage,
                attack_cooldown: 0,
                dash_cooldown: 0,
                dead: false,
            },
        }
    }

    /// True for a dead enemy or boss; the player ends the run instead.
    pub fn is_dead(&self) -> bool {
        match self.kind {
            ActorKind::Player { .. } => false,
            ActorKind::Enemy { dead, .. } | ActorKind::Boss { dead, .. } => dead,
        }
    }
}

/// Wave timer and boss gate
#[derive(Debug, Clone)]
pub struct SpawnState {
    /// Ticks since the last enemy spawn attempt
    pub timer: u32,
    /// Score gate for the next boss; raised after every boss spawn
    pub boss_threshold: u64,
}

/// One-way notifications drained by the embedding frontend once per tick
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    ScoreChanged(u64),
    HealthChanged { current: i32, max: i32 },
    EnemySpawned { pos: Vec2 },
    BossSpawned { pos: Vec2 },
    /// Fragment burst request mirrored into the effect queue
    EffectBurst { pos: Vec3, color: u32, count: u32 },
    /// Ground decal for a player swing
    SlashDecal { pos: Vec2, facing: f32 },
    GameOver { score: u64 },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Actor,
    pub enemies: Vec<Actor>,
    /// At most one live boss; cleared when it dies
    pub boss: Option<Actor>,
    pub spawn: SpawnState,
    pub field: CollisionField,
    pub effects: EffectQueue,
    /// Events produced this tick, in emission order
    pub events: Vec<SimEvent>,
    pub tuning: Tuning,
    pub rng: Pcg32,
}

impl GameState {
    /// Create a run with the default balance table.
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let player = Actor::player(&tuning);
        let boss_threshold = tuning.spawn.boss_score_start;
        Self {
            seed,
            phase: GamePhase::Playing,
            score: 0,
            time_ticks: 0,
            player,
            enemies: Vec::new(),
            boss: None,
            spawn: SpawnState {
                timer: 0,
                boss_threshold,
            },
            field: CollisionField::new(),
            effects: EffectQueue::new(),
            events: Vec::new(),
            tuning,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// World-builder hook: register a static obstacle (before the first tick).
    pub fn add_obstacle(&mut self, x: f32, z: f32, width: f32, depth: f32) {
        self.field.add_obstacle(x, z, width, depth);
    }

    /// World-builder hook: register an ambient steam emitter.
    pub fn register_steam_emitter(&mut self, pos: Vec3, rise_speed: f32, phase: f32) {
        self.effects.register_steam(pos, rise_speed, phase);
    }

    /// Hand this tick's events to the frontend, leaving the queue empty.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    /// Elapsed simulation time in seconds (drives cosmetic oscillations).
    pub fn sim_seconds(&self) -> f32 {
        self.time_ticks as f32 * crate::consts::SIM_DT
    }
}
