//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick quantities only (cooldowns and speeds count ticks)
//! - Seeded RNG only
//! - No rendering or platform dependencies; frontends read state and drain
//!   events
//!
//! One `tick` call advances everything: player, enemies, boss, spawning,
//! and cosmetic effects, in that order.

pub mod collision;
pub mod combat;
pub mod effects;
pub mod movement;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionField, Obstacle};
pub use combat::resolve_attack;
pub use effects::{EffectQueue, Fragment, SteamEmitter};
pub use state::{Actor, ActorKind, GamePhase, GameState, SimEvent, SpawnState};
pub use tick::{TickInput, tick};
