//! Shell Strike - a top-down city brawler
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, AI, melee combat, spawning)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, raw input devices, and the HUD live in the embedding frontend.
//! The sim consumes one `TickInput` snapshot per tick and reports back through
//! `SimEvent`s plus plain reads of `GameState`.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
///
/// Structural constants only; balance numbers live in [`tuning::Tuning`].
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per displayed frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Half-extent of the walkable world on each axis
    pub const WORLD_BOUND: f32 = 1000.0;
    /// Fixed padding added to every obstacle half-extent
    pub const OBSTACLE_MARGIN: f32 = 10.0;

    /// Per-tick lerp factor pulling the player's facing toward its heading
    pub const FACING_LERP: f32 = 0.2;
    /// Leg-swing phase advance per tick while moving (cosmetic)
    pub const WALK_CYCLE_RATE: f32 = 0.25;

    /// Forward offset of the melee hit probe from the attacker
    pub const ATTACK_PROBE_DIST: f32 = 40.0;
    /// Remaining attack cooldown below which the weapon pose resets
    pub const ATTACK_POSE_RESET: u32 = 20;

    /// Damage-flash durations in ticks (cosmetic)
    pub const ENEMY_FLASH_TICKS: u32 = 6;
    pub const BOSS_FLASH_TICKS: u32 = 3;

    /// Death-burst parameters: packed RGB color, fragment count, burst height
    pub const ENEMY_BURST_COLOR: u32 = 0xff0000;
    pub const ENEMY_BURST_COUNT: u32 = 15;
    pub const ENEMY_BURST_HEIGHT: f32 = 25.0;
    pub const BOSS_BURST_COLOR: u32 = 0xffaa00;
    pub const BOSS_BURST_COUNT: u32 = 50;
    pub const BOSS_BURST_HEIGHT: f32 = 40.0;

    /// Fragment lifetime in ticks
    pub const FRAGMENT_LIFETIME: u32 = 40;
    /// Downward acceleration per tick on fragment vertical velocity
    pub const FRAGMENT_GRAVITY: f32 = 0.5;
    /// Velocity fraction kept on ground bounce
    pub const FRAGMENT_RESTITUTION: f32 = 0.5;
    /// Cap on live fragments; oldest are dropped first
    pub const MAX_FRAGMENTS: usize = 512;

    /// Steam emitters reset to their base height above this
    pub const STEAM_CEILING: f32 = 30.0;
}

/// Heading angle of a ground-plane delta, measured from +Z toward +X
///
/// Ground-plane vectors store world (x, z) in `Vec2`'s (x, y) slots.
#[inline]
pub fn heading(delta: Vec2) -> f32 {
    delta.x.atan2(delta.y)
}

/// Unit direction for a heading angle (inverse of `heading`)
#[inline]
pub fn heading_dir(facing: f32) -> Vec2 {
    Vec2::new(facing.sin(), facing.cos())
}
