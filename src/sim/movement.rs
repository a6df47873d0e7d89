//! Axis-separated collision-tested movement
//!
//! Every actor moves the same way: each axis of the displacement is committed
//! independently, so a diagonal approach into a wall slides along it instead
//! of stopping dead. The z check runs against the already-committed x, which
//! keeps corner behavior identical for all three actor kinds.

use glam::Vec2;

use super::collision::CollisionField;
use crate::consts::WORLD_BOUND;

/// Apply a displacement one axis at a time, skipping any axis whose candidate
/// point lands inside an obstacle. Returns the resulting position.
pub fn step(field: &CollisionField, pos: Vec2, delta: Vec2) -> Vec2 {
    let mut next = pos;
    if !field.blocked(pos.x + delta.x, pos.y) {
        next.x += delta.x;
    }
    if !field.blocked(next.x, pos.y + delta.y) {
        next.y += delta.y;
    }
    next
}

/// Clamp a position to the walkable world square.
pub fn clamp_to_world(pos: Vec2) -> Vec2 {
    pos.clamp(Vec2::splat(-WORLD_BOUND), Vec2::splat(WORLD_BOUND))
}
