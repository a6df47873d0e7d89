//! Static obstacle registry and point-blocking queries
//!
//! The city is built once before the first tick; after that the field is
//! immutable and every movement step asks it whether a candidate point is
//! inside any padded obstacle footprint. Boundary points count as free;
//! several placement searches rely on the strict inequality.

use crate::consts::OBSTACLE_MARGIN;

/// Axis-aligned obstacle footprint on the ground plane
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub x: f32,
    pub z: f32,
    /// Half-extent along x, margin included
    pub half_width: f32,
    /// Half-extent along z, margin included
    pub half_depth: f32,
}

impl Obstacle {
    /// True iff the point is strictly inside the footprint.
    #[inline]
    pub fn contains(&self, x: f32, z: f32) -> bool {
        x > self.x - self.half_width
            && x < self.x + self.half_width
            && z > self.z - self.half_depth
            && z < self.z + self.half_depth
    }
}

/// Static registry of obstacle footprints
#[derive(Debug, Clone, Default)]
pub struct CollisionField {
    obstacles: Vec<Obstacle>,
}

impl CollisionField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an obstacle centered at (x, z). The stored half-extents are
    /// padded by [`OBSTACLE_MARGIN`] so actors keep visual clearance from
    /// walls. There is no removal; the world is static after construction.
    pub fn add_obstacle(&mut self, x: f32, z: f32, width: f32, depth: f32) {
        self.obstacles.push(Obstacle {
            x,
            z,
            half_width: width / 2.0 + OBSTACLE_MARGIN,
            half_depth: depth / 2.0 + OBSTACLE_MARGIN,
        });
    }

    /// True iff the point is strictly inside any registered obstacle.
    pub fn blocked(&self, x: f32, z: f32) -> bool {
        self.obstacles.iter().any(|obs| obs.contains(x, z))
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }
}
