//! Collision detection between cells.
//!
//! Detection only: nothing here pushes cells apart. Candidates come from the
//! quadtree and are confirmed with an exact circle test.

use glam::Vec2;

/// An unordered pair of colliding cells, stored as `(min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollisionPair(pub u32, pub u32);

impl CollisionPair {
    #[inline]
    pub fn new(a: u32, b: u32) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }
}

/// Check if two circles overlap. Touching circles do not.
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    let r = a_radius + b_radius;
    a.distance_squared(b) < r * r
}
