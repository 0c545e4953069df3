//! Simulated cell.

use glam::Vec2;
use quadtree::{Bounded, Rect};

/// A round cell drifting at a constant velocity.
#[derive(Debug, Clone)]
pub struct Cell {
    /// Unique node ID.
    pub id: u32,
    /// Center in world coordinates.
    pub position: Vec2,
    /// Displacement per tick.
    pub velocity: Vec2,
    /// Cell radius.
    pub radius: f32,
}

impl Cell {
    pub fn new(id: u32, position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self {
            id,
            position,
            velocity,
            radius,
        }
    }

    /// Advance one tick.
    #[inline]
    pub fn tick(&mut self) {
        self.position += self.velocity;
    }

    /// Heading in radians, used to rotate the cell when drawing it.
    #[inline]
    pub fn heading(&self) -> f32 {
        self.velocity.y.atan2(self.velocity.x)
    }
}

impl Bounded for Cell {
    /// Square box around the circle.
    #[inline]
    fn bounds(&self) -> Rect {
        Rect::from_center(self.position.x, self.position.y, self.radius, self.radius)
    }
}
