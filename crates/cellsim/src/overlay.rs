//! Debug overlay for the quadtree.
//!
//! Produces the draw list a renderer needs to show the tree: both midlines of
//! every divided node and the node's entity count at its center. Built from
//! a [`World`], it also carries one rotated sprite per cell.

use crate::world::World;
use glam::Vec2;
use quadtree::Quadtree;
use std::hash::Hash;

/// A straight line from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

/// Entity count drawn at a node's center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Label {
    pub position: Vec2,
    pub level: u32,
    pub count: usize,
}

/// A cell drawn as a circle rotated to its heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub id: u32,
    pub position: Vec2,
    pub radius: f32,
    /// Rotation in radians.
    pub heading: f32,
}

/// Grid lines and counts for every divided node of a tree.
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    pub lines: Vec<Segment>,
    pub labels: Vec<Label>,
    /// Sorted by cell ID. Empty when built from a bare tree.
    pub sprites: Vec<Sprite>,
}

impl Overlay {
    /// Build the overlay for `tree`. Leaves contribute nothing.
    pub fn from_tree<K>(tree: &Quadtree<K>) -> Self
    where
        K: Copy + Eq + Hash,
    {
        let mut overlay = Self::default();
        overlay.visit(tree);
        overlay
    }

    /// Build the overlay for the world's tree plus a sprite per cell.
    pub fn from_world(world: &World) -> Self {
        let mut overlay = Self::from_tree(&world.quad_tree);
        overlay.sprites = world
            .cells()
            .map(|cell| Sprite {
                id: cell.id,
                position: cell.position,
                radius: cell.radius,
                heading: cell.heading(),
            })
            .collect();
        overlay.sprites.sort_unstable_by_key(|sprite| sprite.id);
        overlay
    }

    fn visit<K>(&mut self, node: &Quadtree<K>)
    where
        K: Copy + Eq + Hash,
    {
        if !node.is_divided() {
            return;
        }

        let b = node.bounds();
        self.lines.push(Segment {
            from: Vec2::new(b.left(), b.y()),
            to: Vec2::new(b.right(), b.y()),
        });
        self.lines.push(Segment {
            from: Vec2::new(b.x(), b.top()),
            to: Vec2::new(b.x(), b.bottom()),
        });
        self.labels.push(Label {
            position: b.center,
            level: node.level(),
            count: node.entities_count(),
        });

        node.for_each_child(|_, child| self.visit(child));
    }
}
