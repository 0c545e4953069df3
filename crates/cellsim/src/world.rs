//! World state management.
//!
//! Owns every cell and the quadtree indexing them. The tree only holds cell
//! IDs and looks positions up in `cells` when it needs them.

use crate::cell::Cell;
use crate::collision::{CollisionPair, circles_overlap};
use crate::config::Config;
use anyhow::ensure;
use glam::Vec2;
use quadtree::{Bounded, Quadtree, QuadtreeError, Rect, TreeStats};
use rand::Rng;
use std::collections::HashMap;
use tracing::trace;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Tick number, starting at 1.
    pub tick: u64,
    /// Cells alive after the tick.
    pub cells: usize,
    /// Cells that left the screen this tick.
    pub removed: usize,
    /// Overlapping cell pairs after the move.
    pub collisions: usize,
    /// Neighbours sensed, summed over every cell.
    pub sensed: usize,
    /// Shape of the tree after recalculation.
    pub stats: TreeStats,
}

/// The simulated screen and everything on it.
#[derive(Debug)]
pub struct World {
    /// Next cell ID to assign.
    next_id: u32,
    /// Ticks run so far.
    tick: u64,
    /// All cells by ID.
    pub(crate) cells: HashMap<u32, Cell>,
    /// Screen bounds, also the root bounds of the tree.
    pub screen: Rect,
    /// Radius given to spawned cells.
    radius: f32,
    /// Maximum velocity component given to randomly spawned cells.
    speed: f32,
    /// How far each cell senses its neighbours.
    vision: f32,
    /// QuadTree for spatial queries.
    pub quad_tree: Quadtree<u32>,
}

impl World {
    /// Create an empty world sized from the config.
    pub fn new(config: &Config) -> Result<Self, QuadtreeError> {
        let sim = &config.simulation;
        let screen = Rect::from_top_left(0.0, 0.0, sim.width, sim.height);
        Ok(Self {
            next_id: 1,
            tick: 0,
            cells: HashMap::with_capacity(sim.cells),
            screen,
            radius: sim.radius,
            speed: sim.speed,
            vision: sim.vision,
            quad_tree: Quadtree::from_config(screen, &config.quadtree)?,
        })
    }

    /// Get the next cell ID.
    fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        if self.next_id == 0 {
            self.next_id = 1; // Skip 0
        }
        id
    }

    /// Number of live cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Ticks run so far.
    #[inline]
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Get a cell by ID.
    #[inline]
    pub fn get_cell(&self, id: u32) -> Option<&Cell> {
        self.cells.get(&id)
    }

    /// Iterate over all live cells.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    /// Add a cell at `position`. The cell must fit strictly inside the screen.
    pub fn spawn_cell(&mut self, position: Vec2, velocity: Vec2) -> anyhow::Result<u32> {
        // The counter wraps, so skip IDs still held by live cells.
        let id = loop {
            let id = self.next_id();
            if !self.cells.contains_key(&id) {
                break id;
            }
        };
        let cell = Cell::new(id, position, velocity, self.radius);
        ensure!(
            self.screen.contains(&cell.bounds()),
            "cell {} at {} is outside the screen {}",
            id,
            cell.bounds(),
            self.screen
        );

        self.cells.insert(id, cell);
        if let Err(e) = self.quad_tree.add(id, &self.cells) {
            self.cells.remove(&id);
            return Err(e.into());
        }
        Ok(id)
    }

    /// Spawn `count` cells at random positions with random velocities.
    pub fn spawn_random(&mut self, count: usize) -> anyhow::Result<()> {
        ensure!(
            self.screen.width().is_finite() && self.screen.height().is_finite(),
            "screen {} must have finite extents",
            self.screen
        );
        ensure!(self.speed.is_finite(), "cell speed {} must be finite", self.speed);

        let margin = self.radius + 1.0;
        let (min_x, max_x) = (self.screen.left() + margin, self.screen.right() - margin);
        let (min_y, max_y) = (self.screen.top() + margin, self.screen.bottom() - margin);
        ensure!(
            min_x < max_x && min_y < max_y,
            "screen {} is too small for cells of radius {}",
            self.screen,
            self.radius
        );

        let speed = self.speed.abs();
        let mut rng = rand::rng();
        for _ in 0..count {
            let position = Vec2::new(rng.random_range(min_x..max_x), rng.random_range(min_y..max_y));
            let velocity = Vec2::new(
                rng.random_range(-speed..=speed),
                rng.random_range(-speed..=speed),
            );
            self.spawn_cell(position, velocity)?;
        }
        Ok(())
    }

    /// Move every cell, rebalance the tree and drop cells that left the
    /// screen.
    pub fn tick(&mut self) -> TickReport {
        self.tick += 1;

        for cell in self.cells.values_mut() {
            cell.tick();
        }

        let excluded = self.quad_tree.recalculate(&self.cells);
        for id in &excluded {
            if self.cells.remove(id).is_some() {
                trace!(cell = id, tick = self.tick, "cell left the screen");
            }
        }

        TickReport {
            tick: self.tick,
            cells: self.cells.len(),
            removed: excluded.len(),
            collisions: self.collisions().len(),
            sensed: self.sensed(),
            stats: self.quad_tree.stats(),
        }
    }

    /// Cells whose circle overlaps a vision circle of radius `range` around
    /// cell `id`, sorted by ID. The cell itself is not included.
    pub fn neighbours(&self, id: u32, range: f32) -> Vec<u32> {
        let Some(cell) = self.cells.get(&id) else {
            return Vec::new();
        };

        let region = Rect::from_center(cell.position.x, cell.position.y, range, range);
        let mut found: Vec<u32> = self
            .quad_tree
            .retrieve(&region)
            .into_iter()
            .filter(|&other| other != id)
            .filter(|other| {
                self.cells
                    .get(other)
                    .is_some_and(|o| circles_overlap(cell.position, range, o.position, o.radius))
            })
            .collect();
        found.sort_unstable();
        found
    }

    /// Total neighbours sensed within the configured vision, summed over
    /// every cell.
    pub fn sensed(&self) -> usize {
        self.cells
            .keys()
            .map(|&id| self.neighbours(id, self.vision).len())
            .sum()
    }

    /// All overlapping cell pairs, sorted.
    ///
    /// Uses the tree for candidates, so it is exact only once the tree has
    /// been recalculated for the current positions.
    pub fn collisions(&self) -> Vec<CollisionPair> {
        let mut pairs = Vec::new();
        for cell in self.cells.values() {
            for other_id in self.quad_tree.retrieve(&cell.bounds()) {
                if other_id <= cell.id {
                    continue;
                }
                if let Some(other) = self.cells.get(&other_id) {
                    if circles_overlap(cell.position, cell.radius, other.position, other.radius) {
                        pairs.push(CollisionPair::new(cell.id, other_id));
                    }
                }
            }
        }
        pairs.sort_unstable();
        pairs
    }
}
