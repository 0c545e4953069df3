//! Dynamic region quadtree.
//!
//! This crate contains:
//! - The geometry contract the tree consumes (`Rect`, `Bounded`, `Locate`)
//! - Quadrant routing with strict midline tie-breaks
//! - The `Quadtree` itself: insertion, splitting, per-tick recalculation and
//!   candidate retrieval over entity handles

mod config;
mod error;
pub mod geometry;
mod quadrant;
mod tree;

pub use config::QuadtreeConfig;
pub use error::QuadtreeError;
pub use geometry::{Bounded, Locate, Rect};
pub use quadrant::Quadrant;
pub use tree::{Quadtree, TreeStats};
