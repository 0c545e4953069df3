//! Quadtree error types.

use crate::geometry::Rect;
use thiserror::Error;

/// Errors that can occur while building or mutating a quadtree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadtreeError {
    #[error("max_entities must be at least 1, got {0}")]
    InvalidCapacity(usize),

    #[error("entity {entity} is not contained in {bounds} at level {level}")]
    Containment { level: u32, entity: Rect, bounds: Rect },

    #[error("entity handle does not resolve to any entity")]
    UnknownEntity,

    #[error("node at level {level} is already divided")]
    AlreadyDivided { level: u32 },

    #[error("node at level {level} is at the maximum depth")]
    DepthLimit { level: u32 },
}
