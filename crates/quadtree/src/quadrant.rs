//! Quadrant routing.

use crate::geometry::Rect;
use glam::Vec2;

/// One of the four equal sub-regions of a node.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Top left.
    Nw = 0,
    /// Top right.
    Ne = 1,
    /// Bottom left.
    Sw = 2,
    /// Bottom right.
    Se = 3,
}

impl Quadrant {
    /// All quadrants in child storage order.
    pub const ALL: [Quadrant; 4] = [Quadrant::Nw, Quadrant::Ne, Quadrant::Sw, Quadrant::Se];

    /// Index into a node's child array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short lowercase name (`nw`, `ne`, `sw`, `se`).
    pub const fn name(self) -> &'static str {
        match self {
            Quadrant::Nw => "nw",
            Quadrant::Ne => "ne",
            Quadrant::Sw => "sw",
            Quadrant::Se => "se",
        }
    }

    /// Find the quadrant around `center` that `rect` lies strictly inside.
    ///
    /// Returns `None` when the rectangle touches or crosses either midline.
    #[inline]
    pub fn locate(center: Vec2, rect: &Rect) -> Option<Quadrant> {
        let above = rect.bottom() < center.y;
        let below = rect.top() > center.y;
        let left = rect.right() < center.x;
        let right = rect.left() > center.x;

        match (above, below, left, right) {
            (true, _, true, _) => Some(Quadrant::Nw),
            (true, _, _, true) => Some(Quadrant::Ne),
            (_, true, true, _) => Some(Quadrant::Sw),
            (_, true, _, true) => Some(Quadrant::Se),
            _ => None,
        }
    }
}
