//! Minimal geometry contract consumed by the tree.
//!
//! Rectangles are stored as center plus half-extents, with the edges derived
//! on demand. All containment predicates are strict: touching an edge does
//! not count as being inside.

use glam::Vec2;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Center point.
    pub center: Vec2,
    /// Half width and half height, never negative.
    pub half_extents: Vec2,
}

impl Rect {
    /// Create a rectangle from its center and half extents.
    #[inline]
    pub fn from_center(x: f32, y: f32, half_width: f32, half_height: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            half_extents: Vec2::new(half_width.max(0.0), half_height.max(0.0)),
        }
    }

    /// Create a rectangle from its top-left corner and size.
    #[inline]
    pub fn from_top_left(left: f32, top: f32, width: f32, height: f32) -> Self {
        let half_width = width / 2.0;
        let half_height = height / 2.0;
        Self::from_center(left + half_width, top + half_height, half_width, half_height)
    }

    /// Create a rectangle from its four edges.
    #[inline]
    pub fn from_coords(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::from_top_left(left, top, right - left, bottom - top)
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.center.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.center.y
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.half_extents.x
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.half_extents.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.half_extents.x * 2.0
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.half_extents.y * 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.half_extents.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.half_extents.y
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half_extents.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half_extents.x
    }

    /// Check if `other` lies strictly inside this rectangle.
    #[inline]
    pub fn contains(&self, other: &Rect) -> bool {
        other.top() > self.top()
            && other.bottom() < self.bottom()
            && other.left() > self.left()
            && other.right() < self.right()
    }

    /// Check if a point lies strictly inside this rectangle.
    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.y > self.top() && point.y < self.bottom() && point.x > self.left() && point.x < self.right()
    }

    /// Check if two rectangles overlap with a non-zero area.
    #[inline]
    pub fn collides(&self, other: &Rect) -> bool {
        other.left() < self.right()
            && other.right() > self.left()
            && other.top() < self.bottom()
            && other.bottom() > self.top()
    }

    /// The four quadrants split at the center, in `nw, ne, sw, se` order.
    pub fn quadrants(&self) -> [Rect; 4] {
        let (x, y) = (self.x(), self.y());
        [
            Rect::from_coords(self.left(), self.top(), x, y),
            Rect::from_coords(x, self.top(), self.right(), y),
            Rect::from_coords(self.left(), y, x, self.bottom()),
            Rect::from_coords(x, y, self.right(), self.bottom()),
        ]
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}][{},{}]", self.top(), self.left(), self.bottom(), self.right())
    }
}

/// Anything with an axis-aligned bounding box.
pub trait Bounded {
    fn bounds(&self) -> Rect;
}

impl Bounded for Rect {
    #[inline]
    fn bounds(&self) -> Rect {
        *self
    }
}

/// Resolves an entity handle to the entity's current bounds.
///
/// The tree only ever stores handles, so every operation that needs to know
/// where an entity is right now goes through this trait. Returning `None`
/// means the entity is gone from the external collection.
pub trait Locate<K> {
    fn locate(&self, key: K) -> Option<Rect>;
}

impl<T: Bounded> Locate<usize> for [T] {
    #[inline]
    fn locate(&self, key: usize) -> Option<Rect> {
        self.get(key).map(Bounded::bounds)
    }
}

impl<T: Bounded> Locate<usize> for Vec<T> {
    #[inline]
    fn locate(&self, key: usize) -> Option<Rect> {
        self.as_slice().locate(key)
    }
}

impl<K, T, S> Locate<K> for HashMap<K, T, S>
where
    K: Eq + Hash,
    T: Bounded,
    S: BuildHasher,
{
    #[inline]
    fn locate(&self, key: K) -> Option<Rect> {
        self.get(&key).map(Bounded::bounds)
    }
}
