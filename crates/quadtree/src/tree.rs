//! Region quadtree over entity handles.
//!
//! Every node owns its four children and a set of handles. Entities are
//! routed to a child only when they lie strictly inside one quadrant;
//! anything touching a midline stays at the node. Positions are never cached:
//! the tree asks a [`Locate`] source where an entity is whenever it needs to.

use crate::config::QuadtreeConfig;
use crate::error::QuadtreeError;
use crate::geometry::{Locate, Rect};
use crate::quadrant::Quadrant;
use std::collections::HashSet;
use std::hash::Hash;
use tracing::trace;

/// Summary of a tree's shape, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes, root included.
    pub nodes: usize,
    /// Number of nodes without children.
    pub leaves: usize,
    /// Deepest level that currently exists.
    pub depth: u32,
    /// Entities held anywhere in the tree.
    pub entities: usize,
}

/// A quadtree node. The root is the tree.
pub struct Quadtree<K> {
    bounds: Rect,
    max_entities: usize,
    max_depth: u32,
    level: u32,
    /// Handles held directly at this node.
    entities: HashSet<K>,
    /// Children in `nw, ne, sw, se` order.
    children: Option<Box<[Quadtree<K>; 4]>>,
}

impl<K> Quadtree<K>
where
    K: Copy + Eq + Hash,
{
    /// Create an empty root covering `bounds`.
    pub fn new(bounds: Rect, max_entities: usize, max_depth: u32) -> Result<Self, QuadtreeError> {
        if max_entities < 1 {
            return Err(QuadtreeError::InvalidCapacity(max_entities));
        }
        Ok(Self::node(bounds, max_entities, max_depth, 0))
    }

    /// Create an empty root from a config section.
    pub fn from_config(bounds: Rect, config: &QuadtreeConfig) -> Result<Self, QuadtreeError> {
        Self::new(bounds, config.max_entities, config.max_depth)
    }

    fn node(bounds: Rect, max_entities: usize, max_depth: u32, level: u32) -> Self {
        Self {
            bounds,
            max_entities,
            max_depth,
            level,
            entities: HashSet::new(),
            children: None,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn max_entities(&self) -> usize {
        self.max_entities
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    #[inline]
    pub fn is_divided(&self) -> bool {
        self.children.is_some()
    }

    /// Check if no entity is held anywhere at or below this node.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
            && self
                .children
                .as_ref()
                .is_none_or(|children| children.iter().all(Quadtree::is_empty))
    }

    /// Total entities held at this node and below.
    pub fn entities_count(&self) -> usize {
        let below = match &self.children {
            Some(children) => children.iter().map(Quadtree::entities_count).sum(),
            None => 0,
        };
        self.entities.len() + below
    }

    /// Check if `key` is held directly at this node. Does not search children.
    #[inline]
    pub fn includes(&self, key: K) -> bool {
        self.entities.contains(&key)
    }

    /// Check if `key` is held anywhere at or below this node.
    pub fn includes_in_subtree(&self, key: K) -> bool {
        self.includes(key)
            || self
                .children
                .as_ref()
                .is_some_and(|children| children.iter().any(|c| c.includes_in_subtree(key)))
    }

    /// Handles held directly at this node.
    pub fn entities(&self) -> impl Iterator<Item = K> + '_ {
        self.entities.iter().copied()
    }

    /// Get a child by quadrant, if the node is divided.
    #[inline]
    pub fn child(&self, quadrant: Quadrant) -> Option<&Quadtree<K>> {
        self.children.as_ref().map(|children| &children[quadrant.index()])
    }

    /// Visit the direct children, if any.
    pub fn for_each_child(&self, mut f: impl FnMut(Quadrant, &Quadtree<K>)) {
        if let Some(children) = &self.children {
            for quadrant in Quadrant::ALL {
                f(quadrant, &children[quadrant.index()]);
            }
        }
    }

    /// The quadrant of this node that `rect` lies strictly inside.
    #[inline]
    pub fn quadrant_of(&self, rect: &Rect) -> Option<Quadrant> {
        Quadrant::locate(self.bounds.center, rect)
    }

    /// Insert an entity that lies within this node's bounds.
    ///
    /// With debug assertions enabled an entity outside the bounds is rejected
    /// with [`QuadtreeError::Containment`]. Release builds skip the check and
    /// trust the caller.
    pub fn add<L>(&mut self, key: K, entities: &L) -> Result<(), QuadtreeError>
    where
        L: Locate<K> + ?Sized,
    {
        let rect = entities.locate(key).ok_or(QuadtreeError::UnknownEntity)?;
        if cfg!(debug_assertions) && !self.bounds.contains(&rect) {
            return Err(QuadtreeError::Containment {
                level: self.level,
                entity: rect,
                bounds: self.bounds,
            });
        }
        self.insert(key, rect, entities);
        Ok(())
    }

    fn insert<L>(&mut self, key: K, rect: Rect, entities: &L)
    where
        L: Locate<K> + ?Sized,
    {
        if let Some(children) = self.children.as_mut() {
            if let Some(quadrant) = Quadrant::locate(self.bounds.center, &rect) {
                children[quadrant.index()].insert(key, rect, entities);
                return;
            }
            self.entities.insert(key);
            return;
        }

        self.entities.insert(key);
        if self.entities.len() > self.max_entities && self.level < self.max_depth {
            self.subdivide(entities);
        }
    }

    /// Split this node into four children and push down every held entity
    /// that fits a single quadrant.
    pub fn split<L>(&mut self, entities: &L) -> Result<(), QuadtreeError>
    where
        L: Locate<K> + ?Sized,
    {
        if self.is_divided() {
            return Err(QuadtreeError::AlreadyDivided { level: self.level });
        }
        if self.level >= self.max_depth {
            return Err(QuadtreeError::DepthLimit { level: self.level });
        }
        self.subdivide(entities);
        Ok(())
    }

    fn subdivide<L>(&mut self, entities: &L)
    where
        L: Locate<K> + ?Sized,
    {
        let (max_entities, max_depth, level) = (self.max_entities, self.max_depth, self.level + 1);
        let children = self
            .bounds
            .quadrants()
            .map(|bounds| Self::node(bounds, max_entities, max_depth, level));
        self.children = Some(Box::new(children));
        trace!(level = self.level, entities = self.entities.len(), "split");

        for key in std::mem::take(&mut self.entities) {
            match entities.locate(key) {
                Some(rect) => self.insert(key, rect, entities),
                // Can't route it; the next recalculate hands it back.
                None => {
                    self.entities.insert(key);
                }
            }
        }
    }

    /// Rebalance after entities have moved.
    ///
    /// Entities that moved into a child are pushed down, entities that left a
    /// node are pulled up to the nearest ancestor that still contains them,
    /// and subtrees holding `max_entities` or fewer are collapsed into their
    /// root. Returns the entities that no longer fit inside this node at all,
    /// including handles that `entities` can no longer resolve. Every entity
    /// is either still in the tree or returned exactly once.
    pub fn recalculate<L>(&mut self, entities: &L) -> Vec<K>
    where
        L: Locate<K> + ?Sized,
    {
        let mut pending = Vec::new();
        if let Some(children) = self.children.as_mut() {
            for child in children.iter_mut() {
                pending.extend(child.recalculate(entities));
            }
        }
        pending.extend(self.entities.drain());

        let mut excluded = Vec::new();
        for key in pending {
            match entities.locate(key) {
                Some(rect) if self.bounds.contains(&rect) => self.insert(key, rect, entities),
                _ => excluded.push(key),
            }
        }

        if self.is_divided() && self.entities_count() <= self.max_entities {
            self.collapse();
        }

        excluded
    }

    fn collapse(&mut self) {
        if let Some(children) = self.children.take() {
            for child in *children {
                child.drain_into(&mut self.entities);
            }
            trace!(level = self.level, entities = self.entities.len(), "collapse");
        }
    }

    fn drain_into(self, out: &mut HashSet<K>) {
        out.extend(self.entities);
        if let Some(children) = self.children {
            for child in *children {
                child.drain_into(out);
            }
        }
    }

    /// Remove a handle from whichever node holds it.
    ///
    /// Searches the whole subtree since the entity may have moved. Does not
    /// collapse anything; the next [`recalculate`](Self::recalculate) does.
    pub fn remove(&mut self, key: K) -> bool {
        if self.entities.remove(&key) {
            return true;
        }
        match self.children.as_mut() {
            Some(children) => children.iter_mut().any(|child| child.remove(key)),
            None => false,
        }
    }

    /// Drop every entity and child. Bounds and limits are kept.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.children = None;
    }

    /// Candidate entities near `region`.
    ///
    /// Returns everything held at this node, plus the results of the single
    /// quadrant the region fits in, or of all four children when it touches a
    /// midline. This is a superset of the entities that actually overlap the
    /// region; apply a precise test to the result.
    pub fn retrieve(&self, region: &Rect) -> Vec<K> {
        let mut found = Vec::new();
        self.retrieve_into(region, &mut found);
        found
    }

    fn retrieve_into(&self, region: &Rect, found: &mut Vec<K>) {
        found.extend(self.entities.iter().copied());
        if let Some(children) = &self.children {
            match self.quadrant_of(region) {
                Some(quadrant) => children[quadrant.index()].retrieve_into(region, found),
                None => {
                    for child in children.iter() {
                        child.retrieve_into(region, found);
                    }
                }
            }
        }
    }

    /// Entities whose current bounds overlap `region`.
    pub fn retrieve_colliding<L>(&self, region: &Rect, entities: &L) -> Vec<K>
    where
        L: Locate<K> + ?Sized,
    {
        let mut found = self.retrieve(region);
        found.retain(|&key| entities.locate(key).is_some_and(|rect| rect.collides(region)));
        found
    }

    /// Walk the subtree and summarise its shape.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        self.collect_stats(&mut stats);
        stats
    }

    fn collect_stats(&self, stats: &mut TreeStats) {
        stats.nodes += 1;
        stats.entities += self.entities.len();
        stats.depth = stats.depth.max(self.level);
        match &self.children {
            Some(children) => {
                for child in children.iter() {
                    child.collect_stats(stats);
                }
            }
            None => stats.leaves += 1,
        }
    }
}

impl<K> std::fmt::Debug for Quadtree<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Quadtree")
            .field("bounds", &self.bounds)
            .field("level", &self.level)
            .field("entities", &self.entities.len())
            .field("divided", &self.children.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const MAX_DEPTH: u32 = 10;

    fn create_quad(size: f32, max_entities: usize) -> Quadtree<usize> {
        Quadtree::new(Rect::from_coords(0.0, 0.0, size, size), max_entities, MAX_DEPTH).unwrap()
    }

    fn entity(x: f32, y: f32) -> Rect {
        Rect::from_center(x, y, 5.0, 5.0)
    }

    fn add_all(tree: &mut Quadtree<usize>, entities: &[Rect]) {
        for key in 0..entities.len() {
            tree.add(key, entities).unwrap();
        }
    }

    /// Number of nodes in the subtree that hold `key` directly.
    fn holders(tree: &Quadtree<usize>, key: usize) -> usize {
        let mut count = usize::from(tree.includes(key));
        tree.for_each_child(|_, child| count += holders(child, key));
        count
    }

    fn all_keys(tree: &Quadtree<usize>) -> Vec<usize> {
        let mut keys: Vec<usize> = tree.entities().collect();
        tree.for_each_child(|_, child| keys.extend(all_keys(child)));
        keys.sort_unstable();
        keys
    }

    fn grid(count: usize) -> Vec<Rect> {
        (0..count)
            .map(|i| Rect::from_center(5.0 + (i % 10) as f32 * 10.0, 5.0 + (i / 10) as f32 * 10.0, 2.0, 2.0))
            .collect()
    }

    #[test]
    fn test_new_rejects_zero_capacity() {
        let result = Quadtree::<usize>::new(Rect::from_coords(0.0, 0.0, 10.0, 10.0), 0, MAX_DEPTH);
        assert_eq!(result.unwrap_err(), QuadtreeError::InvalidCapacity(0));
    }

    #[test]
    fn test_empty_tree_is_leaf() {
        let tree = create_quad(100.0, 2);
        assert!(!tree.is_divided());
        assert!(tree.is_empty());
        assert_eq!(tree.entities_count(), 0);
        assert_eq!(tree.level(), 0);
    }

    #[test]
    fn test_divides_only_past_threshold() {
        let entities = vec![entity(20.0, 20.0); 3];
        let mut tree = create_quad(100.0, 2);

        tree.add(0, &entities).unwrap();
        assert!(!tree.is_divided());
        tree.add(1, &entities).unwrap();
        assert!(!tree.is_divided());
        tree.add(2, &entities).unwrap();
        assert!(tree.is_divided());
        assert_eq!(tree.entities_count(), 3);
    }

    #[test]
    fn test_split_quadrant_bounds() {
        let entities = vec![Rect::from_center(2.5, 2.5, 1.0, 1.0); 3];
        let mut tree = create_quad(10.0, 2);
        add_all(&mut tree, &entities);
        assert!(tree.is_divided());

        let bounds = |q: Quadrant| tree.child(q).unwrap().bounds();
        assert_eq!(bounds(Quadrant::Nw), Rect::from_top_left(0.0, 0.0, 5.0, 5.0));
        assert_eq!(bounds(Quadrant::Ne), Rect::from_top_left(5.0, 0.0, 5.0, 5.0));
        assert_eq!(bounds(Quadrant::Sw), Rect::from_top_left(0.0, 5.0, 5.0, 5.0));
        assert_eq!(bounds(Quadrant::Se), Rect::from_top_left(5.0, 5.0, 5.0, 5.0));

        tree.for_each_child(|_, child| {
            assert_eq!(child.level(), 1);
            assert_eq!(child.max_entities(), 2);
            assert_eq!(child.max_depth(), MAX_DEPTH);
        });
    }

    #[test]
    fn test_routes_to_each_quadrant() {
        let cases = [
            (Quadrant::Nw, entity(10.0, 10.0), entity(70.0, 70.0)),
            (Quadrant::Ne, entity(90.0, 10.0), entity(10.0, 10.0)),
            (Quadrant::Sw, entity(10.0, 90.0), entity(10.0, 10.0)),
            (Quadrant::Se, entity(90.0, 90.0), entity(10.0, 10.0)),
        ];

        for (quadrant, target, first) in cases {
            let entities = vec![first, target];
            let mut tree = create_quad(100.0, 1);
            add_all(&mut tree, &entities);

            assert!(tree.is_divided());
            assert!(tree.child(quadrant).unwrap().includes(1), "expected target in {}", quadrant.name());
            assert!(!tree.includes(1));
        }
    }

    #[test]
    fn test_two_entities_end_to_end() {
        let entities = vec![entity(10.0, 10.0), entity(90.0, 10.0)];
        let mut tree = create_quad(100.0, 1);
        add_all(&mut tree, &entities);

        assert!(tree.is_divided());
        assert!(tree.child(Quadrant::Nw).unwrap().includes(0));
        assert!(tree.child(Quadrant::Ne).unwrap().includes(1));
        assert_eq!(tree.entities_count(), 2);
    }

    #[test]
    fn test_center_straddling_entity_stays_at_parent() {
        let entities = vec![
            Rect::from_coords(4.0, 4.0, 6.0, 6.0),
            Rect::from_center(2.0, 2.0, 1.0, 1.0),
            // Right edge exactly on the vertical midline.
            Rect::from_coords(1.0, 1.0, 5.0, 4.0),
        ];
        let mut tree = create_quad(10.0, 1);
        add_all(&mut tree, &entities);

        assert!(tree.is_divided());
        for key in [0, 2] {
            assert!(tree.includes(key));
            tree.for_each_child(|_, child| assert!(!child.includes(key)));
        }
        assert!(tree.child(Quadrant::Nw).unwrap().includes(1));
    }

    #[test]
    fn test_depth_ceiling() {
        let entities = vec![Rect::from_center(1.0, 1.0, 0.5, 0.5); 8];

        let mut flat = Quadtree::new(Rect::from_coords(0.0, 0.0, 100.0, 100.0), 1, 0).unwrap();
        add_all(&mut flat, &entities);
        assert!(!flat.is_divided());
        assert_eq!(flat.entities_count(), 8);

        let mut tree = Quadtree::new(Rect::from_coords(0.0, 0.0, 100.0, 100.0), 1, 2).unwrap();
        add_all(&mut tree, &entities);
        let stats = tree.stats();
        assert_eq!(stats.depth, 2);
        assert_eq!(stats.entities, 8);

        let deepest = tree.child(Quadrant::Nw).unwrap().child(Quadrant::Nw).unwrap();
        assert!(!deepest.is_divided());
        assert_eq!(deepest.entities_count(), 8);
    }

    #[test]
    fn test_split_misuse() {
        let entities: Vec<Rect> = Vec::new();
        let mut tree = create_quad(100.0, 4);
        tree.split(&entities).unwrap();
        assert_eq!(tree.split(&entities), Err(QuadtreeError::AlreadyDivided { level: 0 }));

        let mut flat = Quadtree::<usize>::new(Rect::from_coords(0.0, 0.0, 100.0, 100.0), 4, 0).unwrap();
        assert_eq!(flat.split(&entities), Err(QuadtreeError::DepthLimit { level: 0 }));
    }

    #[test]
    fn test_split_keeps_entities() {
        let entities = grid(4);
        let mut tree = create_quad(100.0, 3);
        add_all(&mut tree, &entities[..3]);
        assert!(!tree.is_divided());
        let before = all_keys(&tree);

        tree.add(3, &entities).unwrap();
        assert!(tree.is_divided());
        let mut expected = before;
        expected.push(3);
        assert_eq!(all_keys(&tree), expected);
    }

    #[test]
    fn test_count_matches_adds() {
        let entities = grid(100);
        let mut tree = create_quad(100.0, 3);
        add_all(&mut tree, &entities);

        assert_eq!(tree.entities_count(), 100);
        for key in 0..entities.len() {
            assert_eq!(holders(&tree, key), 1, "entity {key} held more or less than once");
        }
    }

    #[test]
    fn test_add_is_idempotent() {
        let entities = vec![entity(20.0, 20.0)];
        let mut tree = create_quad(100.0, 2);
        tree.add(0, &entities).unwrap();
        tree.add(0, &entities).unwrap();
        assert_eq!(tree.entities_count(), 1);
    }

    #[test]
    fn test_add_unknown_entity() {
        let entities: Vec<Rect> = Vec::new();
        let mut tree = create_quad(100.0, 2);
        assert_eq!(tree.add(0, &entities), Err(QuadtreeError::UnknownEntity));
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_add_outside_bounds_fails_in_debug() {
        let entities = vec![entity(200.0, 200.0), entity(5.0, 50.0)];
        let mut tree = create_quad(100.0, 2);

        let err = tree.add(0, &entities).unwrap_err();
        assert!(matches!(err, QuadtreeError::Containment { level: 0, .. }));
        // Touching the left edge is not contained either.
        assert!(tree.add(1, &entities).is_err());
        assert!(tree.is_empty());
    }

    #[test]
    fn test_recalculate_moves_entity_between_quadrants() {
        let mut entities = vec![entity(25.0, 25.0), entity(75.0, 25.0), entity(25.0, 75.0), entity(75.0, 75.0)];
        let mut tree = create_quad(100.0, 2);
        add_all(&mut tree, &entities);
        assert!(tree.is_divided());
        assert!(tree.child(Quadrant::Nw).unwrap().includes(0));

        entities[0] = entity(75.0, 20.0);
        let excluded = tree.recalculate(&entities);

        assert!(excluded.is_empty());
        assert!(tree.child(Quadrant::Ne).unwrap().includes(0));
        assert!(!tree.child(Quadrant::Nw).unwrap().includes(0));
        assert_eq!(tree.entities_count(), 4);
    }

    #[test]
    fn test_recalculate_pulls_straddler_up() {
        let mut entities = vec![entity(25.0, 25.0), entity(75.0, 25.0), entity(25.0, 75.0)];
        let mut tree = create_quad(100.0, 2);
        add_all(&mut tree, &entities);

        entities[2] = entity(50.0, 75.0);
        assert!(tree.recalculate(&entities).is_empty());
        assert!(tree.includes(2));
        assert_eq!(holders(&tree, 2), 1);
    }

    #[test]
    fn test_recalculate_collapses_after_remove() {
        let entities = vec![entity(25.0, 25.0), entity(75.0, 25.0), entity(25.0, 75.0), entity(75.0, 75.0)];
        let mut tree = create_quad(100.0, 2);
        add_all(&mut tree, &entities);

        assert!(tree.remove(2));
        assert!(tree.remove(3));
        assert!(!tree.remove(3));
        assert!(tree.is_divided());

        assert!(tree.recalculate(&entities).is_empty());
        assert!(!tree.is_divided());
        let mut held: Vec<usize> = tree.entities().collect();
        held.sort_unstable();
        assert_eq!(held, vec![0, 1]);
    }

    #[test]
    fn test_recalculate_excludes_entities_leaving_root() {
        let mut entities = vec![entity(25.0, 25.0), entity(75.0, 25.0), entity(25.0, 75.0), entity(75.0, 75.0)];
        let mut tree = create_quad(100.0, 2);
        add_all(&mut tree, &entities);

        entities[3] = entity(500.0, 500.0);
        assert_eq!(tree.recalculate(&entities), vec![3]);
        assert_eq!(tree.entities_count(), 3);
        assert!(tree.is_divided());

        // Straddling the right border is outside as well.
        entities[1] = entity(98.0, 25.0);
        assert_eq!(tree.recalculate(&entities), vec![1]);
        assert!(!tree.is_divided());
        assert_eq!(tree.entities_count(), 2);
    }

    #[test]
    fn test_recalculate_excludes_unresolved_handles() {
        let mut entities = HashMap::new();
        for (id, x) in [(10u32, 20.0), (11, 40.0), (12, 60.0), (13, 80.0)] {
            entities.insert(id, entity(x, 80.0));
        }
        let mut tree = Quadtree::<u32>::new(Rect::from_coords(0.0, 0.0, 100.0, 100.0), 1, MAX_DEPTH).unwrap();
        for id in 10..14 {
            tree.add(id, &entities).unwrap();
        }

        entities.remove(&12);
        assert_eq!(tree.recalculate(&entities), vec![12]);
        assert_eq!(tree.entities_count(), 3);
        assert!(!tree.includes_in_subtree(12));
    }

    #[test]
    fn test_recalculate_never_loses_or_duplicates() {
        let mut entities = grid(100);
        let mut tree = create_quad(100.0, 3);
        add_all(&mut tree, &entities);

        for rect in entities.iter_mut() {
            rect.center.x += 30.0;
        }
        let mut excluded = tree.recalculate(&entities);
        excluded.sort_unstable();

        let expected: Vec<usize> = (0..100).filter(|i| i % 10 >= 7).collect();
        assert_eq!(excluded, expected);
        assert_eq!(tree.entities_count(), 70);
        for key in (0..100).filter(|i| i % 10 < 7) {
            assert_eq!(holders(&tree, key), 1);
        }
    }

    #[test]
    fn test_recalculate_is_stable_without_movement() {
        let entities = grid(100);
        let mut tree = create_quad(100.0, 3);
        add_all(&mut tree, &entities);
        let before = tree.stats();

        assert!(tree.recalculate(&entities).is_empty());
        assert_eq!(tree.stats(), before);
    }

    #[test]
    fn test_retrieve_candidates() {
        let entities = vec![entity(10.0, 10.0), entity(90.0, 10.0), entity(50.0, 50.0)];
        let mut tree = create_quad(100.0, 1);
        add_all(&mut tree, &entities);
        assert!(tree.includes(2));

        let mut near_a = tree.retrieve(&Rect::from_center(20.0, 20.0, 5.0, 5.0));
        near_a.sort_unstable();
        assert_eq!(near_a, vec![0, 2]);

        let mut across = tree.retrieve(&Rect::from_center(50.0, 20.0, 10.0, 5.0));
        across.sort_unstable();
        assert_eq!(across, vec![0, 1, 2]);

        let hits = tree.retrieve_colliding(&Rect::from_center(12.0, 12.0, 2.0, 2.0), &entities);
        assert_eq!(hits, vec![0]);
    }

    #[test]
    fn test_clear() {
        let entities = grid(20);
        let mut tree = create_quad(100.0, 2);
        add_all(&mut tree, &entities);
        assert!(tree.is_divided());

        tree.clear();
        assert!(tree.is_empty());
        assert!(!tree.is_divided());
        assert_eq!(tree.stats(), TreeStats { nodes: 1, leaves: 1, depth: 0, entities: 0 });
    }
}
