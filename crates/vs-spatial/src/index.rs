//! R-tree spatial index keyed by entity id.
//!
//! # Data layout
//!
//! Each entry is a 2-D `[x, y]` point in kilometres plus the id of the entity
//! standing there (a `HouseholdId` or a `GroupId`).  Several entities may
//! share one point; entries are only equal when both the point and the key
//! match, so removing one household never disturbs a neighbour at the same
//! spot.
//!
//! # Tie-breaking
//!
//! `k_nearest` returns entries in ascending distance.  Entries at equal
//! distance come back in the R-tree's traversal order, which depends on the
//! insertion history.  It is deterministic for a given sequence of inserts and
//! removes but is otherwise unspecified.

use std::fmt;

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use vs_core::Location;

use crate::{SpatialError, SpatialResult};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a `[x, y]` point with the associated key.
#[derive(Clone, Debug, PartialEq)]
struct Entry<K> {
    point: [f64; 2],
    key:   K,
}

impl<K: Copy + PartialEq> RTreeObject for Entry<K> {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl<K: Copy + PartialEq> PointDistance for Entry<K> {
    /// Squared planar distance in km².
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── SpatialIndex ──────────────────────────────────────────────────────────────

/// Dynamic 2-D point index supporting insert, remove, and k-nearest queries.
pub struct SpatialIndex<K: Copy + PartialEq> {
    tree: RTree<Entry<K>>,
}

impl<K: Copy + PartialEq + fmt::Display> SpatialIndex<K> {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Bulk-load an index from `(key, location)` pairs.
    ///
    /// O(N log N), faster than N inserts.  Used for the read-only indices of
    /// a finished population graph.
    pub fn bulk_load<I>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, Location)>,
    {
        let entries: Vec<Entry<K>> = items
            .into_iter()
            .map(|(key, loc)| Entry { point: loc.as_point(), key })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Add `key` at `location`.
    pub fn insert(&mut self, key: K, location: Location) {
        self.tree.insert(Entry { point: location.as_point(), key });
    }

    /// Remove the entry for `key` at `location`.
    ///
    /// Fails if no such entry exists; a caller asking to remove something it
    /// never inserted has lost track of the index contents.
    pub fn remove(&mut self, key: K, location: Location) -> SpatialResult<()> {
        let entry = Entry { point: location.as_point(), key };
        match self.tree.remove(&entry) {
            Some(_) => Ok(()),
            None => Err(SpatialError::MissingEntry { key: key.to_string(), location }),
        }
    }

    /// `true` if `key` is indexed at `location`.
    pub fn contains(&self, key: K, location: Location) -> bool {
        self.tree.contains(&Entry { point: location.as_point(), key })
    }

    /// The key nearest to `location`, or `None` if the index is empty.
    pub fn nearest(&self, location: Location) -> Option<K> {
        self.tree
            .nearest_neighbor(&location.as_point())
            .map(|e| e.key)
    }

    /// Up to `k` keys nearest to `location`, sorted by ascending distance.
    pub fn k_nearest(&self, location: Location, k: usize) -> Vec<K> {
        if k == 0 {
            return Vec::new();
        }
        self.tree
            .nearest_neighbor_iter(&location.as_point())
            .take(k)
            .map(|e| e.key)
            .collect()
    }
}

impl<K: Copy + PartialEq + fmt::Display> Default for SpatialIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}
