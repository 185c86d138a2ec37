//! Core graph structure — intersections + roads in adjacency lists.

use std::collections::{BTreeSet, HashMap};

use crate::types::{Endpoint, Insertion, MapError, MapResult, Removal, Road, DEFAULT_WEIGHT};

use super::traversal;

/// The in-memory road map: named intersections and the roads leaving each.
///
/// Whether roads are one-way is fixed at construction. In undirected mode
/// every road is stored as a pair of opposite directed entries.
#[derive(Debug, Clone)]
pub struct CityMap {
    /// Outgoing roads, keyed by source intersection.
    adjacency: HashMap<String, Vec<Road>>,
    /// Intersection names in insertion order, for listing.
    order: Vec<String>,
    /// One-way roads when true.
    directed: bool,
}

impl CityMap {
    /// Create an empty map.
    pub fn new(directed: bool) -> Self {
        Self {
            adjacency: HashMap::new(),
            order: Vec::new(),
            directed,
        }
    }

    /// Create an empty map with one-way roads.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create an empty map with two-way roads.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Whether roads are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of intersections.
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Number of stored directed road entries. A two-way road counts twice.
    pub fn road_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Whether the map has no intersections.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether an intersection with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Roads leaving `name`, in insertion order. Empty if `name` is absent.
    pub fn roads_from(&self, name: &str) -> &[Road] {
        self.adjacency.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every intersection with its outgoing roads, in insertion order.
    pub fn list_adjacency(&self) -> Vec<(&str, &[Road])> {
        self.order
            .iter()
            .map(|name| (name.as_str(), self.roads_from(name)))
            .collect()
    }

    /// Add an intersection. Adding an existing name is a no-op.
    pub fn add_intersection(&mut self, name: &str) -> Insertion {
        if self.contains(name) {
            log::debug!("intersection {name:?} already exists");
            return Insertion::AlreadyExists;
        }
        self.adjacency.insert(name.to_string(), Vec::new());
        self.order.push(name.to_string());
        log::debug!("added intersection {name:?}");
        Insertion::Added
    }

    /// Add a road between two existing intersections.
    ///
    /// In undirected mode the reverse road is appended too, unconditionally:
    /// a self-loop ends up stored twice.
    pub fn add_road(&mut self, src: &str, dest: &str, weight: i64) -> MapResult<()> {
        if let Some(missing) = Endpoint::missing(self.contains(src), self.contains(dest)) {
            log::warn!("rejected road {src:?} -> {dest:?}: {missing} missing");
            return Err(MapError::MissingEndpoint {
                src: src.to_string(),
                dest: dest.to_string(),
                missing,
            });
        }

        self.push_road(src, Road::new(dest, weight));
        if !self.directed {
            self.push_road(dest, Road::new(src, weight));
        }
        log::debug!("added road {src:?} -> {dest:?} ({weight})");
        Ok(())
    }

    /// Add a road with [`DEFAULT_WEIGHT`].
    pub fn add_road_default(&mut self, src: &str, dest: &str) -> MapResult<()> {
        self.add_road(src, dest, DEFAULT_WEIGHT)
    }

    /// Remove an intersection and every road that leads to it.
    pub fn remove_intersection(&mut self, name: &str) -> Removal {
        if self.adjacency.remove(name).is_none() {
            log::debug!("intersection {name:?} does not exist");
            return Removal::NotFound;
        }
        self.order.retain(|n| n != name);

        // Roads are not indexed by destination, so every list is scanned.
        let mut purged = 0;
        for roads in self.adjacency.values_mut() {
            let before = roads.len();
            roads.retain(|r| !r.leads_to(name));
            purged += before - roads.len();
        }
        log::debug!("removed intersection {name:?} and {purged} incoming roads");
        Removal::Removed
    }

    /// Remove every road from `src` to `dest`, and in undirected mode every
    /// road from `dest` to `src`. Returns how many entries were removed.
    ///
    /// Never fails: unknown intersections or missing roads remove nothing.
    pub fn remove_road(&mut self, src: &str, dest: &str) -> usize {
        let mut removed = Self::strip(self.adjacency.get_mut(src), dest);
        if !self.directed {
            removed += Self::strip(self.adjacency.get_mut(dest), src);
        }
        log::debug!("removed {removed} road entries between {src:?} and {dest:?}");
        removed
    }

    /// Whether any path leads from `start` to `end`.
    ///
    /// An existing intersection always reaches itself; an unknown start
    /// reaches nothing.
    pub fn path_exists(&self, start: &str, end: &str) -> bool {
        traversal::path_exists(self, start, end)
    }

    /// All intersections reachable from `start`, never including `start`.
    pub fn reachable_set(&self, start: &str) -> BTreeSet<String> {
        traversal::reachable_from(self, start)
            .into_iter()
            .filter(|name| *name != start)
            .map(str::to_string)
            .collect()
    }

    fn push_road(&mut self, src: &str, road: Road) {
        if let Some(roads) = self.adjacency.get_mut(src) {
            roads.push(road);
        }
    }

    fn strip(roads: Option<&mut Vec<Road>>, dest: &str) -> usize {
        match roads {
            Some(roads) => {
                let before = roads.len();
                roads.retain(|r| !r.leads_to(dest));
                before - roads.len()
            }
            None => 0,
        }
    }
}

impl Default for CityMap {
    /// Two-way roads, like the interactive tool's default.
    fn default() -> Self {
        Self::undirected()
    }
}
