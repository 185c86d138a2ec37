//! Fluent API for building CityMap instances.

use crate::types::{MapResult, DEFAULT_WEIGHT};

use super::CityMap;

/// Fluent builder for constructing a CityMap.
///
/// Roads are validated when [`MapBuilder::build`] replays them, so they may
/// be declared before their intersections.
pub struct MapBuilder {
    directed: bool,
    intersections: Vec<String>,
    roads: Vec<(String, String, i64)>,
}

impl MapBuilder {
    /// Create a builder for a map with one-way roads.
    pub fn directed() -> Self {
        Self::with_mode(true)
    }

    /// Create a builder for a map with two-way roads.
    pub fn undirected() -> Self {
        Self::with_mode(false)
    }

    /// Create a builder with an explicit mode.
    pub fn with_mode(directed: bool) -> Self {
        Self {
            directed,
            intersections: Vec::new(),
            roads: Vec::new(),
        }
    }

    /// Add an intersection.
    pub fn intersection(&mut self, name: &str) -> &mut Self {
        self.intersections.push(name.to_string());
        self
    }

    /// Add several intersections at once.
    pub fn intersections<'a, I>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        for name in names {
            self.intersection(name);
        }
        self
    }

    /// Add a road with an explicit weight.
    pub fn road(&mut self, src: &str, dest: &str, weight: i64) -> &mut Self {
        self.roads
            .push((src.to_string(), dest.to_string(), weight));
        self
    }

    /// Add a road with the default weight.
    pub fn link(&mut self, src: &str, dest: &str) -> &mut Self {
        self.road(src, dest, DEFAULT_WEIGHT)
    }

    /// Build the final CityMap.
    pub fn build(self) -> MapResult<CityMap> {
        let mut map = CityMap::new(self.directed);
        for name in &self.intersections {
            map.add_intersection(name);
        }
        for (src, dest, weight) in &self.roads {
            map.add_road(src, dest, *weight)?;
        }
        Ok(map)
    }
}

impl Default for MapBuilder {
    fn default() -> Self {
        Self::undirected()
    }
}
