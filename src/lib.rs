//! citymap — an in-memory road map of named intersections.
//!
//! Intersections are nodes, roads are weighted edges. The map runs in either
//! directed or undirected mode and answers reachability queries with a
//! depth-first search. The [`cli`] module drives it from a numbered text menu.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{CityMap, MapBuilder};
pub use types::{
    Endpoint, Insertion, MapError, MapResult, Removal, Road, DEFAULT_WEIGHT,
};
