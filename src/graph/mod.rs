//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod city_map;
pub mod traversal;

pub use builder::MapBuilder;
pub use city_map::CityMap;
