//! Rendering of store results into console text or JSON.

use std::collections::BTreeSet;

use crate::graph::CityMap;
use crate::types::{Endpoint, Insertion, MapError, MapResult, Removal};

/// Status line for an add-intersection request.
pub fn render_insertion(name: &str, outcome: Insertion) -> String {
    match outcome {
        Insertion::Added => format!("Intersection '{}' added.", name),
        Insertion::AlreadyExists => format!("Intersection '{}' already exists.", name),
    }
}

/// Status line for an add-road request.
pub fn render_add_road(src: &str, dest: &str, weight: i64, result: &MapResult<()>) -> String {
    match result {
        Ok(()) => format!(
            "Road added from {} to {} with weight {}.",
            src, dest, weight
        ),
        Err(MapError::MissingEndpoint {
            src,
            dest,
            missing,
        }) => {
            let names = match missing {
                Endpoint::Source => format!("'{}'", src),
                Endpoint::Destination => format!("'{}'", dest),
                Endpoint::Both => format!("'{}', '{}'", src, dest),
            };
            format!("Both intersections must exist. Missing {}: {}", missing, names)
        }
        Err(e) => format!("Road not added: {}", e),
    }
}

/// Status line for a remove-intersection request.
pub fn render_removal(name: &str, outcome: Removal) -> String {
    match outcome {
        Removal::Removed => format!("Intersection '{}' removed.", name),
        Removal::NotFound => format!("Intersection '{}' does not exist.", name),
    }
}

/// Status line for a remove-road request. Printed whether or not anything
/// matched.
pub fn render_remove_road(src: &str, dest: &str) -> String {
    format!("Road between {} and {} removed.", src, dest)
}

/// The whole adjacency structure.
pub fn render_map(map: &CityMap, json: bool) -> String {
    if json {
        let intersections: Vec<serde_json::Value> = map
            .list_adjacency()
            .into_iter()
            .map(|(name, roads)| serde_json::json!({"name": name, "roads": roads}))
            .collect();
        let doc = serde_json::json!({
            "directed": map.is_directed(),
            "intersections": intersections,
        });
        return serde_json::to_string_pretty(&doc).unwrap_or_default();
    }

    let mut out = String::from("City Map:");
    for (name, roads) in map.list_adjacency() {
        out.push('\n');
        out.push_str(name);
        out.push_str(" ->");
        for road in roads {
            out.push(' ');
            out.push_str(&road.to_string());
        }
    }
    out
}

/// Answer to a path-existence query.
pub fn render_path(start: &str, end: &str, exists: bool, json: bool) -> String {
    if json {
        return serde_json::json!({"start": start, "end": end, "exists": exists}).to_string();
    }
    format!(
        "Path exists from {} to {}: {}",
        start,
        end,
        if exists { "Yes" } else { "No" }
    )
}

/// Answer to a reachable-set query.
pub fn render_reachable(start: &str, reachable: &BTreeSet<String>, json: bool) -> String {
    if json {
        return serde_json::json!({"start": start, "reachable": reachable}).to_string();
    }
    let names: Vec<&str> = reachable.iter().map(String::as_str).collect();
    format!(
        "Reachable intersections from {}: [{}]",
        start,
        names.join(", ")
    )
}
