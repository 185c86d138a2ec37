//! Graph traversal algorithms (DFS with an explicit stack).

use std::collections::HashSet;

use super::CityMap;

/// Depth-first search from `start`, stopping as soon as `end` is reached.
///
/// Roads are explored in insertion order. The visited set keeps cycles and
/// self-loops from being walked twice.
pub fn path_exists(map: &CityMap, start: &str, end: &str) -> bool {
    if !map.contains(start) {
        return false;
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&str> = vec![start];

    while let Some(current) = stack.pop() {
        if current == end {
            return true;
        }
        if !visited.insert(current) {
            continue;
        }
        log::trace!("path search visiting {current:?}");

        // Reverse push so the first-inserted road is popped first.
        for road in map.roads_from(current).iter().rev() {
            if !visited.contains(road.destination.as_str()) {
                stack.push(&road.destination);
            }
        }
    }

    false
}

/// Every intersection visited by a depth-first walk from `start`, including
/// `start` itself. Empty when `start` is unknown.
pub fn reachable_from<'a>(map: &'a CityMap, start: &'a str) -> HashSet<&'a str> {
    let mut visited: HashSet<&str> = HashSet::new();
    if !map.contains(start) {
        return visited;
    }

    let mut stack: Vec<&str> = vec![start];
    while let Some(current) = stack.pop() {
        if !map.contains(current) || !visited.insert(current) {
            continue;
        }
        log::trace!("reachability walk visiting {current:?}");

        for road in map.roads_from(current).iter().rev() {
            if !visited.contains(road.destination.as_str()) {
                stack.push(&road.destination);
            }
        }
    }

    visited
}
