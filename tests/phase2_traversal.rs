//! Phase 2 tests: path existence and reachable sets.

use std::collections::BTreeSet;

use rand::Rng;

use citymap::graph::{CityMap, MapBuilder};

// ==================== Helper ====================

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Directed cycle A -> B -> C -> A.
fn triangle() -> CityMap {
    let mut b = MapBuilder::directed();
    b.intersections(["A", "B", "C"])
        .link("A", "B")
        .link("B", "C")
        .link("C", "A");
    b.build().unwrap()
}

/// Random map with `n` intersections named `0..n`.
fn random_map(n: usize, roads: usize, directed: bool) -> CityMap {
    let mut rng = rand::thread_rng();
    let mut map = CityMap::new(directed);
    for i in 0..n {
        map.add_intersection(&i.to_string());
    }
    for _ in 0..roads {
        let src = rng.gen_range(0..n).to_string();
        let dest = rng.gen_range(0..n).to_string();
        map.add_road(&src, &dest, rng.gen_range(1..10)).unwrap();
    }
    map
}

// ==================== Path Existence Tests ====================

#[test]
fn test_self_path_without_roads() {
    let mut map = CityMap::directed();
    map.add_intersection("X");
    assert!(map.path_exists("X", "X"));
}

#[test]
fn test_path_from_unknown_start() {
    let map = triangle();
    assert!(!map.path_exists("Z", "A"));
    assert!(!map.path_exists("Z", "Z"));
}

#[test]
fn test_path_to_unknown_end() {
    let map = triangle();
    assert!(!map.path_exists("A", "Z"));
}

#[test]
fn test_cycle_terminates() {
    let map = triangle();
    assert!(map.path_exists("A", "C"));
    assert!(map.path_exists("C", "B"));
}

#[test]
fn test_directed_no_reverse_path() {
    let mut map = CityMap::directed();
    map.add_intersection("X");
    map.add_intersection("Y");
    map.add_road("X", "Y", 1).unwrap();

    assert!(map.path_exists("X", "Y"));
    assert!(!map.path_exists("Y", "X"));
    assert!(map.reachable_set("Y").is_empty());
}

#[test]
fn test_disconnected_components() {
    let mut b = MapBuilder::undirected();
    b.intersections(["A", "B", "C", "D"])
        .link("A", "B")
        .link("C", "D");
    let map = b.build().unwrap();

    assert!(map.path_exists("B", "A"));
    assert!(!map.path_exists("A", "C"));
    assert!(!map.path_exists("D", "B"));
    assert_eq!(map.reachable_set("A"), set(&["B"]));
    assert_eq!(map.reachable_set("D"), set(&["C"]));
}

#[test]
fn test_path_through_self_loop() {
    let mut b = MapBuilder::directed();
    b.intersections(["A", "B"]).link("A", "A").link("A", "B");
    let map = b.build().unwrap();

    assert!(map.path_exists("A", "B"));
    assert_eq!(map.reachable_set("A"), set(&["B"]));
}

#[test]
fn test_path_after_removal() {
    let mut b = MapBuilder::directed();
    b.intersections(["A", "B", "C"]).link("A", "B").link("B", "C");
    let mut map = b.build().unwrap();

    assert!(map.path_exists("A", "C"));
    map.remove_intersection("B");
    assert!(!map.path_exists("A", "C"));
    assert!(map.reachable_set("A").is_empty());
}

// ==================== Reachable Set Tests ====================

#[test]
fn test_reachable_excludes_start_on_cycle() {
    let map = triangle();
    assert_eq!(map.reachable_set("A"), set(&["B", "C"]));
    assert!(!map.reachable_set("B").contains("B"));
}

#[test]
fn test_reachable_from_unknown_start() {
    let map = triangle();
    assert!(map.reachable_set("Z").is_empty());
}

#[test]
fn test_reachable_undirected_self_loop_only() {
    let mut map = CityMap::undirected();
    map.add_intersection("A");
    map.add_road("A", "A", 1).unwrap();
    assert!(map.reachable_set("A").is_empty());
    assert!(map.path_exists("A", "A"));
}

#[test]
fn test_reachable_branching() {
    let mut b = MapBuilder::directed();
    b.intersections(["R", "L1", "L2", "M", "X"])
        .link("R", "L1")
        .link("R", "L2")
        .link("L1", "M")
        .link("L2", "M")
        .link("X", "R");
    let map = b.build().unwrap();

    assert_eq!(map.reachable_set("R"), set(&["L1", "L2", "M"]));
    assert_eq!(map.reachable_set("X"), set(&["R", "L1", "L2", "M"]));
    assert!(map.reachable_set("M").is_empty());
}

// ==================== Randomized Invariant Tests ====================

#[test]
fn test_reachable_agrees_with_path_exists() {
    for directed in [true, false] {
        let map = random_map(30, 45, directed);
        for i in 0..30 {
            let start = i.to_string();
            let reachable = map.reachable_set(&start);
            assert!(!reachable.contains(&start));
            for j in 0..30 {
                let end = j.to_string();
                if i == j {
                    assert!(map.path_exists(&start, &end));
                } else {
                    assert_eq!(
                        map.path_exists(&start, &end),
                        reachable.contains(&end),
                        "{} -> {} (directed: {})",
                        start,
                        end,
                        directed
                    );
                }
            }
        }
    }
}

#[test]
fn test_undirected_reachability_is_symmetric() {
    let map = random_map(25, 20, false);
    for i in 0..25 {
        for j in 0..25 {
            let (a, b) = (i.to_string(), j.to_string());
            assert_eq!(map.path_exists(&a, &b), map.path_exists(&b, &a));
        }
    }
}

#[test]
fn test_random_removals_leave_no_orphans() {
    let mut rng = rand::thread_rng();
    for directed in [true, false] {
        let mut map = random_map(40, 120, directed);
        for _ in 0..15 {
            let victim = rng.gen_range(0..40).to_string();
            map.remove_intersection(&victim);
            assert!(!map.contains(&victim));
            for (src, roads) in map.list_adjacency() {
                for road in roads {
                    assert!(map.contains(&road.destination), "{} -> {}", src, road.destination);
                }
            }
        }
    }
}

#[test]
fn test_undirected_roads_stay_paired() {
    let mut rng = rand::thread_rng();
    let mut map = random_map(20, 60, false);
    for _ in 0..10 {
        let a = rng.gen_range(0..20).to_string();
        let b = rng.gen_range(0..20).to_string();
        map.remove_road(&a, &b);
    }

    for (src, roads) in map.list_adjacency() {
        for road in roads {
            let forward = roads.iter().filter(|r| r.destination == road.destination).count();
            let back = map
                .roads_from(&road.destination)
                .iter()
                .filter(|r| r.destination == src)
                .count();
            assert_eq!(forward, back, "{} <-> {}", src, road.destination);
        }
    }
}
