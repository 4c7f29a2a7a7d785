mod common;

use campusnav_lib::{build_graph, Pathway};

use common::{fixture_campus, location, pathway, triangle_campus};

#[test]
fn every_location_is_a_node() {
    let campus = fixture_campus();
    let graph = build_graph(&campus.locations, &campus.pathways);

    assert_eq!(graph.node_count(), campus.locations.len());
    assert!(graph.contains("observatory"));
    assert!(graph.neighbours("observatory").is_empty());
}

#[test]
fn edges_are_symmetric() {
    let campus = triangle_campus();
    let graph = build_graph(&campus.locations, &campus.pathways);

    let forward = &graph.neighbours("A")[0];
    assert_eq!(forward.target, "B");
    assert_eq!(forward.distance, 500.0);
    assert_eq!(forward.pathway, "ab");

    let backward = graph
        .neighbours("B")
        .iter()
        .find(|edge| edge.target == "A")
        .expect("reverse edge");
    assert_eq!(backward.distance, 500.0);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn dangling_pathways_are_dropped() {
    let campus = fixture_campus();
    let graph = build_graph(&campus.locations, &campus.pathways);

    assert!(!graph.contains("old-gym"));
    assert!(graph
        .neighbours("main-library")
        .iter()
        .all(|edge| edge.target != "old-gym"));
    // Seven of the eight fixture pathways have both endpoints.
    assert_eq!(graph.edge_count(), 7);
}

#[test]
fn declared_distance_is_trusted_over_geometry() {
    let locations = vec![location("a", "A", 0.0, 0.0), location("b", "B", 1.0, 0.0)];
    let pathways = vec![pathway("ab", "a", "b", 900.0)];
    let graph = build_graph(&locations, &pathways);

    assert_eq!(graph.neighbours("a")[0].distance, 900.0);
}

#[test]
fn missing_distance_falls_back_to_geometry() {
    let locations = vec![location("a", "A", 0.0, 0.0), location("b", "B", 3.0, 4.0)];
    let pathways = vec![Pathway {
        distance: 0.0,
        ..pathway("ab", "a", "b", 0.0)
    }];
    let graph = build_graph(&locations, &pathways);

    assert_eq!(graph.neighbours("b")[0].distance, 50.0);
}

#[test]
fn empty_inputs_build_an_empty_graph() {
    let graph = build_graph(&[], &[pathway("x", "a", "b", 1.0)]);
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}
