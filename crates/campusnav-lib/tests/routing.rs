mod common;

use campusnav_lib::{
    find_path, find_path_with, plan_route, route_distance, Campus, CampusData, Error, Location,
    LocationMatcher, RouteAlgorithm, RouteRequest,
};

use common::{fixture_campus, location, pathway, triangle_campus};

fn steps(plan: &campusnav_lib::RoutePlan) -> Vec<&str> {
    plan.steps.iter().map(String::as_str).collect()
}

#[test]
fn triangle_scenario_produces_full_result() {
    let campus = triangle_campus();
    let plan = find_path(&campus, &RouteRequest::new("A", "C")).expect("route exists");

    assert_eq!(steps(&plan), vec!["A", "B", "C"]);
    assert_eq!(plan.distance_m, 800.0);
    assert_eq!(plan.duration_min, 10);
    assert_eq!(
        plan.directions,
        vec!["Start at A", "Head south toward B", "Arrive at C"]
    );
    assert_eq!(plan.hop_count(), 2);
    assert_eq!(plan.algorithm, RouteAlgorithm::Dijkstra);
}

#[test]
fn fixture_route_through_the_quad() {
    let campus = fixture_campus();
    let plan = find_path(&campus, &RouteRequest::new("library", "entrance")).expect("route");

    assert_eq!(
        steps(&plan),
        vec!["main-library", "clock-tower", "student-center", "main-entrance"]
    );
    assert_eq!(plan.distance_m, 730.0);
    assert_eq!(plan.duration_min, 9);
    assert_eq!(
        plan.directions,
        vec![
            "Start at Main Library",
            "Head south toward Clock Tower",
            "Head south toward Student Center",
            "Arrive at Main Entrance",
        ]
    );
}

#[test]
fn accessible_only_avoids_stairs() {
    let campus = fixture_campus();

    let direct = find_path(&campus, &RouteRequest::new("library", "north parking")).expect("route");
    assert_eq!(steps(&direct), vec!["main-library", "north-parking"]);
    assert_eq!(direct.distance_m, 320.0);
    assert_eq!(direct.duration_min, 4);

    let accessible = find_path(
        &campus,
        &RouteRequest::new("library", "north parking").accessible(),
    )
    .expect("accessible route");
    assert!(accessible.accessible_only);
    assert_eq!(
        steps(&accessible),
        vec![
            "main-library",
            "clock-tower",
            "science-building",
            "north-parking"
        ]
    );
    assert_eq!(accessible.distance_m, 765.0);
    assert_eq!(accessible.duration_min, 10);
    assert_eq!(
        accessible.directions,
        vec![
            "Start at Main Library",
            "Head east toward Clock Tower",
            "Head north toward Science Building",
            "Arrive at North Parking",
        ]
    );
}

#[test]
fn accessible_only_blocks_route_with_single_inaccessible_link() {
    let campus = fixture_campus();

    let unfiltered = find_path(&campus, &RouteRequest::new("library", "boathouse"));
    assert!(unfiltered.is_ok());

    let err = find_path(
        &campus,
        &RouteRequest::new("library", "boathouse").accessible(),
    )
    .expect_err("boathouse only reachable over gravel");
    assert!(matches!(err, Error::RouteNotFound { .. }));
    assert!(err.is_expected());
    assert_eq!(
        err.to_string(),
        "no route found between Main Library and Boathouse"
    );
}

#[test]
fn isolated_location_is_not_reachable() {
    let campus = fixture_campus();
    let err = find_path(&campus, &RouteRequest::new("library", "observatory"))
        .expect_err("observatory has no pathways");
    assert!(matches!(err, Error::RouteNotFound { .. }));
}

#[test]
fn unresolved_queries_report_location_not_found() {
    let campus = fixture_campus();

    let err = find_path(&campus, &RouteRequest::new("helipad", "library")).expect_err("source");
    assert!(matches!(err, Error::LocationNotFound { ref query, .. } if query == "helipad"));

    let err = find_path(&campus, &RouteRequest::new("library", "helipad")).expect_err("dest");
    assert!(matches!(err, Error::LocationNotFound { ref query, .. } if query == "helipad"));
    assert!(err.is_expected());
}

#[test]
fn same_start_and_destination_is_rejected() {
    let campus = fixture_campus();
    let err = find_path(&campus, &RouteRequest::new("library", "Main Library"))
        .expect_err("no self routes");
    assert!(matches!(err, Error::SameLocation { ref name } if name == "Main Library"));
    assert!(err.is_expected());
}

#[test]
fn scan_algorithm_matches_default() {
    let campus = fixture_campus();
    for (from, to) in [
        ("library", "entrance"),
        ("boathouse", "science"),
        ("parking", "tower"),
    ] {
        let heap = find_path(&campus, &RouteRequest::new(from, to)).expect("route");
        let scan = find_path(
            &campus,
            &RouteRequest::new(from, to).with_algorithm(RouteAlgorithm::Scan),
        )
        .expect("route");
        assert_eq!(scan.algorithm, RouteAlgorithm::Scan);
        assert_eq!(heap.steps, scan.steps);
        assert_eq!(heap.distance_m, scan.distance_m);
    }
}

#[test]
fn accumulated_distance_is_never_below_straight_line() {
    let campus = fixture_campus();
    let by_id = |id: &str| campus.location(id).expect("fixture location").position();

    for from in &campus.locations {
        for to in &campus.locations {
            if from.id == to.id {
                continue;
            }
            let request = RouteRequest::new(from.id.as_str(), to.id.as_str());
            let Ok(plan) = plan_route(&campus.locations, &campus.pathways, &request) else {
                continue;
            };
            let straight = by_id(&plan.start).estimated_meters(&by_id(&plan.goal));
            assert!(
                plan.distance_m + 1e-9 >= straight,
                "{} -> {}: {} < {}",
                plan.start,
                plan.goal,
                plan.distance_m,
                straight
            );
        }
    }
}

#[test]
fn route_distance_falls_back_to_geometry_for_unknown_legs() {
    let locations = vec![
        location("a", "A", 0.0, 0.0),
        location("b", "B", 30.0, 40.0),
        location("c", "C", 30.0, 50.0),
    ];
    let pathways = vec![pathway("bc", "c", "b", 120.0)];
    let steps = vec!["a".to_string(), "b".to_string(), "c".to_string()];

    // a-b has no pathway: 50 percentage units * 10; b-c is found in reverse.
    assert_eq!(route_distance(&steps, &locations, &pathways), 620.0);
}

#[test]
fn route_distance_uses_first_matching_pathway() {
    let locations = vec![location("a", "A", 0.0, 0.0), location("b", "B", 1.0, 0.0)];
    let pathways = vec![pathway("slow", "b", "a", 90.0), pathway("fast", "a", "b", 40.0)];
    let steps = vec!["a".to_string(), "b".to_string()];

    assert_eq!(route_distance(&steps, &locations, &pathways), 90.0);
}

struct ExactIdMatcher;

impl LocationMatcher for ExactIdMatcher {
    fn find<'a>(&self, query: &str, locations: &'a [Location]) -> Option<&'a Location> {
        locations.iter().find(|location| location.id == query)
    }
}

#[test]
fn custom_matcher_replaces_substring_rules() {
    let campus = fixture_campus();

    let err = find_path_with(&campus, &RouteRequest::new("library", "tower"), &ExactIdMatcher)
        .expect_err("partial names are not identifiers");
    assert!(matches!(err, Error::LocationNotFound { .. }));

    let plan = find_path_with(
        &campus,
        &RouteRequest::new("main-library", "clock-tower"),
        &ExactIdMatcher,
    )
    .expect("identifiers resolve");
    assert_eq!(steps(&plan), vec!["main-library", "clock-tower"]);
}

#[test]
fn in_memory_provider_filters_accessible_pathways() {
    let campus: Campus = fixture_campus();
    let all = campus.pathways(false).expect("pathways");
    let accessible = campus.pathways(true).expect("pathways");

    assert_eq!(all.len(), 8);
    assert_eq!(accessible.len(), 6);
    assert!(accessible.iter().all(|pathway| pathway.accessibility));
}
