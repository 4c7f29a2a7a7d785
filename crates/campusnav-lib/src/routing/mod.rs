//! Route planning between named campus locations.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported shortest-path strategies
//! - [`RouteRequest`] - Free-text source/destination plus options
//! - [`RoutePlan`] - Path, distance, walking time and directions
//! - [`find_path`] - Entry point fetching data from a [`CampusData`] provider
//! - [`plan_route`] - Same computation over in-memory collections
//!
//! # Example
//!
//! ```ignore
//! use campusnav_lib::{find_path, CampusStore, CachedCampus, RouteRequest};
//!
//! let campus = CachedCampus::new(CampusStore::open("data"));
//! let plan = find_path(&campus, &RouteRequest::new("library", "science"))?;
//! println!("{} hops, {} min", plan.hop_count(), plan.duration_min);
//! ```

mod planner;

pub use planner::{select_planner, DijkstraPlanner, RoutePlanner, ScanPlanner};

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::directions::generate_directions;
use crate::error::{Error, Result};
use crate::graph::build_graph;
use crate::model::{Location, LocationId, Pathway};
use crate::provider::CampusData;
use crate::resolver::{resolve_location, LocationMatcher, SubstringMatcher};

/// Average walking speed (5 km/h) in meters per second.
pub const WALKING_SPEED_MPS: f64 = 1.39;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Dijkstra's algorithm with a binary heap frontier.
    #[default]
    Dijkstra,
    /// Dijkstra's algorithm with a linear minimum scan.
    Scan,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::Scan => "scan",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    /// Free-text query for the starting location.
    pub source: String,
    /// Free-text query for the destination.
    pub destination: String,
    /// Only use pathways flagged as accessible.
    pub accessible_only: bool,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Request using every pathway and the default algorithm.
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            accessible_only: false,
            algorithm: RouteAlgorithm::default(),
        }
    }

    /// Restrict the request to accessible pathways.
    pub fn accessible(mut self) -> Self {
        self.accessible_only = true;
        self
    }

    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub accessible_only: bool,
    pub start: LocationId,
    pub goal: LocationId,
    /// Location identifiers from start to goal inclusive.
    pub steps: Vec<LocationId>,
    /// Total walking distance in meters.
    pub distance_m: f64,
    /// Estimated walking time in whole minutes, rounded up.
    pub duration_min: u64,
    pub directions: Vec<String>,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute a route with data fetched from `data`, using the default matcher.
pub fn find_path(data: &dyn CampusData, request: &RouteRequest) -> Result<RoutePlan> {
    find_path_with(data, request, &SubstringMatcher)
}

/// Compute a route with data fetched from `data`, resolving queries with `matcher`.
pub fn find_path_with(
    data: &dyn CampusData,
    request: &RouteRequest,
    matcher: &dyn LocationMatcher,
) -> Result<RoutePlan> {
    let locations = data.locations()?;
    let pathways = data.pathways(request.accessible_only)?;
    plan_route_with(&locations, &pathways, request, matcher)
}

/// Compute a route over in-memory collections using the default matcher.
///
/// `pathways` must already be filtered the way the request expects.
pub fn plan_route(
    locations: &[Location],
    pathways: &[Pathway],
    request: &RouteRequest,
) -> Result<RoutePlan> {
    plan_route_with(locations, pathways, request, &SubstringMatcher)
}

/// Compute a route over in-memory collections.
///
/// 1. Resolves both queries to locations
/// 2. Builds the graph over `pathways`
/// 3. Runs the selected planner
/// 4. Accumulates distance, walking time and directions
pub fn plan_route_with(
    locations: &[Location],
    pathways: &[Pathway],
    request: &RouteRequest,
    matcher: &dyn LocationMatcher,
) -> Result<RoutePlan> {
    let start = resolve_location(matcher, &request.source, locations)?;
    let goal = resolve_location(matcher, &request.destination, locations)?;

    if start.id == goal.id {
        return Err(Error::SameLocation {
            name: start.name.clone(),
        });
    }

    let graph = build_graph(locations, pathways);
    debug!(
        start = %start.id,
        goal = %goal.id,
        start_degree = graph.neighbours(&start.id).len(),
        goal_degree = graph.neighbours(&goal.id).len(),
        accessible_only = request.accessible_only,
        "planning route"
    );

    let planner = select_planner(request.algorithm);
    let steps = planner
        .find_path(&graph, &start.id, &goal.id)
        .filter(|steps| steps.len() >= 2)
        .ok_or_else(|| {
            debug!(
                nodes = graph.node_count(),
                pathways = pathways.len(),
                "no connecting path"
            );
            Error::RouteNotFound {
                start: start.name.clone(),
                goal: goal.name.clone(),
            }
        })?;

    let distance_m = route_distance(&steps, locations, pathways);
    let duration_min = walking_minutes(distance_m);
    let directions = generate_directions(&steps, locations);

    info!(
        start = %start.name,
        goal = %goal.name,
        hops = steps.len() - 1,
        distance_m,
        duration_min,
        "route planned"
    );

    Ok(RoutePlan {
        algorithm: planner.algorithm(),
        accessible_only: request.accessible_only,
        start: start.id.clone(),
        goal: goal.id.clone(),
        steps,
        distance_m,
        duration_min,
        directions,
    })
}

/// Total meters along `steps`.
///
/// Each leg uses the declared distance of the first pathway joining the pair
/// in either direction. Legs without such a pathway, or whose pathway has no
/// usable distance, fall back to the straight-line estimate.
pub fn route_distance(steps: &[LocationId], locations: &[Location], pathways: &[Pathway]) -> f64 {
    let by_id: HashMap<&str, &Location> = locations
        .iter()
        .map(|location| (location.id.as_str(), location))
        .collect();

    steps
        .windows(2)
        .map(|pair| {
            let (from, to) = (pair[0].as_str(), pair[1].as_str());
            let declared = pathways
                .iter()
                .find(|pathway| pathway.connects(from, to))
                .and_then(Pathway::declared_distance);
            match declared {
                Some(distance) => distance,
                None => match (by_id.get(from), by_id.get(to)) {
                    (Some(a), Some(b)) => a.position().estimated_meters(&b.position()),
                    _ => 0.0,
                },
            }
        })
        .sum()
}

/// Walking time in whole minutes for `meters`, rounded up.
pub fn walking_minutes(meters: f64) -> u64 {
    (meters / WALKING_SPEED_MPS / 60.0).ceil().max(0.0) as u64
}
