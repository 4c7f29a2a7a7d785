//! Campus navigation library entry points.
//!
//! This crate resolves free-text location queries, builds a walking graph from
//! location and pathway records, finds the shortest path, and turns it into
//! distance, walking time and step-by-step directions. Hosts (the CLI, or any
//! other front end) supply data through [`CampusData`] and should only depend
//! on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod directions;
pub mod error;
pub mod format;
pub mod graph;
pub mod model;
pub mod output;
pub mod path;
pub mod provider;
pub mod resolver;
pub mod routing;
pub mod store;

pub use dataset::{default_data_dir, open_store, resolve_data_dir, DATA_DIR_ENV};
pub use directions::{generate_directions, Heading};
pub use error::{Error, Result};
pub use format::{format_distance, format_duration};
pub use graph::{build_graph, Edge, Graph};
pub use model::{Campus, Location, LocationId, LocationKind, Pathway, Position, METERS_PER_PERCENT};
pub use output::{RouteEndpoint, RouteRenderMode, RouteStep, RouteSummary};
pub use path::{find_route_dijkstra, find_route_scan};
pub use provider::{CachedCampus, CampusData};
pub use resolver::{
    location_by_id, resolve_location, search_locations, suggest_locations, LocationMatcher,
    SubstringMatcher,
};
pub use routing::{
    find_path, find_path_with, plan_route, plan_route_with, route_distance, walking_minutes,
    RouteAlgorithm, RoutePlan, RouteRequest, WALKING_SPEED_MPS,
};
pub use store::{CampusStore, NewLocation, NewPathway};
