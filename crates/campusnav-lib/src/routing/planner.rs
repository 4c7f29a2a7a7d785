//! Route planning strategies implementing the Strategy pattern.
//!
//! Both planners run Dijkstra's algorithm over the same graph and return the
//! same paths; they differ only in how the frontier minimum is found.

use crate::graph::Graph;
use crate::model::LocationId;
use crate::path::{find_route_dijkstra, find_route_scan};

use super::RouteAlgorithm;

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the pathfinding algorithm on the given graph.
    ///
    /// Returns `Some(path)` if a route is found, `None` otherwise.
    fn find_path(&self, graph: &Graph, start: &str, goal: &str) -> Option<Vec<LocationId>>;
}

/// Dijkstra planner backed by a binary heap.
#[derive(Debug, Clone, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(&self, graph: &Graph, start: &str, goal: &str) -> Option<Vec<LocationId>> {
        find_route_dijkstra(graph, start, goal)
    }
}

/// Dijkstra planner that scans all nodes for the next minimum.
#[derive(Debug, Clone, Default)]
pub struct ScanPlanner;

impl RoutePlanner for ScanPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Scan
    }

    fn find_path(&self, graph: &Graph, start: &str, goal: &str) -> Option<Vec<LocationId>> {
        find_route_scan(graph, start, goal)
    }
}

/// Select the planner for an algorithm.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        RouteAlgorithm::Scan => Box::new(ScanPlanner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_planner_chooses_correct_type() {
        assert_eq!(
            select_planner(RouteAlgorithm::Dijkstra).algorithm(),
            RouteAlgorithm::Dijkstra
        );
        assert_eq!(
            select_planner(RouteAlgorithm::Scan).algorithm(),
            RouteAlgorithm::Scan
        );
    }
}
