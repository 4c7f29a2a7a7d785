use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use crate::model::{Location, LocationId, Pathway};

/// Edge within the routing graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: LocationId,
    pub distance: f64,
    /// Identifier of the pathway record that produced this edge.
    pub pathway: String,
}

/// Undirected weighted graph used by the path search.
///
/// Every location is a node, including locations without any pathway. Nodes
/// are kept in identifier order so that iteration is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: BTreeMap<LocationId, Vec<Edge>>,
}

impl Graph {
    /// Return the neighbours for a given location identifier.
    pub fn neighbours(&self, node: &str) -> &[Edge] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Node identifiers in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &LocationId> {
        self.adjacency.keys()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }
}

/// Build the routing graph from the campus locations and an already filtered
/// set of pathways.
///
/// Pathways with an endpoint that is not a known location are skipped. The
/// declared pathway distance is the edge weight; the straight-line estimate
/// is used only when a pathway carries no usable distance.
pub fn build_graph(locations: &[Location], pathways: &[Pathway]) -> Graph {
    let positions: HashMap<&str, &Location> = locations
        .iter()
        .map(|location| (location.id.as_str(), location))
        .collect();

    let mut adjacency: BTreeMap<LocationId, Vec<Edge>> = locations
        .iter()
        .map(|location| (location.id.clone(), Vec::new()))
        .collect();

    let mut dropped = 0usize;
    for pathway in pathways {
        let (Some(from), Some(to)) = (
            positions.get(pathway.from.as_str()),
            positions.get(pathway.to.as_str()),
        ) else {
            dropped += 1;
            debug!(
                pathway = %pathway.id,
                from = %pathway.from,
                to = %pathway.to,
                "skipping pathway with unknown endpoint"
            );
            continue;
        };

        let distance = pathway
            .declared_distance()
            .unwrap_or_else(|| from.position().estimated_meters(&to.position()));

        if let Some(edges) = adjacency.get_mut(&pathway.from) {
            edges.push(Edge {
                target: pathway.to.clone(),
                distance,
                pathway: pathway.id.clone(),
            });
        }
        if let Some(edges) = adjacency.get_mut(&pathway.to) {
            edges.push(Edge {
                target: pathway.from.clone(),
                distance,
                pathway: pathway.id.clone(),
            });
        }
    }

    if dropped > 0 {
        warn!(dropped, "ignored pathways that reference missing locations");
    }

    let graph = Graph { adjacency };
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built campus graph"
    );
    graph
}
