use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::graph::Graph;
use crate::model::LocationId;

/// Run Dijkstra's algorithm with a binary heap frontier.
///
/// Returns `None` when either endpoint is not a graph node or the goal is
/// unreachable. Among frontier nodes with equal tentative distance the
/// lexicographically smallest identifier is settled first, which makes the
/// chosen path reproducible when several shortest paths exist. When
/// `start == goal` the single-node path `[start]` is returned.
pub fn find_route_dijkstra(graph: &Graph, start: &str, goal: &str) -> Option<Vec<LocationId>> {
    if !graph.contains(start) || !graph.contains(goal) {
        return None;
    }
    if start == goal {
        return Some(vec![start.to_string()]);
    }

    let mut distances: HashMap<&str, f64> = HashMap::new();
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut settled: HashSet<&str> = HashSet::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0.0);
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        if !settled.insert(entry.node) {
            continue;
        }
        if entry.node == goal {
            return reconstruct_path(&parents, start, goal);
        }

        let current_distance = entry.cost.0;
        for edge in graph.neighbours(entry.node) {
            let next = edge.target.as_str();
            if settled.contains(next) {
                continue;
            }

            let next_cost = current_distance + edge.distance;
            if next_cost < *distances.get(next).unwrap_or(&f64::INFINITY) {
                distances.insert(next, next_cost);
                parents.insert(next, entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    None
}

/// Run Dijkstra's algorithm by scanning every node for the frontier minimum.
///
/// O(V²), adequate for a campus-sized graph. Produces exactly the same paths
/// as [`find_route_dijkstra`], including the tie-break on identifiers.
pub fn find_route_scan(graph: &Graph, start: &str, goal: &str) -> Option<Vec<LocationId>> {
    if !graph.contains(start) || !graph.contains(goal) {
        return None;
    }
    if start == goal {
        return Some(vec![start.to_string()]);
    }

    let mut distances: HashMap<&str, f64> = graph
        .nodes()
        .map(|node| (node.as_str(), f64::INFINITY))
        .collect();
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::new();
    distances.insert(start, 0.0);

    while visited.len() < graph.node_count() {
        // Nodes iterate in ascending identifier order, so keeping only a
        // strictly smaller distance selects the smallest identifier on ties.
        let mut current: Option<(&str, f64)> = None;
        for node in graph.nodes() {
            let node = node.as_str();
            if visited.contains(node) {
                continue;
            }
            let distance = distances[node];
            if distance < current.map_or(f64::INFINITY, |(_, best)| best) {
                current = Some((node, distance));
            }
        }

        let Some((current, current_distance)) = current else {
            break;
        };
        if current == goal {
            return reconstruct_path(&parents, start, goal);
        }
        visited.insert(current);

        for edge in graph.neighbours(current) {
            let next = edge.target.as_str();
            if visited.contains(next) {
                continue;
            }
            let next_cost = current_distance + edge.distance;
            if next_cost < distances[next] {
                distances.insert(next, next_cost);
                parents.insert(next, current);
            }
        }
    }

    None
}

fn reconstruct_path(
    parents: &HashMap<&str, &str>,
    start: &str,
    goal: &str,
) -> Option<Vec<LocationId>> {
    let mut path = vec![goal.to_string()];
    let mut current = goal;
    while let Some(&parent) = parents.get(current) {
        path.push(parent.to_string());
        if parent == start {
            break;
        }
        current = parent;
    }
    path.reverse();

    (path.first().map(String::as_str) == Some(start)).then_some(path)
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'g> {
    node: &'g str,
    cost: FloatOrd,
}

impl<'g> QueueEntry<'g> {
    fn new(node: &'g str, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then identifier.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
