use std::collections::HashMap;
use std::fmt;

use crate::model::{Location, LocationId, Position};

/// Compass heading derived from a displacement on the campus map.
///
/// The map's y axis grows downwards, so a positive vertical displacement
/// heads south.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    North,
    South,
    East,
    West,
}

impl Heading {
    /// Heading for travelling from `from` to `to`. The dominant axis wins;
    /// equal magnitudes count as vertical.
    pub fn between(from: Position, to: Position) -> Self {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        if dx.abs() > dy.abs() {
            if dx > 0.0 {
                Heading::East
            } else {
                Heading::West
            }
        } else if dy > 0.0 {
            Heading::South
        } else {
            Heading::North
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Heading::North => "north",
            Heading::South => "south",
            Heading::East => "east",
            Heading::West => "west",
        };
        f.write_str(value)
    }
}

/// Turn an ordered path into one instruction per location.
///
/// The first location reads "Start at", the last "Arrive at", and each
/// interior location gets the heading of the leg leaving it. Paths with fewer
/// than two locations produce no directions; identifiers missing from
/// `locations` are skipped.
pub fn generate_directions(path: &[LocationId], locations: &[Location]) -> Vec<String> {
    if path.len() < 2 {
        return Vec::new();
    }

    let by_id: HashMap<&str, &Location> = locations
        .iter()
        .map(|location| (location.id.as_str(), location))
        .collect();
    let lookup = |index: usize| -> Option<&Location> {
        path.get(index)
            .and_then(|id| by_id.get(id.as_str()).copied())
    };

    let last = path.len() - 1;
    let mut directions = Vec::with_capacity(path.len());
    for index in 0..path.len() {
        let Some(current) = lookup(index) else {
            continue;
        };

        if index == 0 {
            directions.push(format!("Start at {}", current.name));
        } else if index == last {
            directions.push(format!("Arrive at {}", current.name));
        } else if let (Some(_previous), Some(next)) = (lookup(index - 1), lookup(index + 1)) {
            let heading = Heading::between(current.position(), next.position());
            directions.push(format!("Head {} toward {}", heading, current.name));
        }
    }

    directions
}
