use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier shared by locations and the graph nodes built from them.
pub type LocationId = String;

/// Meters represented by one unit of planar distance in percentage space.
pub const METERS_PER_PERCENT: f64 = 10.0;

/// Position on the campus map as percentages of the map extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Euclidean distance to another position in percentage units.
    pub fn planar_distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Straight-line estimate in meters between two positions.
    pub fn estimated_meters(&self, other: &Self) -> f64 {
        self.planar_distance(other) * METERS_PER_PERCENT
    }
}

/// Category of a campus location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Building,
    Landmark,
    Parking,
    Entrance,
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            LocationKind::Building => "building",
            LocationKind::Landmark => "landmark",
            LocationKind::Parking => "parking",
            LocationKind::Entrance => "entrance",
        };
        f.write_str(value)
    }
}

/// Named point on the campus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type")]
    pub kind: LocationKind,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub accessibility: bool,
}

impl Location {
    pub fn position(&self) -> Position {
        Position {
            x: self.x,
            y: self.y,
        }
    }
}

/// Undirected walking connection between two locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pathway {
    pub id: String,
    pub from: LocationId,
    pub to: LocationId,
    /// Walking distance in meters as recorded by the campus administrators.
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub surface: String,
    #[serde(default)]
    pub accessibility: bool,
    #[serde(default)]
    pub lighting: bool,
}

impl Pathway {
    /// Declared distance when it is usable as an edge weight.
    pub fn declared_distance(&self) -> Option<f64> {
        (self.distance.is_finite() && self.distance > 0.0).then_some(self.distance)
    }

    /// Whether the pathway joins `a` and `b`, in either direction.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// In-memory snapshot of every location and pathway on the campus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Campus {
    pub locations: Vec<Location>,
    pub pathways: Vec<Pathway>,
}

impl Campus {
    pub fn new(locations: Vec<Location>, pathways: Vec<Pathway>) -> Self {
        Self {
            locations,
            pathways,
        }
    }

    /// Lookup a location by identifier.
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|location| location.id == id)
    }

    /// Lookup a pathway by identifier.
    pub fn pathway(&self, id: &str) -> Option<&Pathway> {
        self.pathways.iter().find(|pathway| pathway.id == id)
    }

    /// Pathways usable by wheelchair users and others requiring step-free access.
    pub fn accessible_pathways(&self) -> impl Iterator<Item = &Pathway> {
        self.pathways.iter().filter(|pathway| pathway.accessibility)
    }
}
