//! Common test utilities and fixture helpers.
//!
//! Provides small builders for hand-made campuses and a temporary copy of the
//! checked-in fixture campus for tests that write to disk.

use std::fs;
use std::path::PathBuf;

use campusnav_lib::{Campus, CampusStore, Location, LocationKind, Pathway};
use tempfile::TempDir;

/// Directory holding the fixture `locations.json` and `pathways.json`.
pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/campus")
}

/// Fixture campus loaded through the JSON store.
#[allow(dead_code)]
pub fn fixture_campus() -> Campus {
    CampusStore::open(fixture_dir())
        .load()
        .expect("fixture campus loads")
}

#[allow(dead_code)]
pub fn location(id: &str, name: &str, x: f64, y: f64) -> Location {
    Location {
        id: id.to_string(),
        name: name.to_string(),
        x,
        y,
        kind: LocationKind::Building,
        description: String::new(),
        amenities: Vec::new(),
        accessibility: true,
    }
}

#[allow(dead_code)]
pub fn pathway(id: &str, from: &str, to: &str, distance: f64) -> Pathway {
    Pathway {
        id: id.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        distance,
        surface: "paved".to_string(),
        accessibility: true,
        lighting: true,
    }
}

/// A@(0,0), B@(100,0), C@(100,100) joined by A-B (500m) and B-C (300m).
#[allow(dead_code)]
pub fn triangle_campus() -> Campus {
    Campus::new(
        vec![
            location("A", "A", 0.0, 0.0),
            location("B", "B", 100.0, 0.0),
            location("C", "C", 100.0, 100.0),
        ],
        vec![pathway("ab", "A", "B", 500.0), pathway("bc", "B", "C", 300.0)],
    )
}

/// Writable copy of the fixture campus in a temporary directory.
#[allow(dead_code)]
pub struct TempCampus {
    _temp_dir: TempDir,
    pub dir: PathBuf,
}

#[allow(dead_code)]
impl TempCampus {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let dir = temp_dir.path().join("campus");
        fs::create_dir_all(&dir).expect("create campus dir");
        for file in ["locations.json", "pathways.json"] {
            fs::copy(fixture_dir().join(file), dir.join(file)).expect("copy fixture file");
        }
        Self {
            _temp_dir: temp_dir,
            dir,
        }
    }

    pub fn store(&self) -> CampusStore {
        CampusStore::open(&self.dir)
    }

    pub fn read(&self, file: &str) -> String {
        fs::read_to_string(self.dir.join(file)).expect("read campus file")
    }
}
