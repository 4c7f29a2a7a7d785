//! JSON file storage for campus data.
//!
//! Locations and pathways live in `locations.json` and `pathways.json` inside a
//! data directory. Writes go through [`CampusStore::transact`], which loads
//! both collections, applies a mutation and replaces each file atomically, so
//! readers never observe a partially written file.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::model::{Campus, Location, LocationKind, Pathway};

/// File holding the location collection.
pub const LOCATIONS_FILENAME: &str = "locations.json";
/// File holding the pathway collection.
pub const PATHWAYS_FILENAME: &str = "pathways.json";

/// Absolute path to the checked-in fixture campus, when available.
static PROTECTED_FIXTURE_DIR: Lazy<Option<PathBuf>> = Lazy::new(|| {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/campus");
    path.canonicalize().ok()
});

/// Campus data stored as two JSON documents in one directory.
#[derive(Debug, Clone)]
pub struct CampusStore {
    dir: PathBuf,
}

impl CampusStore {
    /// Open a store rooted at `dir`. Missing files read as empty collections.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn locations_path(&self) -> PathBuf {
        self.dir.join(LOCATIONS_FILENAME)
    }

    pub fn pathways_path(&self) -> PathBuf {
        self.dir.join(PATHWAYS_FILENAME)
    }

    /// Load both collections.
    pub fn load(&self) -> Result<Campus> {
        let locations: Vec<Location> = read_collection(&self.locations_path())?;
        let pathways: Vec<Pathway> = read_collection(&self.pathways_path())?;
        debug!(
            dir = %self.dir.display(),
            locations = locations.len(),
            pathways = pathways.len(),
            "loaded campus data"
        );
        Ok(Campus::new(locations, pathways))
    }

    /// Load everything, apply `mutate`, then persist everything.
    ///
    /// Nothing is written when `mutate` fails.
    pub fn transact<T, F>(&self, mutate: F) -> Result<T>
    where
        F: FnOnce(&mut Campus) -> Result<T>,
    {
        self.guard_protected()?;

        let mut campus = self.load()?;
        let outcome = mutate(&mut campus)?;

        fs::create_dir_all(&self.dir)?;
        write_collection(&self.locations_path(), &campus.locations)?;
        write_collection(&self.pathways_path(), &campus.pathways)?;
        info!(
            dir = %self.dir.display(),
            locations = campus.locations.len(),
            pathways = campus.pathways.len(),
            "committed campus data"
        );
        Ok(outcome)
    }

    fn guard_protected(&self) -> Result<()> {
        let Some(fixture) = PROTECTED_FIXTURE_DIR.as_ref() else {
            return Ok(());
        };

        let is_fixture = self.dir == *fixture
            || self
                .dir
                .canonicalize()
                .map(|resolved| resolved == *fixture)
                .unwrap_or(false);
        if is_fixture {
            return Err(Error::ProtectedFixturePath {
                path: fixture.clone(),
            });
        }
        Ok(())
    }
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(error) => return Err(error.into()),
    };
    serde_json::from_str(&raw).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn write_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let body = serde_json::to_string_pretty(items).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(body.as_bytes())?;
    staged.write_all(b"\n")?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|error| Error::Persist {
        path: path.to_path_buf(),
        source: error.error,
    })?;
    Ok(())
}

/// Fields for a location that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub kind: LocationKind,
    pub description: String,
    pub amenities: Vec<String>,
    pub accessibility: bool,
}

/// Fields for a pathway that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPathway {
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub surface: String,
    pub accessibility: bool,
    pub lighting: bool,
}

impl Campus {
    /// Validate and append a location, assigning a `location-{millis}` identifier.
    pub fn add_location(&mut self, new: NewLocation) -> Result<Location> {
        let location = Location {
            id: self.next_id("location"),
            name: new.name,
            x: new.x,
            y: new.y,
            kind: new.kind,
            description: new.description,
            amenities: new.amenities,
            accessibility: new.accessibility,
        };
        validate_location(&location)?;
        self.locations.push(location.clone());
        Ok(location)
    }

    /// Replace the location with the same identifier.
    pub fn update_location(&mut self, updated: Location) -> Result<()> {
        validate_location(&updated)?;
        let slot = self
            .locations
            .iter_mut()
            .find(|location| location.id == updated.id)
            .ok_or_else(|| Error::UnknownLocationId {
                id: updated.id.clone(),
            })?;
        *slot = updated;
        Ok(())
    }

    /// Remove a location. Pathways that referenced it are left in place.
    pub fn remove_location(&mut self, id: &str) -> Result<Location> {
        let index = self
            .locations
            .iter()
            .position(|location| location.id == id)
            .ok_or_else(|| Error::UnknownLocationId { id: id.to_string() })?;
        Ok(self.locations.remove(index))
    }

    /// Validate and append a pathway, assigning a `pathway-{millis}` identifier.
    pub fn add_pathway(&mut self, new: NewPathway) -> Result<Pathway> {
        let pathway = Pathway {
            id: self.next_id("pathway"),
            from: new.from,
            to: new.to,
            distance: new.distance,
            surface: new.surface,
            accessibility: new.accessibility,
            lighting: new.lighting,
        };
        self.validate_pathway(&pathway)?;
        self.pathways.push(pathway.clone());
        Ok(pathway)
    }

    /// Replace the pathway with the same identifier.
    pub fn update_pathway(&mut self, updated: Pathway) -> Result<()> {
        self.validate_pathway(&updated)?;
        let slot = self
            .pathways
            .iter_mut()
            .find(|pathway| pathway.id == updated.id)
            .ok_or_else(|| Error::UnknownPathwayId {
                id: updated.id.clone(),
            })?;
        *slot = updated;
        Ok(())
    }

    pub fn remove_pathway(&mut self, id: &str) -> Result<Pathway> {
        let index = self
            .pathways
            .iter()
            .position(|pathway| pathway.id == id)
            .ok_or_else(|| Error::UnknownPathwayId { id: id.to_string() })?;
        Ok(self.pathways.remove(index))
    }

    fn next_id(&self, prefix: &str) -> String {
        let mut stamp = Utc::now().timestamp_millis();
        loop {
            let candidate = format!("{prefix}-{stamp}");
            let taken = self.locations.iter().any(|l| l.id == candidate)
                || self.pathways.iter().any(|p| p.id == candidate);
            if !taken {
                return candidate;
            }
            stamp += 1;
        }
    }

    fn validate_pathway(&self, pathway: &Pathway) -> Result<()> {
        if pathway.declared_distance().is_none() {
            return Err(Error::invalid(format!(
                "pathway distance must be a positive number of meters, got {}",
                pathway.distance
            )));
        }
        if pathway.from == pathway.to {
            return Err(Error::invalid("pathway must join two different locations"));
        }
        for endpoint in [&pathway.from, &pathway.to] {
            if self.location(endpoint).is_none() {
                return Err(Error::UnknownLocationId {
                    id: endpoint.clone(),
                });
            }
        }
        Ok(())
    }
}

fn validate_location(location: &Location) -> Result<()> {
    if location.name.trim().is_empty() {
        return Err(Error::invalid("location name must not be empty"));
    }
    let in_range = |value: f64| (0.0..=100.0).contains(&value);
    if !in_range(location.x) || !in_range(location.y) {
        return Err(Error::invalid(format!(
            "coordinates must be percentages within 0..=100, got ({}, {})",
            location.x, location.y
        )));
    }
    Ok(())
}
