//! Administrative commands that modify stored campus data.
//!
//! Each command runs as a single store transaction; nothing is written when
//! validation fails.

use anyhow::{Context, Result};

use campusnav_lib::{
    CampusStore, Error, Location, LocationKind, NewLocation, NewPathway, Pathway,
};

use campusnav_cli::output::OutputFormat;

/// Handle the `add-location` subcommand.
pub fn handle_add_location(store: &CampusStore, format: OutputFormat, new: NewLocation) -> Result<()> {
    let location = store
        .transact(|campus| campus.add_location(new))
        .context("failed to add location")?;
    let label = format!("{} ({})", location.name, location.id);
    print!("{}", format.format_record("Added location", &label, &location)?);
    Ok(())
}

/// Handle the `remove-location` subcommand.
///
/// Pathways that referenced the location stay stored and are ignored by routing.
pub fn handle_remove_location(store: &CampusStore, format: OutputFormat, id: &str) -> Result<()> {
    let location = store
        .transact(|campus| campus.remove_location(id))
        .context("failed to remove location")?;
    let label = format!("{} ({})", location.name, location.id);
    print!("{}", format.format_record("Removed location", &label, &location)?);
    Ok(())
}

/// Handle the `add-pathway` subcommand.
pub fn handle_add_pathway(store: &CampusStore, format: OutputFormat, new: NewPathway) -> Result<()> {
    let pathway = store
        .transact(|campus| campus.add_pathway(new))
        .context("failed to add pathway")?;
    let label = format!("{} ({} <-> {})", pathway.id, pathway.from, pathway.to);
    print!("{}", format.format_record("Added pathway", &label, &pathway)?);
    Ok(())
}

/// Handle the `remove-pathway` subcommand.
pub fn handle_remove_pathway(store: &CampusStore, format: OutputFormat, id: &str) -> Result<()> {
    let pathway = store
        .transact(|campus| campus.remove_pathway(id))
        .context("failed to remove pathway")?;
    let label = format!("{} ({} <-> {})", pathway.id, pathway.from, pathway.to);
    print!("{}", format.format_record("Removed pathway", &label, &pathway)?);
    Ok(())
}

/// Field overrides for `update-location`; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct LocationChanges {
    pub name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub kind: Option<LocationKind>,
    pub description: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub accessibility: Option<bool>,
}

impl LocationChanges {
    fn apply(self, location: &mut Location) {
        if let Some(name) = self.name {
            location.name = name;
        }
        if let Some(x) = self.x {
            location.x = x;
        }
        if let Some(y) = self.y {
            location.y = y;
        }
        if let Some(kind) = self.kind {
            location.kind = kind;
        }
        if let Some(description) = self.description {
            location.description = description;
        }
        if let Some(amenities) = self.amenities {
            location.amenities = amenities;
        }
        if let Some(accessibility) = self.accessibility {
            location.accessibility = accessibility;
        }
    }
}

/// Field overrides for `update-pathway`; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct PathwayChanges {
    pub from: Option<String>,
    pub to: Option<String>,
    pub distance: Option<f64>,
    pub surface: Option<String>,
    pub accessibility: Option<bool>,
    pub lighting: Option<bool>,
}

impl PathwayChanges {
    fn apply(self, pathway: &mut Pathway) {
        if let Some(from) = self.from {
            pathway.from = from;
        }
        if let Some(to) = self.to {
            pathway.to = to;
        }
        if let Some(distance) = self.distance {
            pathway.distance = distance;
        }
        if let Some(surface) = self.surface {
            pathway.surface = surface;
        }
        if let Some(accessibility) = self.accessibility {
            pathway.accessibility = accessibility;
        }
        if let Some(lighting) = self.lighting {
            pathway.lighting = lighting;
        }
    }
}

/// Handle the `update-location` subcommand.
///
/// The merged record is validated like a new one before it replaces the stored location.
pub fn handle_update_location(
    store: &CampusStore,
    format: OutputFormat,
    id: &str,
    changes: LocationChanges,
) -> Result<()> {
    let location = store
        .transact(|campus| {
            let mut location = campus
                .location(id)
                .cloned()
                .ok_or_else(|| Error::UnknownLocationId { id: id.to_string() })?;
            changes.apply(&mut location);
            campus.update_location(location.clone())?;
            Ok(location)
        })
        .context("failed to update location")?;
    let label = format!("{} ({})", location.name, location.id);
    print!("{}", format.format_record("Updated location", &label, &location)?);
    Ok(())
}

/// Handle the `update-pathway` subcommand.
pub fn handle_update_pathway(
    store: &CampusStore,
    format: OutputFormat,
    id: &str,
    changes: PathwayChanges,
) -> Result<()> {
    let pathway = store
        .transact(|campus| {
            let mut pathway = campus
                .pathway(id)
                .cloned()
                .ok_or_else(|| Error::UnknownPathwayId { id: id.to_string() })?;
            changes.apply(&mut pathway);
            campus.update_pathway(pathway.clone())?;
            Ok(pathway)
        })
        .context("failed to update pathway")?;
    let label = format!("{} ({} <-> {})", pathway.id, pathway.from, pathway.to);
    print!("{}", format.format_record("Updated pathway", &label, &pathway)?);
    Ok(())
}
