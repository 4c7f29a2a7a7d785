//! Read-only listings of stored campus data.

use anyhow::{Context, Result};

use campusnav_lib::{search_locations, CampusStore, Location, Pathway};

use campusnav_cli::output::OutputFormat;

/// Handle the `search` subcommand.
///
/// Matches the query against names, descriptions and amenities.
pub fn handle_search(store: &CampusStore, format: OutputFormat, query: &str) -> Result<()> {
    let campus = load(store)?;
    let matches: Vec<Location> = search_locations(&campus.locations, query)
        .into_iter()
        .cloned()
        .collect();
    print!("{}", format.format_locations(&matches)?);
    Ok(())
}

/// Handle the `locations` subcommand.
pub fn handle_locations(store: &CampusStore, format: OutputFormat) -> Result<()> {
    let campus = load(store)?;
    print!("{}", format.format_locations(&campus.locations)?);
    Ok(())
}

/// Handle the `pathways` subcommand.
pub fn handle_pathways(store: &CampusStore, format: OutputFormat, accessible: bool) -> Result<()> {
    let campus = load(store)?;
    let pathways: Vec<Pathway> = if accessible {
        campus.accessible_pathways().cloned().collect()
    } else {
        campus.pathways
    };
    print!("{}", format.format_pathways(&pathways)?);
    Ok(())
}

fn load(store: &CampusStore) -> Result<campusnav_lib::Campus> {
    store
        .load()
        .with_context(|| format!("failed to load campus data from {}", store.dir().display()))
}
