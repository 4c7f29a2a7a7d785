//! Output formatting for CLI results.
//!
//! Route summaries reuse the library's render modes; listings of locations
//! and pathways are formatted here. Every formatter returns a `String` so the
//! command handlers decide where it is written.

use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use campusnav_lib::{format_distance, Location, Pathway, RouteRenderMode, RouteSummary};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Numbered directions with a one-line header.
    #[default]
    Text,
    /// Markdown suitable for pasting into notes or chat.
    Rich,
    /// One location name per line.
    Compact,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    fn render_mode(self) -> Option<RouteRenderMode> {
        match self {
            OutputFormat::Text => Some(RouteRenderMode::PlainText),
            OutputFormat::Rich => Some(RouteRenderMode::RichText),
            OutputFormat::Compact => Some(RouteRenderMode::Compact),
            OutputFormat::Json => None,
        }
    }

    /// Format a planned route.
    pub fn format_route(self, summary: &RouteSummary) -> Result<String> {
        match self.render_mode() {
            Some(mode) => Ok(summary.render(mode)),
            None => to_json(summary),
        }
    }

    /// Format a list of locations.
    pub fn format_locations(self, locations: &[Location]) -> Result<String> {
        match self {
            OutputFormat::Json => to_json(&locations),
            OutputFormat::Compact => Ok(lines(locations.iter().map(|l| l.name.clone()))),
            OutputFormat::Rich => Ok(lines(locations.iter().map(|location| {
                format!(
                    "- **{}** (`{}`, {}){}",
                    location.name,
                    location.id,
                    location.kind,
                    amenity_suffix(location)
                )
            }))),
            OutputFormat::Text => {
                if locations.is_empty() {
                    return Ok("No locations found.\n".to_string());
                }
                Ok(lines(locations.iter().map(format_location_text)))
            }
        }
    }

    /// Format a list of pathways.
    pub fn format_pathways(self, pathways: &[Pathway]) -> Result<String> {
        match self {
            OutputFormat::Json => to_json(&pathways),
            OutputFormat::Compact => Ok(lines(
                pathways
                    .iter()
                    .map(|pathway| format!("{} {} {}", pathway.id, pathway.from, pathway.to)),
            )),
            OutputFormat::Rich | OutputFormat::Text => {
                if pathways.is_empty() {
                    return Ok("No pathways found.\n".to_string());
                }
                Ok(lines(pathways.iter().map(format_pathway_text)))
            }
        }
    }

    /// Format a single stored record after an add or remove.
    pub fn format_record<T: Serialize>(self, verb: &str, label: &str, record: &T) -> Result<String> {
        match self {
            OutputFormat::Json => to_json(record),
            _ => Ok(format!("{verb} {label}\n")),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut body = serde_json::to_string_pretty(value)?;
    body.push('\n');
    Ok(body)
}

fn lines(items: impl Iterator<Item = String>) -> String {
    let mut buffer = String::new();
    for item in items {
        let _ = writeln!(buffer, "{item}");
    }
    buffer
}

fn amenity_suffix(location: &Location) -> String {
    if location.amenities.is_empty() {
        String::new()
    } else {
        format!(": {}", location.amenities.join(", "))
    }
}

fn format_location_text(location: &Location) -> String {
    let access = if location.accessibility {
        ""
    } else {
        " [not accessible]"
    };
    format!(
        "{:<20} {} ({}) at ({}, {}){}",
        location.id, location.name, location.kind, location.x, location.y, access
    )
}

fn format_pathway_text(pathway: &Pathway) -> String {
    let mut flags = Vec::new();
    if pathway.accessibility {
        flags.push("accessible");
    }
    if pathway.lighting {
        flags.push("lit");
    }
    let surface = if pathway.surface.is_empty() {
        "unknown"
    } else {
        pathway.surface.as_str()
    };
    let mut line = format!(
        "{:<12} {} <-> {} ({}, {})",
        pathway.id,
        pathway.from,
        pathway.to,
        format_distance(pathway.distance),
        surface
    );
    if !flags.is_empty() {
        let _ = write!(line, " [{}]", flags.join(", "));
    }
    line
}
