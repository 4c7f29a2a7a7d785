use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::format::{format_distance, format_duration};
use crate::model::{Location, LocationId};
use crate::routing::{RouteAlgorithm, RoutePlan};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
    Compact,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteEndpoint {
    pub id: LocationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteEndpoint {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Location visited while walking a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub id: LocationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteStep {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub accessible_only: bool,
    pub hops: usize,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub steps: Vec<RouteStep>,
    pub distance_m: f64,
    pub distance: String,
    pub duration_min: u64,
    pub duration: String,
    pub directions: Vec<String>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved location names.
    pub fn from_plan(locations: &[Location], plan: &RoutePlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        let name_of = |id: &str| {
            locations
                .iter()
                .find(|location| location.id == id)
                .map(|location| location.name.clone())
        };

        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, id)| RouteStep {
                index,
                id: id.clone(),
                name: name_of(id.as_str()),
            })
            .collect::<Vec<_>>();

        Ok(Self {
            algorithm: plan.algorithm,
            accessible_only: plan.accessible_only,
            hops: plan.hop_count(),
            start: RouteEndpoint {
                id: plan.start.clone(),
                name: name_of(plan.start.as_str()),
            },
            goal: RouteEndpoint {
                id: plan.goal.clone(),
                name: name_of(plan.goal.as_str()),
            },
            steps,
            distance_m: plan.distance_m,
            distance: format_distance(plan.distance_m),
            duration_min: plan.duration_min,
            duration: format_duration(plan.duration_min),
            directions: plan.directions.clone(),
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
            RouteRenderMode::Compact => self.render_compact(),
        }
    }

    fn access_label(&self) -> &'static str {
        if self.accessible_only {
            ", accessible paths only"
        } else {
            ""
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({}, {}, {} hops{})",
            self.start.display_name(),
            self.goal.display_name(),
            self.distance,
            self.duration,
            self.hops,
            self.access_label()
        );
        for (index, direction) in self.directions.iter().enumerate() {
            let _ = writeln!(buffer, "{:>3}. {}", index + 1, direction);
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} → {}_ ({}, {}, algorithm: `{}`{})",
            self.start.display_name(),
            self.goal.display_name(),
            self.distance,
            self.duration,
            self.algorithm,
            self.access_label()
        );
        for (index, direction) in self.directions.iter().enumerate() {
            let _ = writeln!(buffer, "{}. {}", index + 1, direction);
        }
        let _ = writeln!(buffer);
        let joined = self
            .steps
            .iter()
            .map(|step| format!("{} (`{}`)", step.display_name(), step.id))
            .collect::<Vec<_>>()
            .join(" → ");
        let _ = writeln!(buffer, "Path: {joined}");
        buffer
    }

    fn render_compact(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "{} -> {}: {} / {}",
            self.start.display_name(),
            self.goal.display_name(),
            self.distance,
            self.duration
        );
        for step in &self.steps {
            let _ = writeln!(buffer, "{}", step.display_name());
        }
        buffer
    }
}
