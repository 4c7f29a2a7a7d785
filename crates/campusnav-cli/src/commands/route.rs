//! Route command handler for walking directions between campus locations.

use anyhow::{Context, Result};

use campusnav_lib::{
    find_path, CachedCampus, CampusData, CampusStore, Error as RouteError, RouteAlgorithm,
    RouteRequest, RouteSummary,
};

use campusnav_cli::output::OutputFormat;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Free-text starting location.
    pub from: String,
    /// Free-text destination.
    pub to: String,
    /// Only walk pathways marked accessible.
    pub accessible: bool,
    /// Algorithm to use when planning the route.
    pub algorithm: RouteAlgorithm,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        let request =
            RouteRequest::new(self.from.as_str(), self.to.as_str()).with_algorithm(self.algorithm);
        if self.accessible {
            request.accessible()
        } else {
            request
        }
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    store: CampusStore,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let campus = CachedCampus::new(store);
    let request = args.to_request();

    let plan = match find_path(&campus, &request) {
        Ok(plan) => plan,
        Err(err) => return Err(handle_route_failure(&request, err)),
    };

    let locations = campus
        .locations()
        .context("failed to load campus locations")?;
    let summary = RouteSummary::from_plan(&locations, &plan)
        .context("failed to build route summary for display")?;

    print!("{}", format.format_route(&summary)?);
    Ok(())
}

fn handle_route_failure(request: &RouteRequest, err: RouteError) -> anyhow::Error {
    match err {
        RouteError::LocationNotFound { query, suggestions } => {
            anyhow::anyhow!(format_unknown_location_message(&query, &suggestions))
        }
        RouteError::RouteNotFound { start, goal } => {
            anyhow::anyhow!(format_route_not_found_message(&start, &goal, request))
        }
        RouteError::SameLocation { name } => anyhow::anyhow!(
            "'{name}' is both the start and the destination. Pick two different locations."
        ),
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_location_message(query: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown location '{}'.", query);
    match suggestions {
        [] => {}
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}

fn format_route_not_found_message(start: &str, goal: &str, request: &RouteRequest) -> String {
    let mut message = format!("No route found between {} and {}.", start, goal);
    if request.accessible_only {
        message.push_str(" Try again without --accessible to include stairs and unpaved paths.");
    } else {
        message.push_str(" Try `pathways` to check that both locations are connected.");
    }
    message
}
