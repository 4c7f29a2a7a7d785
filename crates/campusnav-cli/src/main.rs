mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use campusnav_cli::output::OutputFormat;
use campusnav_lib::{open_store, LocationKind, NewLocation, NewPathway, RouteAlgorithm};

use commands::admin::{
    handle_add_location, handle_add_pathway, handle_remove_location, handle_remove_pathway,
    handle_update_location, handle_update_pathway, LocationChanges, PathwayChanges,
};
use commands::listing::{handle_locations, handle_pathways, handle_search};
use commands::route::{handle_route_command, RouteCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus walking directions and data administration")]
struct Cli {
    /// Directory holding locations.json and pathways.json (defaults to
    /// `CAMPUSNAV_DATA_DIR`, then the platform data directory).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walking directions between two locations.
    Route {
        /// Starting location (name, partial name or identifier).
        #[arg(long = "from")]
        from: String,
        /// Destination location.
        #[arg(long = "to")]
        to: String,
        /// Only use pathways marked accessible.
        #[arg(long)]
        accessible: bool,
        /// Shortest-path strategy.
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Dijkstra)]
        algorithm: AlgorithmArg,
    },
    /// Find locations whose name, description or amenities match a query.
    Search {
        query: String,
    },
    /// List every stored location.
    Locations,
    /// List stored pathways.
    Pathways {
        /// Only list pathways marked accessible.
        #[arg(long)]
        accessible: bool,
    },
    /// Add a location with a generated identifier.
    AddLocation {
        #[arg(long)]
        name: String,
        /// Horizontal position as a percentage of the map width.
        #[arg(long)]
        x: f64,
        /// Vertical position as a percentage of the map height.
        #[arg(long)]
        y: f64,
        #[arg(long, value_enum)]
        kind: KindArg,
        #[arg(long, default_value = "")]
        description: String,
        /// Amenity available at the location; repeat for several.
        #[arg(long = "amenity")]
        amenities: Vec<String>,
        #[arg(long)]
        accessible: bool,
    },
    /// Change fields of a stored location; omitted fields keep their value.
    UpdateLocation {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        x: Option<f64>,
        #[arg(long)]
        y: Option<f64>,
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        #[arg(long)]
        description: Option<String>,
        /// Replace the amenity list; repeat for several.
        #[arg(long = "amenity")]
        amenities: Vec<String>,
        /// Drop every amenity.
        #[arg(long, conflicts_with = "amenities")]
        clear_amenities: bool,
        #[arg(long)]
        accessible: Option<bool>,
    },
    /// Remove a location by identifier.
    RemoveLocation {
        id: String,
    },
    /// Add a pathway between two location identifiers.
    AddPathway {
        #[arg(long)]
        from_id: String,
        #[arg(long)]
        to_id: String,
        /// Walking distance in meters.
        #[arg(long)]
        distance: f64,
        #[arg(long, default_value = "paved")]
        surface: String,
        #[arg(long)]
        accessible: bool,
        #[arg(long)]
        lit: bool,
    },
    /// Change fields of a stored pathway; omitted fields keep their value.
    UpdatePathway {
        id: String,
        #[arg(long)]
        from_id: Option<String>,
        #[arg(long)]
        to_id: Option<String>,
        #[arg(long)]
        distance: Option<f64>,
        #[arg(long)]
        surface: Option<String>,
        #[arg(long)]
        accessible: Option<bool>,
        #[arg(long)]
        lit: Option<bool>,
    },
    /// Remove a pathway by identifier.
    RemovePathway {
        id: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Dijkstra,
    Scan,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
            AlgorithmArg::Scan => RouteAlgorithm::Scan,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Building,
    Landmark,
    Parking,
    Entrance,
}

impl From<KindArg> for LocationKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Building => LocationKind::Building,
            KindArg::Landmark => LocationKind::Landmark,
            KindArg::Parking => LocationKind::Parking,
            KindArg::Entrance => LocationKind::Entrance,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let store = open_store(cli.data_dir.as_deref())
        .context("failed to resolve the campus data directory")?;
    let format = cli.format;

    match cli.command {
        Command::Route {
            from,
            to,
            accessible,
            algorithm,
        } => {
            let args = RouteCommandArgs {
                from,
                to,
                accessible,
                algorithm: algorithm.into(),
            };
            handle_route_command(store, format, &args)
        }
        Command::Search { query } => handle_search(&store, format, &query),
        Command::Locations => handle_locations(&store, format),
        Command::Pathways { accessible } => handle_pathways(&store, format, accessible),
        Command::AddLocation {
            name,
            x,
            y,
            kind,
            description,
            amenities,
            accessible,
        } => handle_add_location(
            &store,
            format,
            NewLocation {
                name,
                x,
                y,
                kind: kind.into(),
                description,
                amenities,
                accessibility: accessible,
            },
        ),
        Command::UpdateLocation {
            id,
            name,
            x,
            y,
            kind,
            description,
            amenities,
            clear_amenities,
            accessible,
        } => {
            let amenities = if clear_amenities {
                Some(Vec::new())
            } else {
                Some(amenities).filter(|list| !list.is_empty())
            };
            let changes = LocationChanges {
                name,
                x,
                y,
                kind: kind.map(Into::into),
                description,
                amenities,
                accessibility: accessible,
            };
            handle_update_location(&store, format, &id, changes)
        }
        Command::RemoveLocation { id } => handle_remove_location(&store, format, &id),
        Command::AddPathway {
            from_id,
            to_id,
            distance,
            surface,
            accessible,
            lit,
        } => handle_add_pathway(
            &store,
            format,
            NewPathway {
                from: from_id,
                to: to_id,
                distance,
                surface,
                accessibility: accessible,
                lighting: lit,
            },
        ),
        Command::UpdatePathway {
            id,
            from_id,
            to_id,
            distance,
            surface,
            accessible,
            lit,
        } => {
            let changes = PathwayChanges {
                from: from_id,
                to: to_id,
                distance,
                surface,
                accessibility: accessible,
                lighting: lit,
            };
            handle_update_pathway(&store, format, &id, changes)
        }
        Command::RemovePathway { id } => handle_remove_pathway(&store, format, &id),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
