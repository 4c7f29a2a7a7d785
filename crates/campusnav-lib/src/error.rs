use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the campus navigation library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a free-text query matched no location.
    #[error("unknown location: {query}{}", format_suggestions(.suggestions))]
    LocationNotFound {
        query: String,
        suggestions: Vec<String>,
    },

    /// Raised when both endpoints resolved but no connecting path exists.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a computed route plan lacks any locations.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when the source and destination resolve to the same location.
    #[error("{name} is both the start and the destination")]
    SameLocation { name: String },

    /// Raised when an admin operation references a location id that does not exist.
    #[error("no location with id {id}")]
    UnknownLocationId { id: String },

    /// Raised when an admin operation references a pathway id that does not exist.
    #[error("no pathway with id {id}")]
    UnknownPathwayId { id: String },

    /// Raised when a record fails validation before being stored.
    #[error("invalid record: {message}")]
    InvalidRecord { message: String },

    /// Raised when attempting to write into the checked-in fixture directory.
    #[error("refusing to modify protected fixture data at {path}")]
    ProtectedFixturePath { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for campus data")]
    ProjectDirsUnavailable,

    /// Raised when a data file could not be parsed or serialised.
    #[error("malformed campus data in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Raised when an atomic file replacement fails.
    #[error("failed to persist {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error is an ordinary, user-facing routing outcome rather than a fault.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Error::LocationNotFound { .. } | Error::RouteNotFound { .. } | Error::SameLocation { .. }
        )
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidRecord {
            message: message.into(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
