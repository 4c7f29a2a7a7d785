//! Free-text location resolution.
//!
//! [`SubstringMatcher`] implements the permissive rule set used by the route
//! planner. The rules are checked per candidate in input order and the first
//! candidate satisfying any rule wins; there is no scoring across candidates.
//! Stricter matchers can be plugged in through [`LocationMatcher`] without
//! touching graph construction or path search.

use std::cmp::Ordering;

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::Location;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Number of suggestions attached to a failed resolution.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Strategy mapping a free-text query onto a single location.
pub trait LocationMatcher: Send + Sync {
    /// Return the best matching location, or `None` when nothing matches.
    fn find<'a>(&self, query: &str, locations: &'a [Location]) -> Option<&'a Location>;
}

/// Case-insensitive substring matcher.
///
/// A location matches when, in order:
/// 1. its name contains the query,
/// 2. the query contains its name,
/// 3. its name without whitespace contains the query without whitespace,
/// 4. its identifier contains the query with whitespace runs replaced by `-`.
///
/// "sci bldg" does not match "Science Building"; no token or edit-distance
/// matching is attempted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl SubstringMatcher {
    fn matches(location: &Location, query: &NormalizedQuery) -> bool {
        let name = location.name.to_lowercase();
        if name.contains(&query.lower) || query.lower.contains(&name) {
            return true;
        }
        if strip_whitespace(&name).contains(&query.compact) {
            return true;
        }
        location.id.to_lowercase().contains(&query.hyphenated)
    }
}

impl LocationMatcher for SubstringMatcher {
    fn find<'a>(&self, query: &str, locations: &'a [Location]) -> Option<&'a Location> {
        let normalized = NormalizedQuery::new(query);
        locations
            .iter()
            .find(|location| Self::matches(location, &normalized))
    }
}

struct NormalizedQuery {
    lower: String,
    compact: String,
    hyphenated: String,
}

impl NormalizedQuery {
    fn new(query: &str) -> Self {
        let lower = query.to_lowercase();
        Self {
            compact: strip_whitespace(&lower),
            hyphenated: hyphenate_whitespace(&lower),
            lower,
        }
    }
}

fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Replace every run of whitespace (leading and trailing runs included) with one hyphen.
fn hyphenate_whitespace(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_run = false;
    for c in value.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push('-');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Resolve `query` with `matcher`, attaching name suggestions on failure.
pub fn resolve_location<'a>(
    matcher: &dyn LocationMatcher,
    query: &str,
    locations: &'a [Location],
) -> Result<&'a Location> {
    match matcher.find(query, locations) {
        Some(location) => {
            debug!(query, id = %location.id, name = %location.name, "resolved location");
            Ok(location)
        }
        None => {
            debug!(query, candidates = locations.len(), "location query matched nothing");
            Err(Error::LocationNotFound {
                query: query.to_string(),
                suggestions: suggest_locations(locations, query, DEFAULT_SUGGESTION_LIMIT),
            })
        }
    }
}

/// Up to `limit` location names that look similar to `query`, best first.
pub fn suggest_locations(locations: &[Location], query: &str, limit: usize) -> Vec<String> {
    let needle = query.to_lowercase();
    let mut scored: Vec<(f64, &str)> = locations
        .iter()
        .map(|location| {
            let score = strsim::jaro_winkler(&needle, &location.name.to_lowercase());
            (score, location.name.as_str())
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.1.cmp(b.1))
    });
    scored.dedup_by(|a, b| a.1 == b.1);
    scored
        .into_iter()
        .take(limit)
        .map(|(_, name)| name.to_string())
        .collect()
}

/// Locations whose name, description, or any amenity contains `query`, in input order.
pub fn search_locations<'a>(locations: &'a [Location], query: &str) -> Vec<&'a Location> {
    let needle = query.to_lowercase();
    locations
        .iter()
        .filter(|location| {
            location.name.to_lowercase().contains(&needle)
                || location.description.to_lowercase().contains(&needle)
                || location
                    .amenities
                    .iter()
                    .any(|amenity| amenity.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Exact identifier lookup.
pub fn location_by_id<'a>(locations: &'a [Location], id: &str) -> Option<&'a Location> {
    locations.iter().find(|location| location.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphenates_each_whitespace_run() {
        assert_eq!(hyphenate_whitespace("main  library"), "main-library");
        assert_eq!(hyphenate_whitespace(" north\tparking "), "-north-parking-");
        assert_eq!(hyphenate_whitespace("gym"), "gym");
    }

    #[test]
    fn strips_all_whitespace() {
        assert_eq!(strip_whitespace(" student \n center"), "studentcenter");
    }
}
