use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};
use crate::store::CampusStore;

/// Environment variable overriding the campus data directory.
pub const DATA_DIR_ENV: &str = "CAMPUSNAV_DATA_DIR";

/// Resolve the default data directory using platform-specific project directories.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("org", "campusnav", "campusnav").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Resolve the directory holding `locations.json` and `pathways.json`.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `CAMPUSNAV_DATA_DIR` environment variable.
/// 3. Platform-specific project data directory.
pub fn resolve_data_dir(target: Option<&Path>) -> Result<PathBuf> {
    if let Some(explicit) = target {
        return Ok(explicit.to_path_buf());
    }

    if let Some(env_path) = env::var_os(DATA_DIR_ENV) {
        let resolved = PathBuf::from(env_path);
        debug!(path = %resolved.display(), "using data directory from {DATA_DIR_ENV}");
        return Ok(resolved);
    }

    default_data_dir()
}

/// Open the store for the resolved data directory.
pub fn open_store(target: Option<&Path>) -> Result<CampusStore> {
    resolve_data_dir(target).map(CampusStore::open)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_target_wins() {
        let explicit = Path::new("/tmp/campus-explicit");
        assert_eq!(
            resolve_data_dir(Some(explicit)).expect("explicit path resolves"),
            explicit
        );
    }
}
