//! Data providers feeding the route planner.
//!
//! The planner never reaches for global state: callers pass a [`CampusData`]
//! implementation into [`find_path`](crate::find_path). [`Campus`] serves an
//! in-memory snapshot directly, while [`CachedCampus`] loads from a
//! [`CampusStore`] once and keeps the snapshot until [`CachedCampus::invalidate`]
//! is called.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::error::Result;
use crate::model::{Campus, Location, Pathway};
use crate::store::CampusStore;

/// Read-only source of campus locations and pathways.
pub trait CampusData: Send + Sync {
    /// Every known location, in stored order.
    fn locations(&self) -> Result<Vec<Location>>;

    /// Pathways in stored order, optionally restricted to accessible ones.
    fn pathways(&self, accessible_only: bool) -> Result<Vec<Pathway>>;
}

impl CampusData for Campus {
    fn locations(&self) -> Result<Vec<Location>> {
        Ok(self.locations.clone())
    }

    fn pathways(&self, accessible_only: bool) -> Result<Vec<Pathway>> {
        Ok(filter_pathways(&self.pathways, accessible_only))
    }
}

fn filter_pathways(pathways: &[Pathway], accessible_only: bool) -> Vec<Pathway> {
    pathways
        .iter()
        .filter(|pathway| !accessible_only || pathway.accessibility)
        .cloned()
        .collect()
}

/// Store-backed provider that caches the last loaded snapshot.
#[derive(Debug)]
pub struct CachedCampus {
    store: CampusStore,
    cache: RwLock<Option<Arc<Campus>>>,
}

impl CachedCampus {
    pub fn new(store: CampusStore) -> Self {
        Self {
            store,
            cache: RwLock::new(None),
        }
    }

    pub fn store(&self) -> &CampusStore {
        &self.store
    }

    /// Current snapshot, loading it from the store when nothing is cached.
    pub fn snapshot(&self) -> Result<Arc<Campus>> {
        if let Some(cached) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Ok(Arc::clone(cached));
        }

        let mut slot = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = slot.as_ref() {
            return Ok(Arc::clone(cached));
        }
        let loaded = Arc::new(self.store.load()?);
        debug!(
            locations = loaded.locations.len(),
            pathways = loaded.pathways.len(),
            "cached campus snapshot"
        );
        *slot = Some(Arc::clone(&loaded));
        Ok(loaded)
    }

    /// Drop the cached snapshot so the next read reloads from the store.
    pub fn invalidate(&self) {
        *self.cache.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Run a store transaction and invalidate the cache afterwards.
    pub fn transact<T, F>(&self, mutate: F) -> Result<T>
    where
        F: FnOnce(&mut Campus) -> Result<T>,
    {
        let outcome = self.store.transact(mutate);
        self.invalidate();
        outcome
    }
}

impl CampusData for CachedCampus {
    fn locations(&self) -> Result<Vec<Location>> {
        Ok(self.snapshot()?.locations.clone())
    }

    fn pathways(&self, accessible_only: bool) -> Result<Vec<Pathway>> {
        Ok(filter_pathways(&self.snapshot()?.pathways, accessible_only))
    }
}
