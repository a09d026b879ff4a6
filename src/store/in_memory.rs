use std::path::Path;
use std::sync::{Arc, RwLock};

use tracing::debug;

use super::{load_autos, AutoStore, StoreError};
use crate::auto::{Auto, AutoDraft, AutoFilter, AutoPatch};

/// In-memory store backed by a `Vec`, kept in insertion order.
///
/// Clone-friendly via Arc: clones share the same collection.
#[derive(Clone, Default)]
pub struct InMemoryAutoStore {
    autos: Arc<RwLock<Vec<Auto>>>,
}

impl InMemoryAutoStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store over an existing collection.
    ///
    /// The caller is responsible for id uniqueness; [`load_autos`] checks it.
    pub fn with_autos(autos: Vec<Auto>) -> Self {
        Self {
            autos: Arc::new(RwLock::new(autos)),
        }
    }

    /// Seed a store from a JSON array file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Ok(Self::with_autos(load_autos(path)?))
    }

    /// Copy of the whole collection.
    pub fn snapshot(&self) -> Result<Vec<Auto>, StoreError> {
        let autos = self
            .autos
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(autos.clone())
    }
}

impl AutoStore for InMemoryAutoStore {
    fn list(&self, filter: &AutoFilter) -> Result<Vec<Auto>, StoreError> {
        let autos = self
            .autos
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;

        Ok(autos.iter().filter(|a| filter.matches(a)).cloned().collect())
    }

    fn get(&self, id: u64) -> Result<Auto, StoreError> {
        let autos = self
            .autos
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;

        autos
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn create(&self, draft: AutoDraft) -> Result<Auto, StoreError> {
        let mut autos = self
            .autos
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;

        let id = match autos.iter().map(|a| a.id).max() {
            Some(max) => max.checked_add(1).ok_or(StoreError::IdsExhausted)?,
            None => 1,
        };
        let auto = Auto::from_draft(id, draft);
        autos.push(auto.clone());
        debug!(id, size = autos.len(), "auto appended");

        Ok(auto)
    }

    fn update(&self, id: u64, patch: AutoPatch) -> Result<Auto, StoreError> {
        let mut autos = self
            .autos
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;

        let auto = autos
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(StoreError::NotFound(id))?;
        auto.apply(patch);

        Ok(auto.clone())
    }

    fn delete(&self, id: u64) -> Result<Auto, StoreError> {
        let mut autos = self
            .autos
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;

        let idx = autos
            .iter()
            .position(|a| a.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = autos.remove(idx);
        debug!(id, size = autos.len(), "auto removed");

        Ok(removed)
    }

    fn len(&self) -> Result<usize, StoreError> {
        let autos = self
            .autos
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(autos.len())
    }
}
