//! Store - the authoritative collection of records.
//!
//! `AutoStore` is the seam the HTTP layer is generic over. The in-memory
//! implementation holds the whole collection behind one lock, taken once per
//! operation, so every operation observes and leaves a consistent collection
//! even on a multi-threaded runtime.
//!
//! ## Example
//!
//! ```ignore
//! use autos_service::{AutoStore, InMemoryAutoStore};
//!
//! let store = InMemoryAutoStore::load("./autos.json")?;
//! let auto = store.get(1)?;
//! let removed = store.delete(auto.id)?;
//! ```

mod error;
mod in_memory;
mod loader;

pub use error::StoreError;
pub use in_memory::InMemoryAutoStore;
pub use loader::{load_autos, parse_autos};

use crate::auto::{Auto, AutoDraft, AutoFilter, AutoPatch};

/// CRUD over the vehicle collection.
pub trait AutoStore: Send + Sync {
    /// Every record matching the filter, in collection order.
    fn list(&self, filter: &AutoFilter) -> Result<Vec<Auto>, StoreError>;

    /// The record with this id, or `NotFound`.
    fn get(&self, id: u64) -> Result<Auto, StoreError>;

    /// Append a record under the next free id (`max + 1`, or `1` when empty).
    fn create(&self, draft: AutoDraft) -> Result<Auto, StoreError>;

    /// Overwrite the patched fields of an existing record and return it.
    fn update(&self, id: u64, patch: AutoPatch) -> Result<Auto, StoreError>;

    /// Remove a record and return what was removed.
    fn delete(&self, id: u64) -> Result<Auto, StoreError>;

    /// Number of records in the collection.
    fn len(&self) -> Result<usize, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}
