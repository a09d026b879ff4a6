//! Autos - the vehicle record type and the typed inputs that act on it.
//!
//! Records are serialized with the field names the HTTP API exposes
//! (`marca`, `modelo`, `anio`, `precio`, `color`). Request bodies and query
//! strings never reach the store untyped: they are parsed into an
//! [`AutoDraft`] (create), an [`AutoPatch`] (update) or an [`AutoFilter`]
//! (list) first.
//!
//! ## Example
//!
//! ```ignore
//! use autos_service::{AutoDraft, AutoFilter, AutoStore, InMemoryAutoStore};
//!
//! let store = InMemoryAutoStore::new();
//! let draft = AutoDraft::new("Toyota", "Corolla", 2020, 20000.0, "Red")?;
//! let created = store.create(draft)?;
//!
//! let filter = AutoFilter { marca: Some("toyota".into()), ..Default::default() };
//! assert_eq!(store.list(&filter)?, vec![created]);
//! ```

mod filter;
mod input;
mod record;

pub use filter::AutoFilter;
pub use input::{AutoDraft, AutoPatch, InputError};
pub use record::Auto;
