mod auto;
mod config;
mod store;

// HTTP transport (requires "http" feature)
#[cfg(feature = "http")]
pub mod http;

pub use auto::{Auto, AutoDraft, AutoFilter, AutoPatch, InputError};
pub use config::Config;
pub use store::{load_autos, parse_autos, AutoStore, InMemoryAutoStore, StoreError};
