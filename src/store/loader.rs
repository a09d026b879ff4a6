//! Seed-file loading.
//!
//! The collection is read once, synchronously, before the server binds. Any
//! problem here is fatal to startup.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;

use super::StoreError;
use crate::auto::Auto;

/// Read and validate a JSON array of records from disk.
pub fn load_autos(path: impl AsRef<Path>) -> Result<Vec<Auto>, StoreError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .map_err(|e| StoreError::Load(format!("{}: {}", path.display(), e)))?;
    let autos = parse_autos(&raw)
        .map_err(|e| StoreError::Load(format!("{}: {}", path.display(), loader_detail(e))))?;

    info!(path = %path.display(), count = autos.len(), "autos loaded");
    Ok(autos)
}

/// Parse and validate a JSON array of records.
///
/// Ids must be positive and unique.
pub fn parse_autos(raw: &str) -> Result<Vec<Auto>, StoreError> {
    let autos: Vec<Auto> =
        serde_json::from_str(raw).map_err(|e| StoreError::Load(format!("invalid JSON: {}", e)))?;

    let mut seen = HashSet::with_capacity(autos.len());
    for auto in &autos {
        if auto.id == 0 {
            return Err(StoreError::Load("id 0 is not a valid id".into()));
        }
        if !seen.insert(auto.id) {
            return Err(StoreError::Load(format!("duplicate id {}", auto.id)));
        }
    }

    Ok(autos)
}

fn loader_detail(err: StoreError) -> String {
    match err {
        StoreError::Load(detail) => detail,
        other => other.to_string(),
    }
}
