use thiserror::Error;

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record carries this id.
    #[error("Auto no encontrado")]
    NotFound(u64),
    /// The highest id is `u64::MAX`, so no next id exists.
    #[error("no ids left to assign")]
    IdsExhausted,
    /// The collection lock was poisoned by a panicking writer.
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),
    /// The seed collection could not be read or is inconsistent.
    #[error("failed to load autos: {0}")]
    Load(String),
}
