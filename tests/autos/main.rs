//! Autos integration tests.
//!
//! - store: collection operations and filter properties over a seeded store
//! - seed: loading the collection from disk
//! - http: full axum roundtrips with reqwest

mod support;
mod store;
