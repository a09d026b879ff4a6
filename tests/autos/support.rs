//! Shared fixtures: a small seed collection of autos.

#![allow(dead_code)]

use autos_service::{Auto, InMemoryAutoStore};

pub fn auto(id: u64, marca: &str, modelo: &str, anio: i32, precio: f64, color: &str) -> Auto {
    Auto {
        id,
        marca: marca.into(),
        modelo: modelo.into(),
        anio,
        precio,
        color: color.into(),
    }
}

/// The single-record collection used in the API walkthrough.
pub fn corolla() -> Auto {
    auto(1, "Toyota", "Corolla", 2020, 20000.0, "Red")
}

/// A mixed collection with repeated brands, years and colors.
pub fn seed() -> Vec<Auto> {
    vec![
        corolla(),
        auto(2, "Ford", "Focus", 2019, 15000.0, "Blue"),
        auto(3, "toyota", "Yaris", 2021, 14000.0, "RED"),
        auto(4, "Honda", "Civic", 2020, 22000.0, "Black"),
        auto(5, "Ford", "Fiesta", 2020, 12000.0, "Red"),
        auto(7, "TOYOTA", "Corolla", 2019, 18000.0, "White"),
    ]
}

pub fn seeded_store() -> InMemoryAutoStore {
    InMemoryAutoStore::with_autos(seed())
}

/// The seed collection as it would appear in `autos.json`.
pub fn seed_json() -> String {
    serde_json::to_string_pretty(&seed()).unwrap()
}
