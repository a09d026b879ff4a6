use serde::{Deserialize, Serialize};

use super::input::{AutoDraft, AutoPatch};

/// A single vehicle record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auto {
    pub id: u64,
    pub marca: String,
    pub modelo: String,
    pub anio: i32,
    pub precio: f64,
    pub color: String,
}

impl Auto {
    /// Build a record from a validated draft under the given id.
    pub fn from_draft(id: u64, draft: AutoDraft) -> Self {
        let (marca, modelo, anio, precio, color) = draft.into_parts();
        Self {
            id,
            marca,
            modelo,
            anio,
            precio,
            color,
        }
    }

    /// Overwrite every field the patch carries, keeping the rest.
    pub fn apply(&mut self, patch: AutoPatch) {
        if let Some(marca) = patch.marca {
            self.marca = marca;
        }
        if let Some(modelo) = patch.modelo {
            self.modelo = modelo;
        }
        if let Some(anio) = patch.anio {
            self.anio = anio;
        }
        if let Some(precio) = patch.precio {
            self.precio = precio;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}
