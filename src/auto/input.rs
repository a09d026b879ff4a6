//! Typed request inputs.
//!
//! Bodies arrive as arbitrary JSON. Numeric fields accept either a JSON
//! number or a string holding one; everything else that cannot be read as
//! the field's type is rejected with [`InputError::InvalidField`]. A `null`
//! field counts as absent, and a body that is not an object is read as `{}`.

use serde_json::{Map, Value};
use thiserror::Error;

/// Fields a create request must carry, in the order they are reported.
pub const REQUIRED_FIELDS: [&str; 5] = ["marca", "modelo", "anio", "precio", "color"];

/// Rejected request input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A create request is missing a required field (or carries an empty one).
    #[error("Faltan campos obligatorios (marca, modelo, anio, precio, color)")]
    MissingFields,
    /// A body field is present but not readable as its type.
    #[error("Campo inválido: {0}")]
    InvalidField(&'static str),
    /// A query parameter is present but not readable as its type.
    #[error("Parámetro inválido: {0}")]
    InvalidParam(&'static str),
}

/// Validated input for creating a record. Every field is present and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoDraft {
    marca: String,
    modelo: String,
    anio: i32,
    precio: f64,
    color: String,
}

impl AutoDraft {
    /// Build a draft from typed values.
    ///
    /// Empty strings and zero numbers count as missing, matching what the
    /// HTTP API accepts.
    pub fn new(
        marca: impl Into<String>,
        modelo: impl Into<String>,
        anio: i32,
        precio: f64,
        color: impl Into<String>,
    ) -> Result<Self, InputError> {
        let draft = Self {
            marca: marca.into(),
            modelo: modelo.into(),
            anio,
            precio,
            color: color.into(),
        };
        if draft.marca.is_empty()
            || draft.modelo.is_empty()
            || draft.color.is_empty()
            || draft.anio == 0
            || draft.precio == 0.0
        {
            return Err(InputError::MissingFields);
        }
        if !draft.precio.is_finite() {
            return Err(InputError::InvalidField("precio"));
        }
        Ok(draft)
    }

    /// Parse a create request body.
    ///
    /// Presence is judged on the raw value (`""`, `0`, `false` and `null`
    /// are missing) before any field is coerced, so `"0"` is a present year.
    pub fn from_json(body: &Value) -> Result<Self, InputError> {
        let empty = Map::new();
        let fields = body.as_object().unwrap_or(&empty);

        if REQUIRED_FIELDS
            .iter()
            .any(|name| fields.get(*name).map_or(true, is_falsy))
        {
            return Err(InputError::MissingFields);
        }

        Ok(Self {
            marca: text(fields, "marca")?.unwrap_or_default(),
            modelo: text(fields, "modelo")?.unwrap_or_default(),
            anio: year(fields, "anio")?.unwrap_or_default(),
            precio: price(fields, "precio")?.unwrap_or_default(),
            color: text(fields, "color")?.unwrap_or_default(),
        })
    }

    pub(crate) fn into_parts(self) -> (String, String, i32, f64, String) {
        (self.marca, self.modelo, self.anio, self.precio, self.color)
    }
}

/// Validated input for a partial update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutoPatch {
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub anio: Option<i32>,
    pub precio: Option<f64>,
    pub color: Option<String>,
}

impl AutoPatch {
    /// Parse an update request body. Unknown keys are ignored.
    pub fn from_json(body: &Value) -> Result<Self, InputError> {
        let empty = Map::new();
        let fields = body.as_object().unwrap_or(&empty);

        Ok(Self {
            marca: text(fields, "marca")?,
            modelo: text(fields, "modelo")?,
            anio: year(fields, "anio")?,
            precio: price(fields, "precio")?,
            color: text(fields, "color")?,
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64().map_or(false, |f| f == 0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn text(fields: &Map<String, Value>, name: &'static str) -> Result<Option<String>, InputError> {
    match fields.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(InputError::InvalidField(name)),
    }
}

fn year(fields: &Map<String, Value>, name: &'static str) -> Result<Option<i32>, InputError> {
    let Some(value) = number(fields, name)? else {
        return Ok(None);
    };
    parse_year(value).map(Some).ok_or(InputError::InvalidField(name))
}

fn price(fields: &Map<String, Value>, name: &'static str) -> Result<Option<f64>, InputError> {
    number(fields, name)
}

fn number(fields: &Map<String, Value>, name: &'static str) -> Result<Option<f64>, InputError> {
    let parsed = match fields.get(name) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_number(s),
        Some(_) => None,
    };
    parsed.map(Some).ok_or(InputError::InvalidField(name))
}

/// Read a finite number from text, ignoring surrounding whitespace.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Narrow a number to a year: integral and within `i32`.
pub(crate) fn parse_year(value: f64) -> Option<i32> {
    if value.fract() != 0.0 || value < i32::MIN as f64 || value > i32::MAX as f64 {
        return None;
    }
    Some(value as i32)
}
