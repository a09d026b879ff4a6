use std::collections::HashMap;

use super::input::{parse_number, parse_year, InputError};
use super::record::Auto;

/// Optional constraints for listing records. All supplied constraints must
/// hold; a `None` constraint matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutoFilter {
    /// Case-insensitive exact brand.
    pub marca: Option<String>,
    /// Case-insensitive exact model.
    pub modelo: Option<String>,
    /// Case-insensitive exact color.
    pub color: Option<String>,
    /// Exact year.
    pub anio: Option<i32>,
    /// Inclusive lower price bound.
    pub precio_min: Option<f64>,
    /// Inclusive upper price bound.
    pub precio_max: Option<f64>,
}

impl AutoFilter {
    /// Build a filter from query-string parameters.
    ///
    /// Empty values are ignored. Unknown parameters are ignored.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, InputError> {
        let param = |name: &str| params.get(name).map(String::as_str).filter(|v| !v.is_empty());

        let anio = match param("anio") {
            Some(raw) => Some(
                parse_number(raw)
                    .and_then(parse_year)
                    .ok_or(InputError::InvalidParam("anio"))?,
            ),
            None => None,
        };
        let bound = |name: &'static str| -> Result<Option<f64>, InputError> {
            param(name)
                .map(|raw| parse_number(raw).ok_or(InputError::InvalidParam(name)))
                .transpose()
        };

        Ok(Self {
            marca: param("marca").map(str::to_string),
            modelo: param("modelo").map(str::to_string),
            color: param("color").map(str::to_string),
            anio,
            precio_min: bound("precio_min")?,
            precio_max: bound("precio_max")?,
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether the record satisfies every supplied constraint.
    pub fn matches(&self, auto: &Auto) -> bool {
        same_text(self.marca.as_deref(), &auto.marca)
            && same_text(self.modelo.as_deref(), &auto.modelo)
            && same_text(self.color.as_deref(), &auto.color)
            && self.anio.map_or(true, |anio| auto.anio == anio)
            && self.precio_min.map_or(true, |min| auto.precio >= min)
            && self.precio_max.map_or(true, |max| auto.precio <= max)
    }
}

fn same_text(wanted: Option<&str>, actual: &str) -> bool {
    wanted.map_or(true, |w| w.to_lowercase() == actual.to_lowercase())
}
