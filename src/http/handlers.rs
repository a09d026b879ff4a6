//! Route handlers. Each one parses its input into typed values, runs a single
//! store operation and renders the result as JSON.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Map, Value};
use tracing::{debug, info};

use super::error::ApiError;
use crate::auto::{Auto, AutoDraft, AutoFilter, AutoPatch};
use crate::store::AutoStore;

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// `GET /schema` - field types of a record.
pub async fn schema() -> impl IntoResponse {
    Json(json!({
        "type": "object",
        "items": {
            "id": "number",
            "marca": "string",
            "modelo": "string",
            "anio": "number",
            "precio": "number",
            "color": "string"
        }
    }))
}

/// `GET /api/autos` - list, narrowed by `marca`, `modelo`, `color`, `anio`,
/// `precio_min` and `precio_max`.
pub async fn list_autos<S: AutoStore + 'static>(
    State(store): State<Arc<S>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Auto>>, ApiError> {
    let filter = AutoFilter::from_query(&params)?;
    let autos = store.list(&filter)?;
    debug!(?filter, count = autos.len(), "autos listed");
    Ok(Json(autos))
}

/// `GET /api/autos/:id`
pub async fn get_auto<S: AutoStore + 'static>(
    State(store): State<Arc<S>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Auto>, ApiError> {
    let id = parse_id(id)?;
    let auto = store.get(id)?;
    debug!(id, "auto fetched");
    Ok(Json(auto))
}

/// `POST /api/autos` - create; all five fields are required.
pub async fn create_auto<S: AutoStore + 'static>(
    State(store): State<Arc<S>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Auto>), ApiError> {
    let draft = AutoDraft::from_json(&parse_body(&body)?)?;
    let auto = store.create(draft)?;
    info!(id = auto.id, marca = %auto.marca, modelo = %auto.modelo, "auto created");
    Ok((StatusCode::CREATED, Json(auto)))
}

/// `PUT /api/autos/:id` - partial update.
pub async fn update_auto<S: AutoStore + 'static>(
    State(store): State<Arc<S>>,
    id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<Auto>, ApiError> {
    let id = parse_id(id)?;
    let patch = AutoPatch::from_json(&parse_body(&body)?)?;
    let auto = store.update(id, patch)?;
    info!(id, "auto updated");
    Ok(Json(auto))
}

/// `DELETE /api/autos/:id`
pub async fn delete_auto<S: AutoStore + 'static>(
    State(store): State<Arc<S>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Auto>, ApiError> {
    let id = parse_id(id)?;
    let removed = store.delete(id)?;
    info!(id, "auto deleted");
    Ok(Json(removed))
}

/// A segment axum cannot decode (e.g. invalid UTF-8) matches no record either.
fn parse_id(id: Result<Path<String>, PathRejection>) -> Result<u64, ApiError> {
    let Path(raw) = id.map_err(|e| ApiError::UnknownId(e.body_text()))?;
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ApiError::UnknownId(raw))
}

/// An empty body reads as `{}`; anything else must be valid JSON.
fn parse_body(body: &Bytes) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(body).map_err(ApiError::MalformedJson)
}
