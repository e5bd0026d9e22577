use axum::body::Bytes;
use axum::extract::Query;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::inspect;

#[derive(Debug, Deserialize)]
pub struct InspectParams {
    /// Original file name, used only for the media-type guess.
    pub name: Option<String>,
}

pub async fn inspect_request(Query(params): Query<InspectParams>, body: Bytes) -> Json<Value> {
    tracing::debug!(size = body.len(), name = ?params.name, "Inspecting upload");

    let report = inspect::inspect(params.name.as_deref(), &body);
    Json(json!({ "success": true, "data": report }))
}
