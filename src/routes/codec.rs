use axum::Json;
use serde_json::{json, Value};

use crate::codec::CodecRequest;
use crate::error::AppError;

pub async fn codec_request(Json(request): Json<CodecRequest>) -> Result<Json<Value>, AppError> {
    let output = request.apply()?;
    Ok(Json(json!({ "success": true, "data": { "output": output } })))
}
