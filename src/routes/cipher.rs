use axum::Json;
use serde_json::{json, Value};

use crate::cipher::{self, CipherRequest};
use crate::error::AppError;

pub async fn caesar_request(Json(request): Json<CipherRequest>) -> Result<Json<Value>, AppError> {
    let shift = request
        .shift
        .ok_or_else(|| AppError::InvalidInput("shift is required".to_string()))?;
    if !(1..=25).contains(&shift) {
        return Err(AppError::InvalidInput(format!(
            "shift must be in [1,25], got {}",
            shift
        )));
    }

    let output = cipher::caesar(&request.text, shift, request.mode);
    Ok(Json(json!({ "success": true, "data": { "output": output } })))
}

pub async fn vigenere_request(Json(request): Json<CipherRequest>) -> Result<Json<Value>, AppError> {
    let key = request.key.as_deref().unwrap_or("");
    let output = cipher::vigenere(&request.text, key, request.mode)?;
    Ok(Json(json!({ "success": true, "data": { "output": output } })))
}
