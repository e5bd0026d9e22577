use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::cipher::CipherError;
use crate::codec::CodecError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Cipher error: {0}")]
    Cipher(#[from] CipherError),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            AppError::InvalidInput(_) | AppError::Cipher(_) | AppError::Codec(_) => {
                (StatusCode::BAD_REQUEST, "INVALID_INPUT", self.to_string())
            }
        };

        let body = Json(json!({
            "success": false,
            "error": {
                "message": message,
                "code": error_code,
            }
        }));

        (status, body).into_response()
    }
}
