use serde::{Deserialize, Serialize};

/// Incoming probe request from the frontend.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeRequest {
    pub method: String,
    pub url: String,
    /// Raw header form text: newline-separated `Key: Value` lines.
    #[serde(default)]
    pub headers: String,
    pub body: Option<String>,
    /// Timeout in milliseconds
    pub timeout: Option<u64>,
}

/// Successful probe response data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeData {
    pub status: u16,
    pub status_text: String,
    /// Newline-joined `Key: Value` rendering in transport iteration order.
    pub headers: String,
    pub body: String,
}

/// Error data for failed probes
#[derive(Debug, Clone, Serialize)]
pub struct ErrorData {
    pub message: String,
    pub code: String,
}

/// Full probe response envelope
#[derive(Debug, Clone, Serialize)]
pub struct ProbeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ProbeData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorData>,
}

impl ProbeResponse {
    pub fn success(data: ProbeData) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: String, code: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorData { message, code }),
        }
    }
}
