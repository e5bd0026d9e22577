use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::probe::{HttpProbeService, ProbeRequest, ProbeResponse, ProbeService};

pub async fn probe_request(
    State(service): State<Arc<HttpProbeService>>,
    Json(request): Json<ProbeRequest>,
) -> Json<ProbeResponse> {
    tracing::debug!(
        method = %request.method,
        url = %request.url,
        "Sending probe"
    );

    let response = service.execute(request).await;

    if response.success {
        tracing::debug!("Probe succeeded");
    } else if let Some(ref error) = response.error {
        tracing::warn!(code = %error.code, message = %error.message, "Probe failed");
    }

    Json(response)
}
