pub mod cipher;
pub mod codec;
pub mod health;
pub mod inspect;
pub mod probe;

use crate::probe::HttpProbeService;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Assembles the `/api` router over the given probe service.
pub fn api_router(probe_service: Arc<HttpProbeService>) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/cipher/caesar", post(cipher::caesar_request))
        .route("/api/cipher/vigenere", post(cipher::vigenere_request))
        .route("/api/codec", post(codec::codec_request))
        .route("/api/inspect", post(inspect::inspect_request))
        .route("/api/probe", post(probe::probe_request))
        .with_state(probe_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use std::time::Duration;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let service = HttpProbeService::arc(Duration::from_secs(5)).unwrap();
        api_router(service)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_caesar_route() {
        let payload = serde_json::json!({
            "text": "Attack at dawn",
            "shift": 3,
            "mode": "encrypt",
        });
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/cipher/caesar")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["output"], "Dwwdfn dw gdzq");
    }

    #[tokio::test]
    async fn test_caesar_route_requires_shift_in_range() {
        let payload = serde_json::json!({
            "text": "abc",
            "shift": 26,
            "mode": "encrypt",
        });
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/cipher/caesar")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_codec_route_rejects_bad_base64() {
        let payload = serde_json::json!({
            "payload": "not-valid-base64!!",
            "direction": "decode",
            "scheme": "base64",
        });
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/codec")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_inspect_route() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/inspect?name=capture.txt")
                    .body(Body::from(&b"Hi\x00!!!!"[..]))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["file"]["size"], 7);
        assert_eq!(body["data"]["file"]["kind"], "text/plain");
        assert_eq!(body["data"]["strings"]["strings"][0], "!!!!");
    }
}
