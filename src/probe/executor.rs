//! One-shot HTTP request execution for the probe.
//!
//! Builds a request from the user-supplied fields and relays a single
//! request/response cycle through `reqwest`. Framing, TLS, redirects and
//! decompression are the transport's concern; failures come back as typed
//! error codes inside the response envelope, never as panics.

use super::types::{ProbeData, ProbeRequest, ProbeResponse};
use crate::shared::status_text;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::str::FromStr;
use std::time::Duration;

/// Parses newline-separated `Key: Value` header lines.
///
/// Lines without a colon, or with an empty key or value after trimming,
/// are silently skipped.
pub fn parse_header_lines(raw: &str) -> Vec<(String, String)> {
    raw.lines()
        .filter_map(|line| {
            let (key, value) = line.split_once(':')?;
            let key = key.trim();
            let value = value.trim();
            if key.is_empty() || value.is_empty() {
                return None;
            }
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Renders a header map as newline-joined `Key: Value` lines in the
/// transport's iteration order.
pub fn render_headers(headers: &HeaderMap) -> String {
    headers
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value.to_str().unwrap_or("")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Executes one probe request.
pub async fn execute_probe(client: &reqwest::Client, request: ProbeRequest) -> ProbeResponse {
    // Validate the URL up front; the form accepts arbitrary text.
    let parsed_url = match url::Url::parse(&request.url) {
        Ok(u) => u,
        Err(e) => {
            return ProbeResponse::error(
                format!("Invalid URL: {}", e),
                "INVALID_URL".to_string(),
            )
        }
    };
    if parsed_url.host_str().is_none() {
        return ProbeResponse::error("URL has no host".to_string(), "INVALID_URL".to_string());
    }
    if !matches!(parsed_url.scheme(), "http" | "https") {
        return ProbeResponse::error(
            format!("Unsupported scheme: {}", parsed_url.scheme()),
            "INVALID_URL".to_string(),
        );
    }

    let method = match reqwest::Method::from_str(&request.method.to_uppercase()) {
        Ok(m) => m,
        Err(_) => {
            return ProbeResponse::error(
                format!("Invalid method: {}", request.method),
                "INVALID_METHOD".to_string(),
            )
        }
    };

    let mut headers = HeaderMap::new();
    for (key, value) in parse_header_lines(&request.headers) {
        // Names or values reqwest cannot represent are skipped.
        if let (Ok(name), Ok(val)) = (HeaderName::from_str(&key), HeaderValue::from_str(&value)) {
            headers.append(name, val);
        }
    }

    let is_get = method == reqwest::Method::GET;
    let mut builder = client.request(method, parsed_url).headers(headers);

    if let Some(ms) = request.timeout {
        builder = builder.timeout(Duration::from_millis(ms));
    }

    // Body only travels on non-GET requests, and only when non-blank.
    if !is_get {
        if let Some(body) = request.body.filter(|b| !b.trim().is_empty()) {
            builder = builder.body(body);
        }
    }

    let response = match builder.send().await {
        Ok(r) => r,
        Err(e) => {
            let code = if e.is_timeout() {
                "TIMEOUT"
            } else if e.is_connect() {
                "CONNECTION_FAILED"
            } else {
                "REQUEST_FAILED"
            };
            return ProbeResponse::error(format!("Request failed: {}", e), code.to_string());
        }
    };

    let status = response.status().as_u16();
    let headers = render_headers(response.headers());

    let body = match response.text().await {
        Ok(b) => b,
        Err(e) => {
            return ProbeResponse::error(
                format!("Failed to read body: {}", e),
                "BODY_READ_ERROR".to_string(),
            )
        }
    };

    ProbeResponse::success(ProbeData {
        status,
        status_text: status_text(status),
        headers,
        body,
    })
}
