//! Probe service abstraction layer.
//!
//! Provides a trait-based abstraction for probe execution, enabling
//! dependency injection and easier testing, plus the single-slot in-flight
//! guard that serializes probes per service instance.

use super::executor::execute_probe;
use super::types::{ProbeRequest, ProbeResponse};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Semaphore, SemaphorePermit};

/// Trait for services that execute probe requests.
pub trait ProbeService: Send + Sync {
    /// Executes a probe request and returns the response.
    ///
    /// # Arguments
    ///
    /// * `request` - The probe request to execute
    ///
    /// # Returns
    ///
    /// A future that resolves to a `ProbeResponse`.
    fn execute(
        &self,
        request: ProbeRequest,
    ) -> Pin<Box<dyn Future<Output = ProbeResponse> + Send + '_>>;
}

/// Single-slot admission guard.
///
/// The probe is single-shot by design: while one request is outstanding,
/// further requests are rejected rather than queued.
#[derive(Debug)]
pub struct InflightSlot {
    slot: Semaphore,
}

impl InflightSlot {
    pub fn new() -> Self {
        Self {
            slot: Semaphore::new(1),
        }
    }

    /// Claims the slot, or returns `None` when it is already held.
    /// The slot frees itself when the permit is dropped.
    pub fn try_acquire(&self) -> Option<SemaphorePermit<'_>> {
        self.slot.try_acquire().ok()
    }
}

impl Default for InflightSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Default HTTP probe service implementation.
///
/// Holds the `reqwest` client the probes travel through and the in-flight
/// slot that rejects concurrent calls.
pub struct HttpProbeService {
    client: reqwest::Client,
    slot: InflightSlot,
}

impl HttpProbeService {
    /// Creates a new `HttpProbeService` with the given default timeout.
    pub fn new(default_timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(default_timeout)
            .build()?;

        Ok(Self {
            client,
            slot: InflightSlot::new(),
        })
    }

    /// Creates a new `HttpProbeService` wrapped in an `Arc`.
    pub fn arc(default_timeout: Duration) -> Result<Arc<Self>, reqwest::Error> {
        Ok(Arc::new(Self::new(default_timeout)?))
    }
}

impl ProbeService for HttpProbeService {
    fn execute(
        &self,
        request: ProbeRequest,
    ) -> Pin<Box<dyn Future<Output = ProbeResponse> + Send + '_>> {
        Box::pin(async move {
            let Some(_permit) = self.slot.try_acquire() else {
                return ProbeResponse::error(
                    "A probe is already in flight".to_string(),
                    "PROBE_BUSY".to_string(),
                );
            };
            execute_probe(&self.client, request).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockProbeService {
        response: ProbeResponse,
    }

    impl ProbeService for MockProbeService {
        fn execute(
            &self,
            _request: ProbeRequest,
        ) -> Pin<Box<dyn Future<Output = ProbeResponse> + Send + '_>> {
            let response = self.response.clone();
            Box::pin(async move { response })
        }
    }

    fn request() -> ProbeRequest {
        ProbeRequest {
            method: "GET".to_string(),
            url: "https://example.com".to_string(),
            headers: String::new(),
            body: None,
            timeout: None,
        }
    }

    #[tokio::test]
    async fn test_mock_probe_service() {
        let service = MockProbeService {
            response: ProbeResponse::error("Test error".to_string(), "TEST".to_string()),
        };

        let response = service.execute(request()).await;
        assert!(!response.success);
        assert_eq!(response.error.unwrap().code, "TEST");
    }

    #[test]
    fn test_inflight_slot_admits_one_holder() {
        let slot = InflightSlot::new();

        let permit = slot.try_acquire();
        assert!(permit.is_some());
        assert!(slot.try_acquire().is_none());

        drop(permit);
        assert!(slot.try_acquire().is_some());
    }

    #[tokio::test]
    async fn test_busy_service_rejects_second_probe() {
        let service = HttpProbeService::new(Duration::from_secs(5)).unwrap();

        let _held = service.slot.try_acquire().unwrap();
        let response = service.execute(request()).await;

        assert!(!response.success);
        assert_eq!(response.error.unwrap().code, "PROBE_BUSY");
    }
}
