use std::env;
use std::time::Duration;

pub struct Config {
    pub port: u16,
    /// Default timeout for probe requests; overridable per request.
    pub probe_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            probe_timeout: Duration::from_millis(
                env::var("PROBE_TIMEOUT_MS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(30_000),
            ),
        }
    }
}
