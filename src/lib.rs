pub mod cipher;
pub mod codec;
pub mod config;
pub mod error;
pub mod inspect;
pub mod probe;
pub mod routes;
pub mod shared;

pub use config::Config;
pub use probe::{execute_probe, HttpProbeService, ProbeRequest, ProbeResponse};
