pub mod executor;
pub mod service;
pub mod types;

pub use executor::{execute_probe, parse_header_lines, render_headers};
pub use service::{HttpProbeService, InflightSlot, ProbeService};
pub use types::*;
