pub mod dump;
pub mod report;
pub mod strings;
pub mod types;

pub use dump::hex_dump;
pub use report::inspect;
pub use strings::extract_strings;
pub use types::*;
