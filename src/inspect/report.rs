//! Combined inspection report for an uploaded file.

use super::dump::hex_dump;
use super::strings::extract_strings;
use super::types::{FileReport, InspectReport};

/// Derives all inspector views from one byte buffer.
///
/// The media type is guessed from the supplied file name alone; content
/// sniffing is not attempted.
pub fn inspect(name: Option<&str>, data: &[u8]) -> InspectReport {
    let kind = name
        .map(|n| mime_guess::from_path(n).first_or_octet_stream().to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());

    InspectReport {
        file: FileReport {
            name: name.map(str::to_string),
            size: data.len(),
            kind,
        },
        dump: hex_dump(data),
        strings: extract_strings(data),
    }
}
