//! Printable-string extraction over an arbitrary byte buffer.

use super::dump::is_printable;
use super::types::StringDump;

/// Minimum run length worth reporting.
const MIN_RUN: usize = 4;

/// Cap on the number of reported strings.
const MAX_STRINGS: usize = 100;

/// Scans `data` left to right, collecting runs of printable bytes.
///
/// A run is reported once it is at least 4 characters long; a non-printable
/// byte or the end of the buffer flushes the current run. At most 100
/// strings are reported, with `truncated` set when more exist.
pub fn extract_strings(data: &[u8]) -> StringDump {
    let mut strings = Vec::new();
    let mut truncated = false;
    let mut run = String::new();

    for &byte in data {
        if is_printable(byte) {
            run.push(byte as char);
            continue;
        }

        if run.len() >= MIN_RUN {
            if strings.len() == MAX_STRINGS {
                truncated = true;
                run.clear();
                break;
            }
            strings.push(std::mem::take(&mut run));
        } else {
            run.clear();
        }
    }

    if run.len() >= MIN_RUN {
        if strings.len() == MAX_STRINGS {
            truncated = true;
        } else {
            strings.push(run);
        }
    }

    StringDump { strings, truncated }
}
