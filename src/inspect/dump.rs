//! Hex dump formatting over an arbitrary byte buffer.

use super::types::{HexDump, HexDumpLine};
use std::fmt;

/// Bytes per dump row.
const ROW_WIDTH: usize = 16;

/// Last row offset emitted before the dump is cut off.
const OFFSET_LIMIT: usize = 256;

pub(crate) fn is_printable(byte: u8) -> bool {
    (32..=126).contains(&byte)
}

/// Formats `data` into rows of 16 bytes.
///
/// Rows are emitted while the offset stays at or below 256, bounding the
/// dump at 17 rows regardless of input size; `truncated` is set when bytes
/// remain beyond the emitted rows.
pub fn hex_dump(data: &[u8]) -> HexDump {
    let mut lines = Vec::new();
    let mut truncated = false;
    let mut offset = 0;

    while offset < data.len() {
        if offset > OFFSET_LIMIT {
            truncated = true;
            break;
        }

        let end = usize::min(offset + ROW_WIDTH, data.len());
        let bytes = data[offset..end].to_vec();
        let ascii = bytes
            .iter()
            .map(|&b| if is_printable(b) { b as char } else { '.' })
            .collect();

        lines.push(HexDumpLine {
            offset,
            bytes,
            ascii,
        });
        offset += ROW_WIDTH;
    }

    HexDump { lines, truncated }
}

impl fmt::Display for HexDumpLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}  ", self.offset)?;

        for col in 0..ROW_WIDTH {
            match self.bytes.get(col) {
                Some(b) => write!(f, "{:02x} ", b)?,
                None => write!(f, "   ")?,
            }
            // Extra gap between the two 8-byte halves.
            if col == 7 {
                write!(f, " ")?;
            }
        }

        write!(f, " |")?;
        for col in 0..ROW_WIDTH {
            match self.bytes.get(col) {
                Some(&b) if is_printable(b) => write!(f, "{}", b as char)?,
                Some(_) => write!(f, ".")?,
                None => write!(f, " ")?,
            }
        }
        write!(f, "|")
    }
}

impl fmt::Display for HexDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        if self.truncated {
            writeln!(f, "...")?;
        }
        Ok(())
    }
}
