use serde::Serialize;

/// One row of a formatted hex dump: up to 16 bytes starting at `offset`.
#[derive(Debug, Serialize)]
pub struct HexDumpLine {
    pub offset: usize,
    pub bytes: Vec<u8>,
    /// ASCII rendering of `bytes`: printable bytes literally, others as `.`.
    pub ascii: String,
}

/// A bounded hex dump of a byte buffer.
#[derive(Debug, Serialize)]
pub struct HexDump {
    pub lines: Vec<HexDumpLine>,
    /// Set when the buffer extends past the emitted rows.
    pub truncated: bool,
}

/// Printable strings extracted from a byte buffer.
#[derive(Debug, Serialize)]
pub struct StringDump {
    pub strings: Vec<String>,
    /// Set when more qualifying strings exist beyond the cap.
    pub truncated: bool,
}

/// Basic facts about an uploaded file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub name: Option<String>,
    /// Size in bytes.
    pub size: usize,
    /// Media type guessed from the file name; `application/octet-stream`
    /// when unknown.
    pub kind: String,
}

/// Everything the inspector derives from one uploaded buffer.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub file: FileReport,
    pub dump: HexDump,
    pub strings: StringDump,
}
