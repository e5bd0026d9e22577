//! Byte codec engine: Base64, hex and percent-encoding transforms.
//!
//! Each scheme converts between text and a byte-oriented representation.
//! Failures are reported as typed [`CodecError`] values so callers can
//! branch on them instead of pattern-matching message strings.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use thiserror::Error;

/// Direction of a codec transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encode,
    Decode,
}

/// Supported codec schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    Base64,
    Hex,
    UrlPercent,
}

/// Codec engine errors. All variants are malformed-input conditions.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid hex payload: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("invalid percent-encoding at byte {0}")]
    Percent(usize),

    #[error("decoded bytes are not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Incoming codec request from the frontend.
#[derive(Debug, Deserialize)]
pub struct CodecRequest {
    pub payload: String,
    pub direction: Direction,
    pub scheme: Scheme,
}

impl CodecRequest {
    /// Dispatches to the scheme's transform.
    pub fn apply(&self) -> Result<String, CodecError> {
        match self.scheme {
            Scheme::Base64 => base64_transform(&self.payload, self.direction),
            Scheme::Hex => hex_transform(&self.payload, self.direction),
            Scheme::UrlPercent => url_percent(&self.payload, self.direction),
        }
    }
}

/// Base64-encodes or decodes `payload` with the standard alphabet.
///
/// Decoding trims surrounding whitespace first; non-alphabet characters or
/// bad padding are errors.
pub fn base64_transform(payload: &str, direction: Direction) -> Result<String, CodecError> {
    match direction {
        Direction::Encode => Ok(STANDARD.encode(payload.as_bytes())),
        Direction::Decode => {
            let bytes = STANDARD.decode(payload.trim())?;
            Ok(String::from_utf8(bytes)?)
        }
    }
}

/// Hex-encodes or decodes `payload`.
///
/// Encoding renders each UTF-8 byte as two lowercase hex digits, space
/// separated. Decoding strips all whitespace, requires an even number of
/// digits, and rebuilds text from the byte values.
pub fn hex_transform(payload: &str, direction: Direction) -> Result<String, CodecError> {
    match direction {
        Direction::Encode => Ok(payload
            .bytes()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(" ")),
        Direction::Decode => {
            let stripped: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
            let bytes = hex::decode(&stripped)?;
            Ok(String::from_utf8(bytes)?)
        }
    }
}

/// Percent-encodes or decodes `payload`.
///
/// Encoding keeps the RFC 3986 unreserved set literal and escapes every
/// other byte. Decoding is strict: a `%` not followed by two hex digits is
/// an error rather than being passed through.
pub fn url_percent(payload: &str, direction: Direction) -> Result<String, CodecError> {
    match direction {
        Direction::Encode => Ok(urlencoding::encode(payload).into_owned()),
        Direction::Decode => percent_decode(payload),
    }
}

fn percent_decode(payload: &str) -> Result<String, CodecError> {
    let bytes = payload.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hi = bytes.get(i + 1).and_then(|b| (*b as char).to_digit(16));
                let lo = bytes.get(i + 2).and_then(|b| (*b as char).to_digit(16));
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi * 16 + lo) as u8);
                        i += 3;
                    }
                    _ => return Err(CodecError::Percent(i)),
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    Ok(String::from_utf8(out)?)
}
