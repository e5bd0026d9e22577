//! Substitution cipher engine: Caesar and Vigenère.
//!
//! Both transforms operate on ASCII letters only; case is preserved and
//! every other character passes through unchanged.

use serde::Deserialize;
use thiserror::Error;

/// Direction of a cipher transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Encrypt,
    Decrypt,
}

/// Cipher engine errors.
#[derive(Debug, Error)]
pub enum CipherError {
    #[error("Vigenère key must not be empty")]
    EmptyKey,

    #[error("Vigenère key must contain only ASCII letters")]
    InvalidKey,
}

/// Incoming cipher request from the frontend.
#[derive(Debug, Deserialize)]
pub struct CipherRequest {
    pub text: String,
    pub key: Option<String>,
    /// Shift amount in [1,25]; required for Caesar, ignored for Vigenère.
    pub shift: Option<u8>,
    pub mode: Mode,
}

/// Applies a Caesar shift to `text`.
///
/// Decrypting with the same shift inverts encrypting: decryption shifts by
/// `26 - shift`, which is `-shift` mod 26.
pub fn caesar(text: &str, shift: u8, mode: Mode) -> String {
    let offset = match mode {
        Mode::Encrypt => shift % 26,
        Mode::Decrypt => (26 - shift % 26) % 26,
    };

    text.chars().map(|ch| shift_letter(ch, offset)).collect()
}

/// Applies the Vigenère cipher to `text` using a repeating `key`.
///
/// The key index advances on every input character, letters and non-letters
/// alike, so punctuation consumes key positions. Keys must be non-empty
/// ASCII letters; they are case-folded to uppercase.
pub fn vigenere(text: &str, key: &str, mode: Mode) -> Result<String, CipherError> {
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }
    if !key.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CipherError::InvalidKey);
    }

    let shifts: Vec<u8> = key
        .chars()
        .map(|c| c.to_ascii_uppercase() as u8 - b'A')
        .collect();

    let out = text
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            let shift = shifts[i % shifts.len()];
            let offset = match mode {
                Mode::Encrypt => shift,
                Mode::Decrypt => (26 - shift) % 26,
            };
            shift_letter(ch, offset)
        })
        .collect();

    Ok(out)
}

fn shift_letter(ch: char, offset: u8) -> char {
    if !ch.is_ascii_alphabetic() {
        return ch;
    }

    let base = if ch.is_ascii_uppercase() { b'A' } else { b'a' };
    let rotated = (ch as u8 - base + offset) % 26;
    (base + rotated) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caesar_known_vector() {
        assert_eq!(caesar("Attack at dawn", 3, Mode::Encrypt), "Dwwdfn dw gdzq");
        assert_eq!(caesar("Dwwdfn dw gdzq", 3, Mode::Decrypt), "Attack at dawn");
    }

    #[test]
    fn test_caesar_preserves_case_and_non_letters() {
        assert_eq!(caesar("Hello, World!", 1, Mode::Encrypt), "Ifmmp, Xpsme!");
        assert_eq!(caesar("xyz XYZ", 3, Mode::Encrypt), "abc ABC");
    }

    #[test]
    fn test_caesar_round_trip_all_shifts() {
        let plain = "The quick brown Fox jumps over 13 lazy dogs.";
        for shift in 1..=25 {
            let cipher = caesar(plain, shift, Mode::Encrypt);
            assert_eq!(caesar(&cipher, shift, Mode::Decrypt), plain);
        }
    }

    #[test]
    fn test_vigenere_known_vector() {
        // Classic textbook pair.
        let out = vigenere("ATTACKATDAWN", "LEMON", Mode::Encrypt).unwrap();
        assert_eq!(out, "LXFOPVEFRNHR");
        let back = vigenere(&out, "LEMON", Mode::Decrypt).unwrap();
        assert_eq!(back, "ATTACKATDAWN");
    }

    #[test]
    fn test_vigenere_key_index_advances_on_non_letters() {
        // Key "BC" = shifts [1, 2]. The space at position 2 consumes the
        // shift-1 slot, so 'c' gets shift 2 and 'd' gets shift 1.
        let out = vigenere("ab cd", "BC", Mode::Encrypt).unwrap();
        assert_eq!(out, "bd ee");
        assert_eq!(vigenere("bd ee", "BC", Mode::Decrypt).unwrap(), "ab cd");
    }

    #[test]
    fn test_vigenere_key_case_folded() {
        let upper = vigenere("attack", "LEMON", Mode::Encrypt).unwrap();
        let lower = vigenere("attack", "lemon", Mode::Encrypt).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_vigenere_round_trip_mixed_text() {
        let plain = "Meet me at 9, by the old mill!";
        let cipher = vigenere(plain, "Skeleton", Mode::Encrypt).unwrap();
        assert_eq!(vigenere(&cipher, "Skeleton", Mode::Decrypt).unwrap(), plain);
    }

    #[test]
    fn test_vigenere_rejects_bad_keys() {
        assert!(matches!(
            vigenere("text", "", Mode::Encrypt),
            Err(CipherError::EmptyKey)
        ));
        assert!(matches!(
            vigenere("text", "k3y", Mode::Encrypt),
            Err(CipherError::InvalidKey)
        ));
    }
}
