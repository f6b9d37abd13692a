//! Turning a plaintext, or a typed-in code list, into target scores.
//!
//! Each plaintext letter becomes its position in the alphabet (`a = 0`, ..., `z = 25`).
//! Those codes are only meaningful modulo [`ALPHABET_SIZE`], which is why the CLI builds
//! its index in modulo mode by default.

use crate::errors::InputError;
use crate::score_index::Score;

/// Number of plaintext letters, and the natural modulo base for their codes.
pub const ALPHABET_SIZE: u16 = 26;

/// Encode `plaintext` letter by letter. Uppercase letters are accepted.
///
/// # Errors
///
/// [`InputError::InvalidPlaintextChar`] for anything that is not an ASCII letter.
pub fn plaintext_to_targets(plaintext: &str) -> Result<Vec<Score>, InputError> {
    plaintext
        .chars()
        .map(|c| {
            let lower = c.to_ascii_lowercase();
            if lower.is_ascii_lowercase() {
                Ok(Score::from(lower as u8 - b'a') % Score::from(ALPHABET_SIZE))
            } else {
                Err(InputError::InvalidPlaintextChar { invalid_char: c })
            }
        })
        .collect()
}

/// Parse a comma-separated code list such as `"7, 4, 11"`.
///
/// Blank input gives an empty list.
///
/// # Errors
///
/// [`InputError::InvalidScoreCode`] for an entry that is not a non-negative integer.
pub fn parse_codes(input: &str) -> Result<Vec<Score>, InputError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    input
        .split(',')
        .map(str::trim)
        .map(|code| {
            code.parse::<Score>()
                .map_err(|_| InputError::InvalidScoreCode { input: code.to_string() })
        })
        .collect()
}
