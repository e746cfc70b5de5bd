// VigCrack Vigenère Transform
// Case-preserving decipher/encipher over ASCII letters

use crate::keysched::expand_key;
use crate::types::CrackError;

/// Decipher Vigenère-encrypted text with the given key
///
/// The key is expanded over the count of alphabetic characters in the
/// ciphertext; a separate cursor into that expansion advances only when an
/// alphabetic character is decoded. Every letter is shifted back by its key
/// letter with 26-letter wraparound inside its own case; everything else is
/// copied through unchanged.
///
/// Pure function of its inputs: output length, character case, and the
/// positions of non-alphabetic characters are preserved exactly.
///
/// # Errors
/// `CrackError::InvalidKey` if the key holds no alphabetic character.
///
/// # Example
/// ```
/// # use vigcrack::decipher;
/// let plain = decipher("Ifx xivri uycjc dhe xhbnl vjrg ral znow wvu.", "python").unwrap();
/// assert_eq!(plain, "The quick brown fox jumps over the lazy dog.");
/// ```
pub fn decipher(ciphertext: &str, key: &str) -> Result<String, CrackError> {
    transform(ciphertext, key, Direction::Decipher)
}

/// Encipher plaintext with the given key
///
/// Exact inverse of [`decipher`] under the same key.
pub fn encipher(plaintext: &str, key: &str) -> Result<String, CrackError> {
    transform(plaintext, key, Direction::Encipher)
}

#[derive(Clone, Copy)]
enum Direction {
    Encipher,
    Decipher,
}

fn transform(text: &str, key: &str, direction: Direction) -> Result<String, CrackError> {
    let alpha_count = text.chars().filter(char::is_ascii_alphabetic).count();
    let shifts = expand_key(key, alpha_count)?;

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for ch in text.chars() {
        if ch.is_ascii_alphabetic() {
            // Shift is 1-based ('a' = 1), so the net displacement is shift - 1.
            let offset = u32::from(shifts[cursor] - 1);
            cursor += 1;

            let base = if ch.is_ascii_uppercase() { 'A' } else { 'a' } as u32;
            let pos = ch as u32 - base;
            let shifted = match direction {
                Direction::Encipher => (pos + offset) % 26,
                Direction::Decipher => (pos + 26 - offset) % 26,
            };

            // base + shifted stays within ASCII letters, so the unwrap is safe;
            // fall back to the original character rather than panic.
            out.push(char::from_u32(base + shifted).unwrap_or(ch));
        } else {
            out.push(ch);
        }
    }

    Ok(out)
}
