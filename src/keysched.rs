// VigCrack Key Expander
// Cycles a candidate key into per-letter shift values

use crate::types::CrackError;

/// Expand a candidate key into a shift sequence of exactly `target_len` entries
///
/// Each entry is the 1-based alphabet position of the next key letter
/// ('a'/'A' → 1 … 'z'/'Z' → 26), cycling through the key in order.
/// `target_len` is the number of *alphabetic* characters to be decoded, not the
/// raw ciphertext length; non-alphabetic ciphertext characters consume no key
/// position. Non-alphabetic characters in the key itself are ignored.
///
/// # Errors
/// `CrackError::InvalidKey` if the key holds no alphabetic character at all.
///
/// # Example
/// ```
/// # use vigcrack::expand_key;
/// let shifts = expand_key("abc", 7).unwrap();
/// assert_eq!(shifts, vec![1, 2, 3, 1, 2, 3, 1]);
/// ```
pub fn expand_key(key: &str, target_len: usize) -> Result<Vec<u8>, CrackError> {
    let letters: Vec<u8> = key
        .bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_lowercase() - b'a' + 1)
        .collect();

    if letters.is_empty() {
        return Err(CrackError::InvalidKey {
            key: key.to_string(),
        });
    }

    Ok((0..target_len).map(|i| letters[i % letters.len()]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_through_key() {
        let shifts = expand_key("abc", 7).unwrap();
        assert_eq!(shifts, vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn test_shift_values_are_one_based() {
        assert_eq!(expand_key("a", 1).unwrap(), vec![1]);
        assert_eq!(expand_key("z", 1).unwrap(), vec![26]);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(expand_key("AbC", 3).unwrap(), expand_key("abc", 3).unwrap());
    }

    #[test]
    fn test_exact_target_length() {
        for len in [0usize, 1, 5, 26, 100] {
            assert_eq!(expand_key("python", len).unwrap().len(), len);
        }
    }

    #[test]
    fn test_entry_equals_single_cycle_entry() {
        let key = "lazy";
        let expanded = expand_key(key, 17).unwrap();
        let one_cycle = expand_key(key, key.len()).unwrap();

        for (i, shift) in expanded.iter().enumerate() {
            assert_eq!(*shift, one_cycle[i % key.len()]);
        }
    }

    #[test]
    fn test_non_alphabetic_key_characters_ignored() {
        assert_eq!(expand_key("a-b c", 4).unwrap(), vec![1, 2, 3, 1]);
    }

    #[test]
    fn test_key_without_letters_rejected() {
        assert!(matches!(
            expand_key("1234", 5),
            Err(CrackError::InvalidKey { .. })
        ));
        assert!(matches!(
            expand_key("", 5),
            Err(CrackError::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_zero_target_length() {
        assert!(expand_key("python", 0).unwrap().is_empty());
    }
}
