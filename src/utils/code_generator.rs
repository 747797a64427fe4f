//! Short code generation.

use rand::Rng;

/// Number of characters in a generated short code.
pub const CODE_LENGTH: usize = 4;

/// Symbols a short code is drawn from.
pub const CODE_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a random short code.
///
/// Each of the [`CODE_LENGTH`] characters is drawn uniformly, with
/// replacement, from [`CODE_ALPHABET`]. Codes are not unique on their own;
/// callers check them against storage and retry on collision.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 4);
/// assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_uses_alphabet() {
        for _ in 0..1000 {
            let code = generate_code();
            assert!(
                code.bytes().all(|b| CODE_ALPHABET.contains(&b)),
                "unexpected character in {code}"
            );
        }
    }

    #[test]
    fn test_generate_code_has_no_lowercase() {
        let code = generate_code();
        assert_eq!(code, code.to_ascii_uppercase());
    }

    #[test]
    fn test_generate_code_varies() {
        let codes: HashSet<String> = (0..200).map(|_| generate_code()).collect();

        // 36^4 possible codes; 200 draws collapsing to a handful would mean a broken RNG.
        assert!(codes.len() > 150);
    }

    #[test]
    fn test_generate_code_covers_alphabet() {
        let mut seen = HashSet::new();
        for _ in 0..2000 {
            seen.extend(generate_code().bytes());
        }

        assert_eq!(seen.len(), CODE_ALPHABET.len());
    }
}
