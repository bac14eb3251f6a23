//! Short code generation.
//!
//! Codes are drawn uniformly from the lowercase base-36 alphabet. Uniqueness
//! is not checked here; see
//! [`crate::application::services::LinkService`] for the retry loop.

use rand::Rng;

/// Lowercase base-36 digits.
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of a generated code.
pub const GENERATED_CODE_LENGTH: usize = 6;

/// Generates a random base-36 short code of [`GENERATED_CODE_LENGTH`] characters.
///
/// # Examples
///
/// ```
/// use link_shortener::utils::code_generator::generate_code;
///
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..GENERATED_CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        assert_eq!(generate_code().len(), GENERATED_CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_base36_characters() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()),
                "unexpected character in {code}"
            );
        }
    }

    #[test]
    fn test_generate_code_is_mostly_unique() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code()).collect();

        // 36^6 ≈ 2.2 billion; a handful of collisions in 1000 draws would be a bug.
        assert!(codes.len() >= 999);
    }
}
