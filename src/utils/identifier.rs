//! Redirect identifier generation.

use rand::Rng;

use crate::domain::entities::REDIRECT_IDENTIFIER_LENGTH;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a random alphanumeric redirect identifier.
///
/// Ten characters over a 62-symbol alphabet give roughly 59 bits of entropy.
/// Uniqueness is not guaranteed here; the database constraint is the source of
/// truth and callers regenerate on conflict.
pub fn generate_identifier() -> String {
    let mut rng = rand::rng();

    (0..REDIRECT_IDENTIFIER_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identifier_length() {
        assert_eq!(generate_identifier().len(), REDIRECT_IDENTIFIER_LENGTH);
    }

    #[test]
    fn test_identifier_is_alphanumeric() {
        let id = generate_identifier();
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()), "{id}");
    }

    #[test]
    fn test_identifiers_are_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_identifier()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
