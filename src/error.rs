//! Error types for the subcipher library.

use thiserror::Error;

/// A candidate key failed validation.
///
/// Produced by [`SubstitutionCipher::with_key`](crate::SubstitutionCipher::with_key),
/// [`SubstitutionCipher::set_key`](crate::SubstitutionCipher::set_key), and
/// [`Key::from_str`](std::str::FromStr). A valid key is 26 characters long
/// and, case-insensitively, contains every letter of the alphabet exactly
/// once. All other operations in the crate are total and cannot fail.
///
/// The engine reports this error once and never retries internally; whether
/// to re-ask the user is the caller's decision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid key: expected a 26-letter permutation of the alphabet")]
pub struct InvalidKeyError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_message() {
        let err = InvalidKeyError;
        assert_eq!(
            format!("{}", err),
            "invalid key: expected a 26-letter permutation of the alphabet"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(InvalidKeyError, InvalidKeyError.clone());
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&InvalidKeyError);
    }
}
