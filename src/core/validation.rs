//! Input validation for the login form.
//!
//! Both fields must hold between 6 and 20 characters before the form may
//! be submitted. This gate is separate from credential checking and never
//! changes its result.

use std::ops::RangeInclusive;

use unicode_segmentation::UnicodeSegmentation;

use crate::core::constants::INPUT_LENGTH;
use crate::error::ValidationError;

/// Number of user-visible characters in `input`.
///
/// Counts extended grapheme clusters, so `"e\u{301}"` is one character and
/// `"пароль"` is six.
pub fn char_count(input: &str) -> usize {
    input.graphemes(true).count()
}

/// Check that `input` has a character count within `range`.
pub fn is_valid_length(input: &str, range: &RangeInclusive<usize>) -> bool {
    range.contains(&char_count(input))
}

/// Validate the identifier field.
///
/// # Errors
///
/// Returns `ValidationError::IdentifierLength` if the identifier is
/// shorter than 6 or longer than 20 characters.
pub fn validate_identifier(input: &str) -> Result<(), ValidationError> {
    if is_valid_length(input, &INPUT_LENGTH) {
        Ok(())
    } else {
        Err(ValidationError::IdentifierLength(char_count(input)))
    }
}

/// Validate the password field.
///
/// # Errors
///
/// Returns `ValidationError::SecretLength` if the password is shorter
/// than 6 or longer than 20 characters.
pub fn validate_secret(input: &str) -> Result<(), ValidationError> {
    if is_valid_length(input, &INPUT_LENGTH) {
        Ok(())
    } else {
        Err(ValidationError::SecretLength(char_count(input)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_bounds() {
        assert!(!is_valid_length("12345", &INPUT_LENGTH));
        assert!(is_valid_length("123456", &INPUT_LENGTH));
        assert!(is_valid_length(&"x".repeat(20), &INPUT_LENGTH));
        assert!(!is_valid_length(&"x".repeat(21), &INPUT_LENGTH));
        assert!(!is_valid_length("", &INPUT_LENGTH));
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        // 6 chars, 12 bytes
        assert!(is_valid_length("пароль", &INPUT_LENGTH));
        // 21 chars
        assert!(!is_valid_length(&"ж".repeat(21), &INPUT_LENGTH));
    }

    #[test]
    fn test_counts_graphemes_not_scalars() {
        // 11 visible characters, 22 scalar values
        let decomposed = "e\u{301}".repeat(11);
        assert_eq!(char_count(&decomposed), 11);
        assert!(is_valid_length(&decomposed, &INPUT_LENGTH));

        // 5 visible characters even though 10 scalars
        let short = "e\u{301}".repeat(5);
        assert!(!is_valid_length(&short, &INPUT_LENGTH));
        assert!(matches!(
            validate_secret(&short),
            Err(ValidationError::SecretLength(5))
        ));
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("4510123456").is_ok());
        assert!(matches!(
            validate_identifier("451"),
            Err(ValidationError::IdentifierLength(3))
        ));
    }

    #[test]
    fn test_validate_secret() {
        assert!(validate_secret("qwerty").is_ok());
        assert!(matches!(
            validate_secret(&"a".repeat(25)),
            Err(ValidationError::SecretLength(25))
        ));
    }
}
