//! Input length checks and text normalization.

use crate::base::types::ClassifyError;

/// Reject inputs whose trimmed length exceeds `max` characters.
///
/// Must run before anything else looks at the input.
pub fn check_length(raw: &str, max: usize) -> Result<(), ClassifyError> {
    if raw.trim().chars().count() > max {
        return Err(ClassifyError::InputTooLong { max });
    }

    Ok(())
}

/// Trim, lowercase, and collapse every whitespace run into a single space.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  Fire \t\n  NOW  "), "fire now");
        assert_eq!(normalize("fire   now"), normalize("fire now"));
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t "), "");
    }

    #[test]
    fn test_check_length_boundary() {
        assert!(check_length(&"a".repeat(200), 200).is_ok());
        assert_eq!(check_length(&"a".repeat(201), 200), Err(ClassifyError::InputTooLong { max: 200 }));
    }

    #[test]
    fn test_check_length_ignores_surrounding_whitespace() {
        let padded = format!("   {}   ", "a".repeat(200));
        assert!(check_length(&padded, 200).is_ok());
    }

    #[test]
    fn test_check_length_counts_characters_not_bytes() {
        // Each of these is a single character but several bytes.
        assert!(check_length(&"🔥".repeat(200), 200).is_ok());
        assert!(check_length(&"🔥".repeat(201), 200).is_err());
    }
}
