//! Input validation utilities
//!
//! Custom rules plugged into `validator` derives on request DTOs.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

/// `#rgb` or `#rrggbb`
static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid color regex"));

/// Validate a tag display color
pub fn validate_color(color: &str) -> Result<(), ValidationError> {
    if HEX_COLOR.is_match(color) {
        Ok(())
    } else {
        Err(ValidationError::new("color").with_message("Color must be #rgb or #rrggbb".into()))
    }
}

/// Reject values that are empty once surrounding whitespace is removed
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank").with_message("Value cannot be blank".into()))
    } else {
        Ok(())
    }
}

/// Reject id lists that name the same id twice or contain non-positive ids
pub fn validate_id_list(ids: &[i64]) -> Result<(), ValidationError> {
    if ids.iter().any(|id| *id < 1) {
        return Err(ValidationError::new("id").with_message("Ids must be positive".into()));
    }
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    if sorted.len() != ids.len() {
        return Err(ValidationError::new("duplicate").with_message("Ids must be unique".into()));
    }
    Ok(())
}

/// Reject single-line text with surrounding whitespace or control characters.
/// Values are stored exactly as submitted, so they must already be clean.
pub fn validate_clean_text(value: &str) -> Result<(), ValidationError> {
    if value.trim() != value {
        return Err(ValidationError::new("whitespace")
            .with_message("Value cannot start or end with whitespace".into()));
    }
    if value.chars().any(char::is_control) {
        return Err(ValidationError::new("control")
            .with_message("Value cannot contain control characters".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_color() {
        assert!(validate_color("#fff").is_ok());
        assert!(validate_color("#1A2b3C").is_ok());
        assert!(validate_color("fff").is_err());
        assert!(validate_color("#ffff").is_err());
        assert!(validate_color("#ggg").is_err());
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Two Sum").is_ok());
        assert!(validate_not_blank(" \t ").is_err());
    }

    #[test]
    fn test_validate_id_list() {
        assert!(validate_id_list(&[]).is_ok());
        assert!(validate_id_list(&[3, 1, 2]).is_ok());
        assert!(validate_id_list(&[1, 1]).is_err());
        assert!(validate_id_list(&[0]).is_err());
    }

    #[test]
    fn test_validate_clean_text() {
        assert!(validate_clean_text("Two Sum").is_ok());
        assert!(validate_clean_text(" Two Sum ").is_err());
        assert!(validate_clean_text("Two\u{0}Sum").is_err());
        assert!(validate_clean_text("a\tb").is_err());
    }
}
