//! Tag request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::MAX_TAG_NAME_LENGTH,
    utils::validation::{validate_clean_text, validate_color},
};

/// Create tag request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTagRequest {
    #[validate(
        length(min = 1, max = MAX_TAG_NAME_LENGTH),
        custom(function = "validate_clean_text")
    )]
    pub name: String,

    #[validate(custom(function = "validate_color"))]
    pub color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_is_optional() {
        let request = CreateTagRequest {
            name: "graph".to_string(),
            color: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_padded_name_is_rejected() {
        let request = CreateTagRequest {
            name: "graph ".to_string(),
            color: None,
        };
        assert!(request.validate().unwrap_err().field_errors().contains_key("name"));
    }

    #[test]
    fn test_rejects_malformed_color() {
        let request = CreateTagRequest {
            name: "graph".to_string(),
            color: Some("blue".to_string()),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("color"));
    }
}
