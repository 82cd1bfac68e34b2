//! Category request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{MAX_CATEGORY_DESCRIPTION_LENGTH, MAX_CATEGORY_NAME_LENGTH},
    utils::validation::validate_clean_text,
};

/// Create category request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(
        length(min = 1, max = MAX_CATEGORY_NAME_LENGTH),
        custom(function = "validate_clean_text")
    )]
    pub name: String,

    #[validate(length(max = MAX_CATEGORY_DESCRIPTION_LENGTH))]
    pub description: Option<String>,
}

/// Update category request; absent fields are left unchanged
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(
        length(min = 1, max = MAX_CATEGORY_NAME_LENGTH),
        custom(function = "validate_clean_text")
    )]
    pub name: Option<String>,

    #[validate(length(max = MAX_CATEGORY_DESCRIPTION_LENGTH))]
    pub description: Option<String>,
}

/// List categories query parameters
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCategoriesQuery {
    /// Attach progress counters to every category
    #[serde(default)]
    pub include_stats: bool,
}

/// Category detail query parameters
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCategoryQuery {
    /// Attach a page of the category's problems
    #[serde(default)]
    pub include_problems: bool,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_length_bounds() {
        let ok = CreateCategoryRequest {
            name: "a".repeat(50),
            description: None,
        };
        assert!(ok.validate().is_ok());

        let too_long = CreateCategoryRequest {
            name: "a".repeat(51),
            description: Some("d".repeat(201)),
        };
        let errors = too_long.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("description"));
    }

    #[test]
    fn test_padded_name_is_rejected() {
        let request = CreateCategoryRequest {
            name: " Arrays".to_string(),
            description: None,
        };
        assert!(request.validate().unwrap_err().field_errors().contains_key("name"));
    }

    #[test]
    fn test_empty_update_is_valid() {
        assert!(UpdateCategoryRequest::default().validate().is_ok());
    }
}
