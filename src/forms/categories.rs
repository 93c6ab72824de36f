use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::{NewCategory, UpdateCategory};
use crate::forms::{NAME_MAX_LEN, exceeds_name_limit, sanitize_inline_text};

/// Result type returned by the category form helpers.
pub type CategoryFormResult<T> = Result<T, CategoryFormError>;

/// Errors that can occur while processing category payloads.
#[derive(Debug, Error)]
pub enum CategoryFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("category name cannot be empty")]
    EmptyName,
    /// The sanitized name is longer than `NAME_MAX_LEN` characters.
    #[error("category name cannot exceed {max} characters", max = NAME_MAX_LEN)]
    NameTooLong,
}

/// Body of `POST /api/categories`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCategoryForm {
    #[validate(length(min = 1))]
    pub name: String,
}

impl AddCategoryForm {
    /// Validates and sanitizes the payload into a domain `NewCategory`.
    pub fn into_new_category(self) -> CategoryFormResult<NewCategory> {
        self.validate()?;

        Ok(NewCategory::new(sanitized_name(&self.name)?))
    }
}

/// Body of `PUT /api/categories/{id}`. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditCategoryForm {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub name: Option<String>,
}

impl EditCategoryForm {
    /// Validates and sanitizes the payload into a domain `UpdateCategory`.
    pub fn into_update_category(self) -> CategoryFormResult<UpdateCategory> {
        self.validate()?;

        let mut update = UpdateCategory::new();

        if let Some(name) = self.name {
            update = update.name(sanitized_name(&name)?);
        }

        Ok(update)
    }
}

fn sanitized_name(name: &str) -> CategoryFormResult<String> {
    let sanitized = sanitize_inline_text(name);
    if sanitized.is_empty() {
        return Err(CategoryFormError::EmptyName);
    }
    if exceeds_name_limit(&sanitized) {
        return Err(CategoryFormError::NameTooLong);
    }
    Ok(sanitized)
}
