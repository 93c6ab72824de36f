use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::tag::{NewTag, UpdateTag};
use crate::forms::{NAME_MAX_LEN, deserialize_some, exceeds_name_limit, sanitize_inline_text};

/// Result type returned by the tag form helpers.
pub type TagFormResult<T> = Result<T, TagFormError>;

/// Errors that can occur while processing tag payloads.
#[derive(Debug, Error)]
pub enum TagFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("tag name cannot be empty")]
    EmptyName,
    /// The sanitized name is longer than `NAME_MAX_LEN` characters.
    #[error("tag name cannot exceed {max} characters", max = NAME_MAX_LEN)]
    NameTooLong,
}

/// Body of `POST /api/tags`. A tag may be created without a name.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddTagForm {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub name: Option<String>,
}

impl AddTagForm {
    /// Validates and sanitizes the payload into a domain `NewTag`.
    pub fn into_new_tag(self) -> TagFormResult<NewTag> {
        self.validate()?;

        match self.name {
            Some(name) => Ok(NewTag::new(sanitized_name(&name)?)),
            None => Ok(NewTag::unnamed()),
        }
    }
}

/// Body of `PUT /api/tags/{id}`. `null` clears the name, an absent field keeps it.
#[derive(Debug, Default, Deserialize)]
pub struct EditTagForm {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub name: Option<Option<String>>,
}

impl EditTagForm {
    /// Sanitizes the payload into a domain `UpdateTag`.
    pub fn into_update_tag(self) -> TagFormResult<UpdateTag> {
        let name = match self.name {
            Some(Some(name)) => Some(Some(sanitized_name(&name)?)),
            Some(None) => Some(None),
            None => None,
        };

        Ok(UpdateTag { name })
    }
}

fn sanitized_name(name: &str) -> TagFormResult<String> {
    let sanitized = sanitize_inline_text(name);
    if sanitized.is_empty() {
        return Err(TagFormError::EmptyName);
    }
    if exceeds_name_limit(&sanitized) {
        return Err(TagFormError::NameTooLong);
    }
    Ok(sanitized)
}
