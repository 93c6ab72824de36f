use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::forms::{NAME_MAX_LEN, deserialize_some, exceeds_name_limit, sanitize_inline_text};

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product payloads.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("product name cannot be empty")]
    EmptyName,
    /// The sanitized name is longer than `NAME_MAX_LEN` characters.
    #[error("product name cannot exceed {max} characters", max = NAME_MAX_LEN)]
    NameTooLong,
    /// A price that is not a finite number.
    #[error("price must be a finite number")]
    InvalidPrice,
    /// Identifiers must be positive.
    #[error("invalid {field} `{value}`")]
    InvalidIdentifier { field: &'static str, value: i32 },
}

/// Body of `POST /api/products`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddProductForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub category_id: Option<i32>,
    /// Tags to attach; repeated identifiers produce repeated associations.
    #[serde(default, rename = "tagIds")]
    pub tag_ids: Vec<i32>,
}

impl AddProductForm {
    /// Validates and sanitizes the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> ProductFormResult<NewProduct> {
        self.validate()?;

        let name = sanitized_name(&self.name)?;
        ensure_finite(self.price)?;
        ensure_tag_ids(&self.tag_ids)?;

        let mut new_product = NewProduct::new(name, self.price)
            .with_stock(self.stock)
            .with_tag_ids(self.tag_ids);

        if let Some(category_id) = self.category_id {
            new_product = new_product.with_category_id(ensure_positive("category", category_id)?);
        }

        Ok(new_product)
    }
}

/// Body of `PUT /api/products/{id}`. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditProductForm {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub name: Option<String>,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub price: Option<f64>,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub stock: Option<i32>,
    /// `null` detaches the product from its category.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub category_id: Option<Option<i32>>,
    /// When non-empty, replaces the whole tag set of the product.
    #[serde(default, rename = "tagIds")]
    pub tag_ids: Option<Vec<i32>>,
}

impl EditProductForm {
    /// Validates and sanitizes the payload into a domain `UpdateProduct`.
    pub fn into_update_product(self) -> ProductFormResult<UpdateProduct> {
        self.validate()?;

        let EditProductForm {
            name,
            price,
            stock,
            category_id,
            tag_ids,
        } = self;

        let mut update = UpdateProduct::new();

        if let Some(name) = name {
            update = update.name(sanitized_name(&name)?);
        }

        if let Some(price) = price {
            ensure_finite(price)?;
            update = update.price(price);
        }

        if let Some(stock) = stock {
            update = update.stock(stock);
        }

        if let Some(category_id) = category_id {
            let category_id = category_id
                .map(|id| ensure_positive("category", id))
                .transpose()?;
            update = update.category_id(category_id);
        }

        if let Some(tag_ids) = tag_ids {
            ensure_tag_ids(&tag_ids)?;
            update = update.tag_ids(tag_ids);
        }

        Ok(update)
    }
}

fn sanitized_name(name: &str) -> ProductFormResult<String> {
    let sanitized = sanitize_inline_text(name);
    if sanitized.is_empty() {
        return Err(ProductFormError::EmptyName);
    }
    if exceeds_name_limit(&sanitized) {
        return Err(ProductFormError::NameTooLong);
    }
    Ok(sanitized)
}

fn ensure_finite(price: f64) -> ProductFormResult<()> {
    if price.is_finite() {
        Ok(())
    } else {
        Err(ProductFormError::InvalidPrice)
    }
}

fn ensure_positive(field: &'static str, value: i32) -> ProductFormResult<i32> {
    if value > 0 {
        Ok(value)
    } else {
        Err(ProductFormError::InvalidIdentifier { field, value })
    }
}

fn ensure_tag_ids(tag_ids: &[i32]) -> ProductFormResult<()> {
    for tag_id in tag_ids {
        ensure_positive("tag", *tag_id)?;
    }
    Ok(())
}
