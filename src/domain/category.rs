use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Domain representation of a product category.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Category {
    /// Unique identifier of the category.
    pub id: i32,
    /// Human-readable name of the category.
    pub name: String,
}

/// Category together with every product that references it.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CategoryWithProducts {
    #[serde(flatten)]
    pub category: Category,
    /// Products whose `category_id` points at this category.
    #[serde(rename = "Products")]
    pub products: Vec<Product>,
}

impl CategoryWithProducts {
    /// Wrap a category with an empty product list.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            products: Vec::new(),
        }
    }
}

/// Payload required to insert a new category.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    /// Human-readable name of the category.
    pub name: String,
}

impl NewCategory {
    /// Build a new category payload with the supplied name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Patch data applied when updating an existing category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCategory {
    /// Optional name update.
    pub name: Option<String>,
}

impl UpdateCategory {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the category name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns `true` when the patch carries no column changes.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}
