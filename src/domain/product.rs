use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::tag::Tag;

/// Domain representation of a product in the catalog.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Unit price, never negative.
    pub price: f64,
    /// Units in stock, never negative.
    pub stock: i32,
    /// Optional owning category.
    pub category_id: Option<i32>,
}

/// Product together with its category and tags.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ProductDetails {
    #[serde(flatten)]
    pub product: Product,
    /// Category referenced by `category_id`, or `null` when unset.
    #[serde(rename = "Category")]
    pub category: Option<Category>,
    /// Tags attached through `product_tags`.
    #[serde(rename = "Tags")]
    pub tags: Vec<Tag>,
}

impl ProductDetails {
    /// Wrap a product with no category and no tags loaded yet.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            category: None,
            tags: Vec::new(),
        }
    }
}

/// Payload required to insert a new product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Human-readable name of the product.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Units in stock.
    pub stock: i32,
    /// Optional owning category.
    pub category_id: Option<i32>,
    /// Tags attached in the same transaction as the insert. Duplicates are kept.
    pub tag_ids: Vec<i32>,
}

impl NewProduct {
    /// Build a new product payload with no stock, category or tags.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            stock: 0,
            category_id: None,
            tag_ids: Vec::new(),
        }
    }

    /// Set the initial stock level.
    pub fn with_stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }

    /// Attach the product to a category.
    pub fn with_category_id(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Attach tags to the product.
    pub fn with_tag_ids(mut self, tag_ids: Vec<i32>) -> Self {
        self.tag_ids = tag_ids;
        self
    }
}

/// Patch data applied when updating an existing product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProduct {
    /// Optional name update.
    pub name: Option<String>,
    /// Optional price update.
    pub price: Option<f64>,
    /// Optional stock update.
    pub stock: Option<i32>,
    /// Optional category update; `Some(None)` detaches the product.
    pub category_id: Option<Option<i32>>,
    /// When non-empty, replaces every tag association of the product.
    pub tag_ids: Option<Vec<i32>>,
}

impl UpdateProduct {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the product name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Update the product price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Update the stock level.
    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Update the category, using `None` to detach the product.
    pub fn category_id(mut self, category_id: Option<i32>) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Replace the tag set of the product. An empty list keeps the current tags.
    pub fn tag_ids(mut self, tag_ids: Vec<i32>) -> Self {
        self.tag_ids = Some(tag_ids);
        self
    }

    /// Returns `true` when no product column would change.
    ///
    /// A patch that only replaces tags is still "empty" in this sense.
    pub fn has_no_column_changes(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.stock.is_none()
            && self.category_id.is_none()
    }
}
