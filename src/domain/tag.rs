use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Domain representation of a reusable tag that can be attached to multiple products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// Unique identifier of the tag.
    pub id: i32,
    /// Human-readable name of the tag, if one was given.
    pub name: Option<String>,
}

/// Tag together with the products it is attached to through `product_tags`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TagWithProducts {
    #[serde(flatten)]
    pub tag: Tag,
    /// Products carrying this tag, each listed once.
    #[serde(rename = "Products")]
    pub products: Vec<Product>,
}

impl TagWithProducts {
    /// Wrap a tag with an empty product list.
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            products: Vec::new(),
        }
    }
}

/// Payload required to insert a new tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTag {
    /// Human-readable name of the tag.
    pub name: Option<String>,
}

impl NewTag {
    /// Construct a new tag payload with a trimmed name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into().trim().to_string();
        Self { name: Some(name) }
    }

    /// Construct a tag payload without a name.
    pub fn unnamed() -> Self {
        Self::default()
    }
}

/// Patch data applied when updating an existing tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTag {
    /// Updated name of the tag. `Some(None)` clears it.
    pub name: Option<Option<String>>,
}

impl UpdateTag {
    /// Returns `true` when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}
