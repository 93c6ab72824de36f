use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, CategoryWithProducts, NewCategory, UpdateCategory};
use crate::domain::product::{NewProduct, Product, ProductDetails, UpdateProduct};
use crate::domain::product_tag::ProductTag;
use crate::domain::tag::{NewTag, Tag, TagWithProducts, UpdateTag};
use crate::repository::errors::RepositoryResult;

pub mod category;
pub mod errors;
pub mod product;
pub mod tag;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over category records.
pub trait CategoryReader {
    fn list_categories(&self) -> RepositoryResult<Vec<CategoryWithProducts>>;
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<CategoryWithProducts>>;
}

/// Write operations over category records.
pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    fn update_category(
        &self,
        category_id: i32,
        updates: &UpdateCategory,
    ) -> RepositoryResult<Category>;
    /// Deletes the category and detaches its products.
    fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over tag records.
pub trait TagReader {
    fn list_tags(&self) -> RepositoryResult<Vec<TagWithProducts>>;
    fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<TagWithProducts>>;
}

/// Write operations over tag records.
pub trait TagWriter {
    fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
    fn update_tag(&self, tag_id: i32, updates: &UpdateTag) -> RepositoryResult<Tag>;
    /// Deletes the tag together with its product associations.
    fn delete_tag(&self, tag_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn list_products(&self) -> RepositoryResult<Vec<ProductDetails>>;
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<ProductDetails>>;
    /// Raw join rows for one product, in insertion order.
    fn list_product_tags(&self, product_id: i32) -> RepositoryResult<Vec<ProductTag>>;
}

/// Write operations over product records.
pub trait ProductWriter {
    /// Inserts the product and one join row per entry of `new_product.tag_ids`.
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    /// Applies the column patch and, when `updates.tag_ids` is set, replaces all join rows.
    fn update_product(&self, product_id: i32, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    /// Removes the join rows of the product, then the product itself.
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}
