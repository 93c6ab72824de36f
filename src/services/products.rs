use crate::domain::product::{Product, ProductDetails};
use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Loads every product with its category and tags.
pub fn load_products<R>(repo: &R) -> ServiceResult<Vec<ProductDetails>>
where
    R: ProductReader + ?Sized,
{
    repo.list_products().map_err(ServiceError::from)
}

/// Loads a single product with its category and tags.
pub fn load_product<R>(repo: &R, product_id: i32) -> ServiceResult<ProductDetails>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a product and attaches the requested tags.
///
/// The returned product is the inserted row; tags are not re-read.
pub fn create_product<R>(repo: &R, form: AddProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let new_product = form
        .into_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_product(&new_product)
        .map_err(ServiceError::from)
}

/// Updates a product; a supplied tag list replaces the current associations.
pub fn modify_product<R>(
    repo: &R,
    product_id: i32,
    form: EditProductForm,
) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let update = form
        .into_update_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_product(product_id, &update)
        .map_err(ServiceError::from)
}

/// Deletes a product after clearing its tag associations.
pub fn remove_product<R>(repo: &R, product_id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.delete_product(product_id)
        .map_err(ServiceError::from)
}
