use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, UpdateProduct as DomainUpdateProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub stock: i32,
    pub category_id: Option<i32>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub price: f64,
    pub stock: i32,
    pub category_id: Option<i32>,
}

/// Only `Some` fields are written; `category_id: Some(None)` stores NULL.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct UpdateProduct<'a> {
    pub name: Option<&'a str>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub category_id: Option<Option<i32>>,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            name: value.name,
            price: value.price,
            stock: value.stock,
            category_id: value.category_id,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            name: value.name.as_str(),
            price: value.price,
            stock: value.stock,
            category_id: value.category_id,
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(value: &'a DomainUpdateProduct) -> Self {
        Self {
            name: value.name.as_deref(),
            price: value.price,
            stock: value.stock,
            category_id: value.category_id,
        }
    }
}
