use diesel::prelude::*;

use crate::domain::category::{
    Category as DomainCategory, NewCategory as DomainNewCategory,
    UpdateCategory as DomainUpdateCategory,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory<'a> {
    pub name: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::categories)]
pub struct UpdateCategory<'a> {
    pub name: Option<&'a str>,
}

impl From<Category> for DomainCategory {
    fn from(value: Category) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

impl<'a> From<&'a DomainNewCategory> for NewCategory<'a> {
    fn from(value: &'a DomainNewCategory) -> Self {
        Self {
            name: value.name.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateCategory> for UpdateCategory<'a> {
    fn from(value: &'a DomainUpdateCategory) -> Self {
        Self {
            name: value.name.as_deref(),
        }
    }
}
