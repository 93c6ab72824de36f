use diesel::prelude::*;

use crate::domain::tag::{NewTag as DomainNewTag, Tag as DomainTag, UpdateTag as DomainUpdateTag};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::tags)]
pub struct Tag {
    pub id: i32,
    pub name: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::tags)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewTag<'a> {
    pub name: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::tags)]
pub struct UpdateTag<'a> {
    pub name: Option<Option<&'a str>>,
}

impl From<Tag> for DomainTag {
    fn from(value: Tag) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

impl<'a> From<&'a DomainNewTag> for NewTag<'a> {
    fn from(value: &'a DomainNewTag) -> Self {
        Self {
            name: value.name.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateTag> for UpdateTag<'a> {
    fn from(value: &'a DomainUpdateTag) -> Self {
        Self {
            name: value.name.as_ref().map(Option::as_deref),
        }
    }
}
