use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::product::Product as DomainProduct;
use crate::domain::tag::{
    NewTag as DomainNewTag, Tag as DomainTag, TagWithProducts, UpdateTag as DomainUpdateTag,
};
use crate::models::product::Product as DbProduct;
use crate::models::tag::{NewTag as DbNewTag, Tag as DbTag, UpdateTag as DbUpdateTag};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, TagReader, TagWriter};

impl TagReader for DieselRepository {
    fn list_tags(&self) -> RepositoryResult<Vec<TagWithProducts>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;

        let db_tags = tags::table
            .order(tags::id.asc())
            .load::<DbTag>(&mut conn)?;

        if db_tags.is_empty() {
            return Ok(Vec::new());
        }

        let tag_ids: Vec<i32> = db_tags.iter().map(|tag| tag.id).collect();
        let mut products = load_products_for_tags(&mut conn, &tag_ids)?;

        let tags = db_tags
            .into_iter()
            .map(|db_tag| {
                let mut view = TagWithProducts::new(db_tag.into());
                view.products = products.remove(&view.tag.id).unwrap_or_default();
                view
            })
            .collect();

        Ok(tags)
    }

    fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<TagWithProducts>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;

        let tag = tags::table.find(id).first::<DbTag>(&mut conn).optional()?;

        let Some(db_tag) = tag else {
            return Ok(None);
        };

        let mut view = TagWithProducts::new(db_tag.into());
        let mut products = load_products_for_tags(&mut conn, &[id])?;
        view.products = products.remove(&id).unwrap_or_default();

        Ok(Some(view))
    }
}

impl TagWriter for DieselRepository {
    fn create_tag(&self, new_tag: &DomainNewTag) -> RepositoryResult<DomainTag> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let insertable = DbNewTag::from(new_tag);

        let created = diesel::insert_into(tags::table)
            .values(&insertable)
            .get_result::<DbTag>(&mut conn)?;

        Ok(created.into())
    }

    fn update_tag(&self, tag_id: i32, updates: &DomainUpdateTag) -> RepositoryResult<DomainTag> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let target = tags::table.find(tag_id);

        let updated = if updates.is_empty() {
            target.first::<DbTag>(&mut conn)?
        } else {
            let db_updates = DbUpdateTag::from(updates);
            diesel::update(target)
                .set(&db_updates)
                .get_result::<DbTag>(&mut conn)?
        };

        Ok(updated.into())
    }

    fn delete_tag(&self, tag_id: i32) -> RepositoryResult<()> {
        use crate::schema::{product_tags, tags};

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            diesel::delete(product_tags::table.filter(product_tags::tag_id.eq(tag_id)))
                .execute(conn)?;

            let deleted = diesel::delete(tags::table.find(tag_id)).execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }
}

fn load_products_for_tags(
    conn: &mut SqliteConnection,
    tag_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DomainProduct>>> {
    use crate::schema::{product_tags, products};

    if tag_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = product_tags::table
        .inner_join(products::table)
        .filter(product_tags::tag_id.eq_any(tag_ids))
        .order(product_tags::id.asc())
        .select((product_tags::tag_id, DbProduct::as_select()))
        .load::<(i32, DbProduct)>(conn)?;

    let mut map: HashMap<i32, Vec<DomainProduct>> = HashMap::new();
    for (tag_id, product) in rows {
        let entry = map.entry(tag_id).or_default();
        if !entry.iter().any(|existing| existing.id == product.id) {
            entry.push(product.into());
        }
    }

    Ok(map)
}
