use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::category::Category as DomainCategory,
    domain::product::{
        NewProduct as DomainNewProduct, Product as DomainProduct, ProductDetails,
        UpdateProduct as DomainUpdateProduct,
    },
    domain::product_tag::{NewProductTag, ProductTag as DomainProductTag},
    domain::tag::Tag as DomainTag,
    models::category::Category as DbCategory,
    models::product::{
        NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
    },
    models::product_tag::{NewProductTag as DbNewProductTag, ProductTag as DbProductTag},
    models::tag::Tag as DbTag,
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{DieselRepository, ProductReader, ProductWriter},
};

impl ProductReader for DieselRepository {
    fn list_products(&self) -> RepositoryResult<Vec<ProductDetails>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let db_products = products::table
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?;

        if db_products.is_empty() {
            return Ok(Vec::new());
        }

        attach_relations(&mut conn, db_products)
    }

    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<ProductDetails>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .find(id)
            .first::<DbProduct>(&mut conn)
            .optional()?;

        match product {
            Some(db_product) => Ok(attach_relations(&mut conn, vec![db_product])?.pop()),
            None => Ok(None),
        }
    }

    fn list_product_tags(&self, product_id: i32) -> RepositoryResult<Vec<DomainProductTag>> {
        use crate::schema::product_tags;

        let mut conn = self.conn()?;
        let rows = product_tags::table
            .filter(product_tags::product_id.eq(product_id))
            .order(product_tags::id.asc())
            .load::<DbProductTag>(&mut conn)?;

        Ok(rows.into_iter().map(DomainProductTag::from).collect())
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        conn.transaction::<DomainProduct, RepositoryError, _>(|conn| {
            let db_new = DbNewProduct::from(new_product);

            let created = diesel::insert_into(products::table)
                .values(&db_new)
                .get_result::<DbProduct>(conn)?;

            insert_product_tags(conn, created.id, &new_product.tag_ids)?;

            Ok(created.into())
        })
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &DomainUpdateProduct,
    ) -> RepositoryResult<DomainProduct> {
        use crate::schema::{product_tags, products};

        let mut conn = self.conn()?;

        conn.transaction::<DomainProduct, RepositoryError, _>(|conn| {
            let target = products::table.find(product_id);

            let updated = if updates.has_no_column_changes() {
                target.first::<DbProduct>(conn)?
            } else {
                let db_updates = DbUpdateProduct::from(updates);
                diesel::update(target)
                    .set(&db_updates)
                    .get_result::<DbProduct>(conn)?
            };

            // An empty list leaves the existing associations untouched.
            if let Some(tag_ids) = updates.tag_ids.as_deref().filter(|ids| !ids.is_empty()) {
                diesel::delete(product_tags::table.filter(product_tags::product_id.eq(product_id)))
                    .execute(conn)?;
                insert_product_tags(conn, product_id, tag_ids)?;
            }

            Ok(updated.into())
        })
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        use crate::schema::{product_tags, products};

        let mut conn = self.conn()?;

        // Join rows go first: the product row is still referenced until they are gone.
        conn.transaction::<(), RepositoryError, _>(|conn| {
            diesel::delete(product_tags::table.filter(product_tags::product_id.eq(product_id)))
                .execute(conn)?;

            let deleted = diesel::delete(products::table.find(product_id)).execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }
}

fn insert_product_tags(
    conn: &mut SqliteConnection,
    product_id: i32,
    tag_ids: &[i32],
) -> RepositoryResult<()> {
    use crate::schema::product_tags;

    if tag_ids.is_empty() {
        return Ok(());
    }

    let rows: Vec<DbNewProductTag> = NewProductTag::for_product(product_id, tag_ids)
        .iter()
        .map(DbNewProductTag::from)
        .collect();

    diesel::insert_into(product_tags::table)
        .values(&rows)
        .execute(conn)?;

    Ok(())
}

fn attach_relations(
    conn: &mut SqliteConnection,
    db_products: Vec<DbProduct>,
) -> RepositoryResult<Vec<ProductDetails>> {
    let product_ids: Vec<i32> = db_products.iter().map(|product| product.id).collect();
    let mut category_ids: Vec<i32> = db_products
        .iter()
        .filter_map(|product| product.category_id)
        .collect();
    category_ids.sort_unstable();
    category_ids.dedup();

    let categories = load_categories(conn, &category_ids)?;
    let mut tags = load_tags_for_products(conn, &product_ids)?;

    let details = db_products
        .into_iter()
        .map(|db_product| {
            let mut details = ProductDetails::new(db_product.into());
            details.category = details
                .product
                .category_id
                .and_then(|category_id| categories.get(&category_id).cloned());
            details.tags = tags.remove(&details.product.id).unwrap_or_default();
            details
        })
        .collect();

    Ok(details)
}

fn load_categories(
    conn: &mut SqliteConnection,
    category_ids: &[i32],
) -> RepositoryResult<HashMap<i32, DomainCategory>> {
    use crate::schema::categories;

    if category_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = categories::table
        .filter(categories::id.eq_any(category_ids))
        .load::<DbCategory>(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| (row.id, DomainCategory::from(row)))
        .collect())
}

fn load_tags_for_products(
    conn: &mut SqliteConnection,
    product_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DomainTag>>> {
    use crate::schema::{product_tags, tags};

    if product_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = product_tags::table
        .inner_join(tags::table)
        .filter(product_tags::product_id.eq_any(product_ids))
        .order(product_tags::id.asc())
        .select((product_tags::product_id, DbTag::as_select()))
        .load::<(i32, DbTag)>(conn)?;

    let mut map: HashMap<i32, Vec<DomainTag>> = HashMap::new();
    for (product_id, tag) in rows {
        let entry = map.entry(product_id).or_default();
        if !entry.iter().any(|existing| existing.id == tag.id) {
            entry.push(tag.into());
        }
    }

    Ok(map)
}
