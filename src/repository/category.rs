use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::category::{
    Category as DomainCategory, CategoryWithProducts, NewCategory as DomainNewCategory,
    UpdateCategory as DomainUpdateCategory,
};
use crate::domain::product::Product as DomainProduct;
use crate::models::category::{
    Category as DbCategory, NewCategory as DbNewCategory, UpdateCategory as DbUpdateCategory,
};
use crate::models::product::Product as DbProduct;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<CategoryWithProducts>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let db_categories = categories::table
            .order(categories::id.asc())
            .load::<DbCategory>(&mut conn)?;

        if db_categories.is_empty() {
            return Ok(Vec::new());
        }

        let category_ids: Vec<i32> = db_categories.iter().map(|category| category.id).collect();
        let mut products = load_products_for_categories(&mut conn, &category_ids)?;

        let categories = db_categories
            .into_iter()
            .map(|db_category| {
                let mut view = CategoryWithProducts::new(db_category.into());
                view.products = products.remove(&view.category.id).unwrap_or_default();
                view
            })
            .collect();

        Ok(categories)
    }

    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<CategoryWithProducts>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .find(id)
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let Some(db_category) = category else {
            return Ok(None);
        };

        let mut view = CategoryWithProducts::new(db_category.into());
        let mut products = load_products_for_categories(&mut conn, &[id])?;
        view.products = products.remove(&id).unwrap_or_default();

        Ok(Some(view))
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(
        &self,
        new_category: &DomainNewCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let insertable = DbNewCategory::from(new_category);

        let created = diesel::insert_into(categories::table)
            .values(&insertable)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(created.into())
    }

    fn update_category(
        &self,
        category_id: i32,
        updates: &DomainUpdateCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let target = categories::table.find(category_id);

        // An empty changeset is rejected by diesel; treat it as a no-op on an existing row.
        let updated = if updates.is_empty() {
            target.first::<DbCategory>(&mut conn)?
        } else {
            let db_updates = DbUpdateCategory::from(updates);
            diesel::update(target)
                .set(&db_updates)
                .get_result::<DbCategory>(&mut conn)?
        };

        Ok(updated.into())
    }

    fn delete_category(&self, category_id: i32) -> RepositoryResult<()> {
        use crate::schema::{categories, products};

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            diesel::update(products::table.filter(products::category_id.eq(Some(category_id))))
                .set(products::category_id.eq::<Option<i32>>(None))
                .execute(conn)?;

            let deleted = diesel::delete(categories::table.find(category_id)).execute(conn)?;

            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }
}

fn load_products_for_categories(
    conn: &mut SqliteConnection,
    category_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DomainProduct>>> {
    use crate::schema::products;

    if category_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = products::table
        .filter(products::category_id.eq_any(category_ids))
        .order(products::id.asc())
        .load::<DbProduct>(conn)?;

    let mut map: HashMap<i32, Vec<DomainProduct>> = HashMap::new();
    for row in rows {
        if let Some(category_id) = row.category_id {
            map.entry(category_id).or_default().push(row.into());
        }
    }

    Ok(map)
}
