use std::collections::HashMap;

use sqlx::PgPool;

use crate::{
    catalog::visibility::{self, SQL_VISIBLE},
    error::Result,
    models::Category,
};

/// Batched id -> slug lookup for the catalog assembler: one query per
/// request, never one per product.
pub async fn slugs_for(pool: &PgPool, category_ids: &[i32]) -> Result<HashMap<i32, String>> {
    if category_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let categories =
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = ANY($1)")
            .bind(category_ids)
            .fetch_all(pool)
            .await?;

    let slugs = categories
        .into_iter()
        .filter(|c| visibility::visible(c))
        .map(|c| (c.id, c.slug))
        .collect();

    Ok(slugs)
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<Category>> {
    let query = format!(
        "SELECT * FROM categories WHERE {} ORDER BY name ASC",
        SQL_VISIBLE
    );

    let mut categories = sqlx::query_as::<_, Category>(&query).fetch_all(pool).await?;
    categories.retain(visibility::visible);

    Ok(categories)
}
