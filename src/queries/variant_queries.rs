use sqlx::PgPool;

use crate::{
    catalog::visibility::{self, SQL_VISIBLE},
    error::Result,
    models::ProductVariant,
};

pub async fn for_product(pool: &PgPool, product_id: i32) -> Result<Vec<ProductVariant>> {
    let query = format!(
        "SELECT * FROM product_variants WHERE product_id = $1 AND {} ORDER BY id ASC",
        SQL_VISIBLE
    );

    let mut variants = sqlx::query_as::<_, ProductVariant>(&query)
        .bind(product_id)
        .fetch_all(pool)
        .await?;
    variants.retain(visibility::visible);

    Ok(variants)
}
