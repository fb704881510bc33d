use std::collections::HashMap;

use sqlx::PgPool;

use crate::{error::Result, models::Review};

pub async fn for_products(
    pool: &PgPool,
    product_ids: &[i32],
) -> Result<HashMap<i32, Vec<Review>>> {
    if product_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let reviews = sqlx::query_as::<_, Review>(
        "SELECT * FROM reviews WHERE product_id = ANY($1) ORDER BY created_at DESC",
    )
    .bind(product_ids)
    .fetch_all(pool)
    .await?;

    let mut reviews_map: HashMap<i32, Vec<Review>> = HashMap::new();
    for review in reviews {
        reviews_map.entry(review.product_id).or_default().push(review);
    }

    Ok(reviews_map)
}
