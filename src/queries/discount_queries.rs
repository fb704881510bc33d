use std::collections::HashMap;

use sqlx::PgPool;

use crate::models::{ActiveDiscount, Discount};

/// Maps a batch of product ids to their active discount row.
///
/// Filters on `active` only; the time window is surfaced through `ends_at`
/// and left to the caller. An empty input returns an empty map without
/// querying, and a store failure degrades to an empty map as well, so
/// listing pages render without discounts rather than erroring.
pub async fn active_for_products(
    pool: &PgPool,
    product_ids: &[i32],
) -> HashMap<i32, ActiveDiscount> {
    if product_ids.is_empty() {
        return HashMap::new();
    }

    let rows = sqlx::query_as::<_, Discount>(
        "SELECT * FROM product_discounts
         WHERE active = true AND product_id = ANY($1)",
    )
    .bind(product_ids)
    .fetch_all(pool)
    .await;

    match rows {
        Ok(rows) => rows
            .into_iter()
            .map(|discount| (discount.product_id, discount.into()))
            .collect(),
        Err(e) => {
            tracing::warn!("Discount lookup failed, serving without discounts: {}", e);
            HashMap::new()
        }
    }
}
