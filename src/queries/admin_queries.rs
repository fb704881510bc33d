use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Discount, DiscountRequest, Promotion, PromotionRequest},
};

pub async fn create_promotion(pool: &PgPool, req: &PromotionRequest) -> Result<Promotion> {
    let promotion = sqlx::query_as::<_, Promotion>(
        r#"
        INSERT INTO promotions (title, subtitle, discount_percent, starts_at, ends_at, active)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(&req.title)
    .bind(&req.subtitle)
    .bind(req.discount_percent)
    .bind(req.starts_at)
    .bind(req.ends_at)
    .bind(req.active.unwrap_or(true))
    .fetch_one(pool)
    .await?;

    Ok(promotion)
}

pub async fn update_promotion(
    pool: &PgPool,
    id: i32,
    req: &PromotionRequest,
) -> Result<Option<Promotion>> {
    let promotion = sqlx::query_as::<_, Promotion>(
        r#"
        UPDATE promotions
        SET
            title = COALESCE($1, title),
            subtitle = COALESCE($2, subtitle),
            discount_percent = COALESCE($3, discount_percent),
            starts_at = COALESCE($4, starts_at),
            ends_at = COALESCE($5, ends_at),
            active = COALESCE($6, active)
        WHERE id = $7
        RETURNING *
        "#,
    )
    .bind(&req.title)
    .bind(&req.subtitle)
    .bind(req.discount_percent)
    .bind(req.starts_at)
    .bind(req.ends_at)
    .bind(req.active)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(promotion)
}

pub async fn delete_promotion(pool: &PgPool, id: i32) -> Result<bool> {
    let result = sqlx::query("DELETE FROM promotions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// One discount row per product; a second write replaces the first.
pub async fn upsert_discount(
    pool: &PgPool,
    product_id: i32,
    req: &DiscountRequest,
) -> Result<Discount> {
    let discount = sqlx::query_as::<_, Discount>(
        r#"
        INSERT INTO product_discounts (product_id, discount_percent, starts_at, ends_at, active)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (product_id) DO UPDATE
        SET
            discount_percent = EXCLUDED.discount_percent,
            starts_at = EXCLUDED.starts_at,
            ends_at = EXCLUDED.ends_at,
            active = EXCLUDED.active,
            created_at = NOW()
        RETURNING *
        "#,
    )
    .bind(product_id)
    .bind(req.discount_percent)
    .bind(req.starts_at)
    .bind(req.ends_at)
    .bind(req.active.unwrap_or(true))
    .fetch_one(pool)
    .await?;

    Ok(discount)
}

pub async fn delete_discount(pool: &PgPool, product_id: i32) -> Result<bool> {
    let result = sqlx::query("DELETE FROM product_discounts WHERE product_id = $1")
        .bind(product_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
