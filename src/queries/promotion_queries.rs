use sqlx::PgPool;

use crate::{error::Result, models::Promotion};

/// The selector works over the full table; filtering happens in
/// `catalog::promotion`.
pub async fn get_all(pool: &PgPool) -> Result<Vec<Promotion>> {
    let promotions =
        sqlx::query_as::<_, Promotion>("SELECT * FROM promotions ORDER BY created_at DESC")
            .fetch_all(pool)
            .await?;

    Ok(promotions)
}
