use sqlx::PgPool;

use crate::{
    catalog::visibility::{self, SQL_VISIBLE},
    error::Result,
    models::{Color, Size},
};

pub async fn get_colors(pool: &PgPool) -> Result<Vec<Color>> {
    let query = format!("SELECT * FROM colors WHERE {} ORDER BY name ASC", SQL_VISIBLE);

    let mut colors = sqlx::query_as::<_, Color>(&query).fetch_all(pool).await?;
    colors.retain(visibility::visible);

    Ok(colors)
}

pub async fn get_sizes(pool: &PgPool) -> Result<Vec<Size>> {
    let query = format!(
        "SELECT * FROM sizes WHERE {} ORDER BY position ASC, label ASC",
        SQL_VISIBLE
    );

    let mut sizes = sqlx::query_as::<_, Size>(&query).fetch_all(pool).await?;
    sizes.retain(visibility::visible);

    Ok(sizes)
}
