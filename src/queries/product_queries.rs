use std::collections::HashMap;

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    catalog::visibility::SQL_PRODUCT_VISIBLE,
    error::Result,
    models::{CatalogQuery, CatalogSort, Product, ProductImage},
};

const DEFAULT_PAGE_SIZE: i64 = 12;
const MAX_PAGE_SIZE: i64 = 60;

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

/// Listing fetch for the catalog assembler. The ordering requested by the
/// caller is preserved all the way to the response.
pub async fn list_products(pool: &PgPool, params: &CatalogQuery) -> Result<Vec<Product>> {
    let sort = params.sort.unwrap_or(CatalogSort::BestSellers);

    let mut query: QueryBuilder<Postgres> = match sort {
        CatalogSort::BestSellers => {
            let mut q = QueryBuilder::new("SELECT * FROM products WHERE ");
            q.push(SQL_PRODUCT_VISIBLE);
            q.push(" ORDER BY sold_count DESC, id DESC");
            q
        }
        CatalogSort::Deals => {
            // most recently discounted first
            let mut q = QueryBuilder::new(
                "SELECT p.* FROM products p \
                 JOIN product_discounts d ON d.product_id = p.id AND d.active = true \
                 WHERE p.",
            );
            q.push(SQL_PRODUCT_VISIBLE);
            q.push(" ORDER BY d.created_at DESC, p.id DESC");
            q
        }
    };

    let limit = params.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    query.push(" LIMIT ");
    query.push_bind(limit);

    if let Some(offset) = params.offset {
        query.push(" OFFSET ");
        query.push_bind(offset);
    }

    let products = query.build_query_as::<Product>().fetch_all(pool).await?;

    Ok(products)
}

pub async fn images_for_products(
    pool: &PgPool,
    product_ids: &[i32],
) -> Result<HashMap<i32, Vec<ProductImage>>> {
    if product_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let images = sqlx::query_as::<_, ProductImage>(
        "SELECT * FROM product_images
         WHERE product_id = ANY($1)
         ORDER BY product_id, is_main DESC, position ASC",
    )
    .bind(product_ids)
    .fetch_all(pool)
    .await?;

    let mut images_map: HashMap<i32, Vec<ProductImage>> = HashMap::new();
    for image in images {
        images_map.entry(image.product_id).or_default().push(image);
    }

    Ok(images_map)
}

pub async fn find_images_by_product_id(pool: &PgPool, id: i32) -> Result<Vec<ProductImage>> {
    let images = sqlx::query_as::<_, ProductImage>(
        "SELECT * FROM product_images
         WHERE product_id = $1
         ORDER BY is_main DESC, position ASC",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(images)
}
