use std::collections::HashMap;

use sqlx::PgPool;

use crate::{
    catalog::{image, price, rating, visibility},
    error::Result,
    models::{ActiveDiscount, CatalogQuery, CatalogView, Locale, Product, ProductImage, Review,
        CURRENCY},
    queries::{category_queries, discount_queries, product_queries, review_queries},
};

/// Assembles the catalog view for a batch of products.
///
/// One products query, then one batched query each for discounts, images,
/// reviews and category slugs; never a per-product round trip. A failure in
/// images, reviews or the slug lookup fails the whole batch; only the
/// discount lookup degrades on its own.
pub async fn list_catalog(pool: &PgPool, params: &CatalogQuery) -> Result<Vec<CatalogView>> {
    let mut products = product_queries::list_products(pool, params).await?;
    products.retain(visibility::visible);

    if products.is_empty() {
        return Ok(Vec::new());
    }

    let product_ids: Vec<i32> = products.iter().map(|p| p.id).collect();

    let discounts = discount_queries::active_for_products(pool, &product_ids).await;
    let mut images = product_queries::images_for_products(pool, &product_ids).await?;
    let mut reviews = review_queries::for_products(pool, &product_ids).await?;

    let mut category_ids: Vec<i32> = products.iter().filter_map(|p| p.category_id).collect();
    category_ids.sort_unstable();
    category_ids.dedup();
    let slugs = category_queries::slugs_for(pool, &category_ids).await?;

    let views = products
        .into_iter()
        .map(|product| {
            let product_images = images.remove(&product.id).unwrap_or_default();
            let product_reviews = reviews.remove(&product.id).unwrap_or_default();
            let discount = discounts.get(&product.id);

            assemble_view(
                product,
                &product_images,
                &product_reviews,
                discount,
                &slugs,
                params.locale,
            )
        })
        .collect();

    Ok(views)
}

pub fn assemble_view(
    product: Product,
    images: &[ProductImage],
    reviews: &[Review],
    discount: Option<&ActiveDiscount>,
    category_slugs: &HashMap<i32, String>,
    locale: Option<Locale>,
) -> CatalogView {
    let name = product.localized_name().resolve(locale).to_string();
    let image_url = image::resolve_image_url(images, product.image_url.as_deref());
    let summary = rating::aggregate_reviews(reviews);
    let quote = price::compute_price(
        product.base_price,
        discount.map(|d| d.discount_percent),
    );

    CatalogView {
        id: product.id,
        name,
        slug: product.slug,
        base_price: product.base_price,
        price_cents: product.base_price,
        final_price: quote.final_price,
        savings: quote.savings,
        has_discount: quote.has_discount,
        image_url,
        category_id: product.category_id,
        category_slug: product
            .category_id
            .and_then(|id| category_slugs.get(&id).cloned()),
        currency: CURRENCY,
        discount_percent: discount.map(|d| d.discount_percent),
        promo_end_date: discount.and_then(|d| d.ends_at),
        sold_count: product.sold_count,
        rating: summary.rating,
        review_count: summary.review_count,
    }
}
