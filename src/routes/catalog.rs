use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    catalog::visibility,
    error::{AppError, Result},
    models::{CatalogQuery, CatalogResponse, ProductDetailResponse},
    queries::{catalog_queries, product_queries, variant_queries},
    AppState,
};

/// Listing endpoints degrade to an empty set on store failure; the page
/// renders empty instead of erroring.
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<CatalogQuery>,
) -> Json<CatalogResponse> {
    let products = match catalog_queries::list_catalog(&state.db, &params).await {
        Ok(views) => views,
        Err(e) => {
            tracing::error!("Catalog listing failed, returning empty set: {}", e);
            Vec::new()
        }
    };

    Json(CatalogResponse { products })
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductDetailResponse>> {
    let product = product_queries::find_by_id(&state.db, id)
        .await?
        .filter(visibility::visible)
        .ok_or(AppError::NotFound("Product not found".to_string()))?;

    let variants = variant_queries::for_product(&state.db, id).await?;
    let images = product_queries::find_images_by_product_id(&state.db, id).await?;

    Ok(Json(ProductDetailResponse {
        product,
        variants,
        images,
    }))
}
