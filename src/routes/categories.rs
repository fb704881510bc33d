use axum::{extract::State, Json};

use crate::{
    models::{Category, Color, Size},
    queries::{attribute_queries, category_queries},
    AppState,
};

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    let categories = match category_queries::get_all(&state.db).await {
        Ok(categories) => categories,
        Err(e) => {
            tracing::error!("Category listing failed, returning empty set: {}", e);
            Vec::new()
        }
    };

    Json(categories)
}

pub async fn list_colors(State(state): State<AppState>) -> Json<Vec<Color>> {
    let colors = match attribute_queries::get_colors(&state.db).await {
        Ok(colors) => colors,
        Err(e) => {
            tracing::error!("Color listing failed, returning empty set: {}", e);
            Vec::new()
        }
    };

    Json(colors)
}

pub async fn list_sizes(State(state): State<AppState>) -> Json<Vec<Size>> {
    let sizes = match attribute_queries::get_sizes(&state.db).await {
        Ok(sizes) => sizes,
        Err(e) => {
            tracing::error!("Size listing failed, returning empty set: {}", e);
            Vec::new()
        }
    };

    Json(sizes)
}
