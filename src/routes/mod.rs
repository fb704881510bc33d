mod admin;
mod catalog;
mod categories;
mod health;
mod promotions;

use axum::{
    routing::{get, put},
    Router,
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/products", get(catalog::list_products))
        .route("/products/{id}", get(catalog::get_product))
        .route("/promotions/active", get(promotions::active_promotion))
        .route("/categories", get(categories::list_categories))
        .route("/colors", get(categories::list_colors))
        .route("/sizes", get(categories::list_sizes))
        .route(
            "/admin/promotions",
            get(admin::list_promotions).post(admin::create_promotion),
        )
        .route(
            "/admin/promotions/{id}",
            put(admin::update_promotion).delete(admin::delete_promotion),
        )
        .route(
            "/admin/products/{id}/discount",
            put(admin::set_discount).delete(admin::remove_discount),
        )
}
