use axum::{extract::State, Json};
use chrono::Utc;

use crate::{
    catalog::promotion::{select_promotion, should_display_banner},
    models::{PromotionBanner, PromotionBannerResponse},
    queries::promotion_queries,
    AppState,
};

/// Selects the store-wide banner for "now", then gates display on the
/// presence of an end date. An ongoing winner yields no banner.
pub async fn active_promotion(State(state): State<AppState>) -> Json<PromotionBannerResponse> {
    let promotions = match promotion_queries::get_all(&state.db).await {
        Ok(promotions) => promotions,
        Err(e) => {
            tracing::error!("Promotion fetch failed, suppressing banner: {}", e);
            Vec::new()
        }
    };

    let banner = select_promotion(Utc::now(), &promotions)
        .filter(|p| should_display_banner(p))
        .and_then(PromotionBanner::from_promotion);

    Json(PromotionBannerResponse { promotion: banner })
}
