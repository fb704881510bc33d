use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Promotion {
    pub id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub discount_percent: Decimal,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Banner payload for a selected promotion. Only promotions with an end date
/// are ever rendered, so `ends_at` is not optional here.
#[derive(Debug, Clone, Serialize)]
pub struct PromotionBanner {
    pub id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub discount_percent: Decimal,
    pub ends_at: DateTime<Utc>,
}

impl PromotionBanner {
    pub fn from_promotion(promotion: &Promotion) -> Option<Self> {
        promotion.ends_at.map(|ends_at| Self {
            id: promotion.id,
            title: promotion.title.clone(),
            subtitle: promotion.subtitle.clone(),
            discount_percent: promotion.discount_percent,
            ends_at,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct PromotionBannerResponse {
    pub promotion: Option<PromotionBanner>,
}

#[derive(Debug, Deserialize)]
pub struct PromotionRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub discount_percent: Option<Decimal>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub active: Option<bool>,
}
