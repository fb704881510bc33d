use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    image::ProductImage,
    localized::{Locale, LocalizedText},
    variant::ProductVariant,
};

/// Fixed currency tag attached to every catalog view. Prices are never
/// converted; this is a label, not a computation input.
pub const CURRENCY: &str = "TND";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "product_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Inactive,
    Archived,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub name_ar: Option<String>,
    pub name_fr: Option<String>,
    pub slug: String,
    pub base_price: Decimal,
    pub category_id: Option<i32>,
    pub status: ProductStatus,
    pub sold_count: i32,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn localized_name(&self) -> LocalizedText {
        LocalizedText::new(&self.name)
            .with_override(Locale::Ar, self.name_ar.clone())
            .with_override(Locale::Fr, self.name_fr.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSort {
    BestSellers,
    Deals,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogQuery {
    pub sort: Option<CatalogSort>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub locale: Option<Locale>,
}

/// The denormalized product representation served by listing endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub base_price: Decimal,
    pub price_cents: Decimal,
    pub final_price: Decimal,
    pub savings: Decimal,
    pub has_discount: bool,
    pub image_url: String,
    pub category_id: Option<i32>,
    pub category_slug: Option<String>,
    pub currency: &'static str,
    pub discount_percent: Option<Decimal>,
    pub promo_end_date: Option<DateTime<Utc>>,
    pub sold_count: i32,
    pub rating: f64,
    pub review_count: i64,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub products: Vec<CatalogView>,
}

#[derive(Debug, Serialize)]
pub struct ProductDetailResponse {
    #[serde(flatten)]
    pub product: Product,
    pub variants: Vec<ProductVariant>,
    pub images: Vec<ProductImage>,
}
