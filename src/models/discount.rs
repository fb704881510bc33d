use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Discount {
    pub product_id: i32,
    pub discount_percent: Decimal,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Projection of a discount row as the catalog assembler consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveDiscount {
    pub discount_percent: Decimal,
    pub ends_at: Option<DateTime<Utc>>,
}

impl From<Discount> for ActiveDiscount {
    fn from(discount: Discount) -> Self {
        Self {
            discount_percent: discount.discount_percent,
            ends_at: discount.ends_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DiscountRequest {
    pub discount_percent: Option<Decimal>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub active: Option<bool>,
}
