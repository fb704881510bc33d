use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::{json, Value};

use crate::{
    error::{AppError, Result},
    models::{Discount, DiscountRequest, Envelope, Promotion, PromotionRequest},
    queries::{admin_queries, product_queries, promotion_queries},
    AppState,
};

pub async fn list_promotions(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<Promotion>>>> {
    let promotions = promotion_queries::get_all(&state.db).await?;

    Ok(Json(Envelope::ok(promotions)))
}

pub async fn create_promotion(
    State(state): State<AppState>,
    Json(payload): Json<PromotionRequest>,
) -> Result<Json<Envelope<Promotion>>> {
    let title = payload
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::BadRequest("title is required".to_string()))?;

    let percent = payload
        .discount_percent
        .ok_or_else(|| AppError::BadRequest("discount_percent is required".to_string()))?;
    validate_percent(percent)?;
    validate_window(payload.starts_at, payload.ends_at)?;

    let req = PromotionRequest {
        title: Some(title),
        ..payload
    };

    let promotion = admin_queries::create_promotion(&state.db, &req).await?;

    Ok(Json(Envelope::ok(promotion)))
}

pub async fn update_promotion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<PromotionRequest>,
) -> Result<Json<Envelope<Promotion>>> {
    if let Some(percent) = payload.discount_percent {
        validate_percent(percent)?;
    }
    validate_window(payload.starts_at, payload.ends_at)?;

    let promotion = admin_queries::update_promotion(&state.db, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Promotion {} not found", id)))?;

    Ok(Json(Envelope::ok(promotion)))
}

pub async fn delete_promotion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Envelope<Value>>> {
    if !admin_queries::delete_promotion(&state.db, id).await? {
        return Err(AppError::NotFound(format!("Promotion {} not found", id)));
    }

    Ok(Json(Envelope::ok(json!({ "id": id }))))
}

pub async fn set_discount(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
    Json(payload): Json<DiscountRequest>,
) -> Result<Json<Envelope<Discount>>> {
    let percent = payload
        .discount_percent
        .ok_or_else(|| AppError::BadRequest("discount_percent is required".to_string()))?;
    validate_percent(percent)?;
    validate_window(payload.starts_at, payload.ends_at)?;

    if product_queries::find_by_id(&state.db, product_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Product {} not found",
            product_id
        )));
    }

    let discount = admin_queries::upsert_discount(&state.db, product_id, &payload).await?;

    Ok(Json(Envelope::ok(discount)))
}

pub async fn remove_discount(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> Result<Json<Envelope<Value>>> {
    if !admin_queries::delete_discount(&state.db, product_id).await? {
        return Err(AppError::NotFound(format!(
            "Product {} has no discount",
            product_id
        )));
    }

    Ok(Json(Envelope::ok(json!({ "product_id": product_id }))))
}

fn validate_percent(percent: Decimal) -> Result<()> {
    if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
        return Err(AppError::BadRequest(
            "discount_percent must be between 0 and 100".to_string(),
        ));
    }

    Ok(())
}

fn validate_window(
    starts_at: Option<DateTime<Utc>>,
    ends_at: Option<DateTime<Utc>>,
) -> Result<()> {
    if let (Some(start), Some(end)) = (starts_at, ends_at) {
        if end <= start {
            return Err(AppError::BadRequest(
                "ends_at must be after starts_at".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal_macros::dec;

    #[test]
    fn percent_must_stay_within_bounds() {
        assert!(validate_percent(dec!(0)).is_ok());
        assert!(validate_percent(dec!(100)).is_ok());
        assert!(validate_percent(dec!(100.5)).is_err());
        assert!(validate_percent(dec!(-1)).is_err());
    }

    #[test]
    fn window_must_end_after_it_starts() {
        let now = Utc::now();

        assert!(validate_window(Some(now), Some(now + Duration::hours(1))).is_ok());
        assert!(validate_window(Some(now), Some(now)).is_err());
        assert!(validate_window(Some(now), Some(now - Duration::hours(1))).is_err());
        assert!(validate_window(None, Some(now)).is_ok());
        assert!(validate_window(Some(now), None).is_ok());
    }
}
