use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upstream writers have stored numbers, numeric strings and nulls in
/// `rating`, so the column stays JSON and validation happens at read time.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Review {
    pub id: i32,
    pub product_id: i32,
    pub rating: Option<serde_json::Value>,
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
}
