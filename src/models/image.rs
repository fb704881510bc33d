use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProductImage {
    pub id: i32,
    pub product_id: i32,
    pub variant_id: Option<i32>,
    pub image_url: String,
    pub is_main: bool,
    pub position: i32,
}
