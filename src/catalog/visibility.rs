use chrono::{DateTime, Utc};

use crate::models::{Category, Color, Product, ProductStatus, ProductVariant, Size};

/// Rows that can be hidden from public reads.
///
/// A row is visible when it carries no soft-delete timestamp and, for types
/// with an extra listing condition (products), that condition holds. Every
/// public listing path goes through [`visible`]; the SQL fragments below are
/// the query-level equivalents and must stay in sync with the predicate.
pub trait Visible {
    fn deleted_at(&self) -> Option<DateTime<Utc>>;

    fn is_listed(&self) -> bool {
        true
    }
}

pub fn visible<T: Visible>(row: &T) -> bool {
    row.deleted_at().is_none() && row.is_listed()
}

pub const SQL_VISIBLE: &str = "deleted_at IS NULL";
pub const SQL_PRODUCT_VISIBLE: &str = "deleted_at IS NULL AND status = 'active'";

impl Visible for Product {
    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn is_listed(&self) -> bool {
        self.status == ProductStatus::Active
    }
}

impl Visible for ProductVariant {
    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

impl Visible for Category {
    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

impl Visible for Color {
    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

impl Visible for Size {
    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn test_product(status: ProductStatus, deleted_at: Option<DateTime<Utc>>) -> Product {
        Product {
            id: 1,
            name: "Olive oil 1L".to_string(),
            name_ar: None,
            name_fr: None,
            slug: "olive-oil-1l".to_string(),
            base_price: dec!(25),
            category_id: None,
            status,
            sold_count: 0,
            image_url: None,
            created_at: Utc::now(),
            deleted_at,
        }
    }

    fn test_variant(id: i32, deleted_at: Option<DateTime<Utc>>) -> ProductVariant {
        ProductVariant {
            id,
            product_id: 1,
            size_id: None,
            color_id: None,
            price_override: None,
            stock: 3,
            is_available: true,
            created_at: Utc::now(),
            deleted_at,
        }
    }

    #[test]
    fn active_product_is_visible() {
        assert!(visible(&test_product(ProductStatus::Active, None)));
    }

    #[test]
    fn inactive_and_archived_products_are_hidden() {
        assert!(!visible(&test_product(ProductStatus::Inactive, None)));
        assert!(!visible(&test_product(ProductStatus::Archived, None)));
    }

    #[test]
    fn soft_deleted_product_is_hidden_even_when_active() {
        assert!(!visible(&test_product(
            ProductStatus::Active,
            Some(Utc::now())
        )));
    }

    #[test]
    fn deleted_variant_is_hidden_while_sibling_stays_visible() {
        let deleted = test_variant(1, Some(Utc::now()));
        let sibling = test_variant(2, None);

        let listed: Vec<i32> = [deleted, sibling]
            .iter()
            .filter(|v| visible(*v))
            .map(|v| v.id)
            .collect();

        assert_eq!(listed, vec![2]);
    }
}
