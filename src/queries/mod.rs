pub mod admin_queries;
pub mod attribute_queries;
pub mod catalog_queries;
pub mod category_queries;
pub mod discount_queries;
pub mod product_queries;
pub mod promotion_queries;
pub mod review_queries;
pub mod variant_queries;
