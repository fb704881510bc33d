use crate::models::ProductImage;

pub const PLACEHOLDER_IMAGE_URL: &str = "/assets/product-placeholder.webp";

/// Picks the representative image URL for a product.
///
/// Order: the first row flagged as main, else the row with the smallest
/// position, else the legacy single-image column, else the placeholder.
pub fn resolve_image_url(images: &[ProductImage], legacy_url: Option<&str>) -> String {
    if let Some(main) = images.iter().find(|img| img.is_main) {
        return main.image_url.clone();
    }

    if let Some(first) = images.iter().min_by_key(|img| img.position) {
        return first.image_url.clone();
    }

    match legacy_url {
        Some(url) => url.to_string(),
        None => PLACEHOLDER_IMAGE_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: i32, url: &str, is_main: bool, position: i32) -> ProductImage {
        ProductImage {
            id,
            product_id: 1,
            variant_id: None,
            image_url: url.to_string(),
            is_main,
            position,
        }
    }

    #[test]
    fn main_image_wins_regardless_of_position_or_order() {
        let images = vec![
            image(1, "/img/side.webp", false, 0),
            image(2, "/img/back.webp", false, 1),
            image(3, "/img/front.webp", true, 9),
        ];

        assert_eq!(resolve_image_url(&images, None), "/img/front.webp");
    }

    #[test]
    fn smallest_position_wins_without_a_main_image() {
        let images = vec![
            image(1, "/img/c.webp", false, 2),
            image(2, "/img/a.webp", false, 0),
            image(3, "/img/b.webp", false, 1),
        ];

        assert_eq!(resolve_image_url(&images, None), "/img/a.webp");
    }

    #[test]
    fn legacy_url_is_used_when_no_rows_exist() {
        assert_eq!(
            resolve_image_url(&[], Some("/legacy/old.jpg")),
            "/legacy/old.jpg"
        );
    }

    #[test]
    fn placeholder_is_the_last_resort() {
        assert_eq!(resolve_image_url(&[], None), PLACEHOLDER_IMAGE_URL);
    }
}
