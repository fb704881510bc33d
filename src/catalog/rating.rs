use crate::models::Review;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    pub rating: f64,
    pub review_count: i64,
}

/// Mean rating and review count over the valid entries of a review set.
///
/// Only genuine finite numbers count; missing, non-numeric and NaN ratings
/// are dropped from both the sum and the denominator.
pub fn aggregate_reviews(reviews: &[Review]) -> RatingSummary {
    let ratings: Vec<f64> = reviews
        .iter()
        .filter_map(|review| review.rating.as_ref())
        .filter_map(|value| value.as_f64())
        .filter(|n| n.is_finite())
        .collect();

    if ratings.is_empty() {
        return RatingSummary {
            rating: 0.0,
            review_count: 0,
        };
    }

    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;

    RatingSummary {
        rating: (mean * 10.0).round() / 10.0,
        review_count: ratings.len() as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn review(rating: Option<serde_json::Value>) -> Review {
        Review {
            id: 0,
            product_id: 1,
            rating,
            author: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_set_aggregates_to_zero() {
        let summary = aggregate_reviews(&[]);

        assert_eq!(summary.rating, 0.0);
        assert_eq!(summary.review_count, 0);
    }

    #[test]
    fn all_invalid_ratings_aggregate_to_zero() {
        let reviews = vec![
            review(None),
            review(Some(json!("five stars"))),
            review(Some(json!(null))),
        ];

        let summary = aggregate_reviews(&reviews);

        assert_eq!(summary.rating, 0.0);
        assert_eq!(summary.review_count, 0);
    }

    #[test]
    fn invalid_entries_are_excluded_from_the_denominator() {
        let reviews = vec![
            review(Some(json!(4))),
            review(Some(json!(5))),
            review(Some(json!("bad"))),
            review(None),
        ];

        let summary = aggregate_reviews(&reviews);

        assert_eq!(summary.rating, 4.5);
        assert_eq!(summary.review_count, 2);
    }

    #[test]
    fn mean_is_rounded_to_one_decimal() {
        let reviews = vec![
            review(Some(json!(5))),
            review(Some(json!(4))),
            review(Some(json!(4))),
        ];

        let summary = aggregate_reviews(&reviews);

        assert_eq!(summary.rating, 4.3);
        assert_eq!(summary.review_count, 3);
    }
}
