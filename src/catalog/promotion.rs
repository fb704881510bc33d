use chrono::{DateTime, Utc};

use crate::models::Promotion;

/// Chooses the store-wide promotion active at `now`.
///
/// Active rows that have not expired and have started are split into timed
/// (end date in the future) and ongoing (no end date). Within each group the
/// highest percentage wins; ties go to the most recently created row, then
/// the highest id. A timed winner always beats an ongoing one.
pub fn select_promotion(now: DateTime<Utc>, promotions: &[Promotion]) -> Option<&Promotion> {
    let mut candidates: Vec<&Promotion> = promotions
        .iter()
        .filter(|p| p.active)
        .filter(|p| p.ends_at.map_or(true, |end| end >= now))
        .filter(|p| p.starts_at.map_or(true, |start| start <= now))
        .collect();

    candidates.sort_by(|a, b| {
        b.discount_percent
            .cmp(&a.discount_percent)
            .then(b.created_at.cmp(&a.created_at))
            .then(b.id.cmp(&a.id))
    });

    candidates
        .iter()
        .find(|p| p.ends_at.map_or(false, |end| end > now))
        .or_else(|| candidates.iter().find(|p| p.ends_at.is_none()))
        .copied()
}

/// A selected promotion is only rendered as a banner when it carries an end
/// date; an ongoing winner is fetched but suppressed.
pub fn should_display_banner(promotion: &Promotion) -> bool {
    promotion.ends_at.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal::Decimal;

    fn promotion(
        id: i32,
        percent: i64,
        starts_at: Option<DateTime<Utc>>,
        ends_at: Option<DateTime<Utc>>,
    ) -> Promotion {
        Promotion {
            id,
            title: format!("Promo {}", id),
            subtitle: None,
            discount_percent: Decimal::from(percent),
            starts_at,
            ends_at,
            active: true,
            created_at: Utc::now() - Duration::days(id as i64),
        }
    }

    #[test]
    fn expired_promotions_are_excluded() {
        let now = Utc::now();
        let promotions = vec![promotion(1, 50, None, Some(now - Duration::hours(1)))];

        assert!(select_promotion(now, &promotions).is_none());
    }

    #[test]
    fn not_yet_started_promotions_are_excluded() {
        let now = Utc::now();
        let promotions = vec![promotion(1, 50, Some(now + Duration::hours(1)), None)];

        assert!(select_promotion(now, &promotions).is_none());
    }

    #[test]
    fn inactive_promotions_are_excluded() {
        let now = Utc::now();
        let mut promo = promotion(1, 50, None, Some(now + Duration::hours(1)));
        promo.active = false;

        assert!(select_promotion(now, &[promo]).is_none());
    }

    #[test]
    fn timed_promotion_beats_ongoing_and_shows_a_countdown() {
        let now = Utc::now();
        let promotions = vec![
            promotion(1, 40, None, None),
            promotion(2, 10, None, Some(now + Duration::hours(1))),
        ];

        let selected = select_promotion(now, &promotions).unwrap();

        assert_eq!(selected.id, 2);
        assert!(should_display_banner(selected));
    }

    #[test]
    fn highest_percent_ongoing_wins_but_renders_no_banner() {
        let now = Utc::now();
        let promotions = vec![promotion(1, 10, None, None), promotion(2, 20, None, None)];

        let selected = select_promotion(now, &promotions).unwrap();

        assert_eq!(selected.id, 2);
        assert!(!should_display_banner(selected));
    }

    #[test]
    fn equal_percents_resolve_to_the_most_recently_created() {
        let now = Utc::now();
        let older = promotion(5, 30, None, Some(now + Duration::hours(2)));
        let newer = promotion(1, 30, None, Some(now + Duration::hours(2)));

        let candidates = [older, newer];
        let selected = select_promotion(now, &candidates).unwrap();

        assert_eq!(selected.id, 1);
    }

    #[test]
    fn promotion_ending_exactly_now_is_not_selected() {
        let now = Utc::now();
        let promotions = vec![promotion(1, 50, None, Some(now))];

        assert!(select_promotion(now, &promotions).is_none());
    }
}
