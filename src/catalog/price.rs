use rust_decimal::{Decimal, RoundingStrategy};

#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub final_price: Decimal,
    pub savings: Decimal,
    pub has_discount: bool,
}

/// Applies a discount percentage to a base price.
///
/// The final price is rounded to the nearest whole currency unit, midpoint
/// away from zero. An absent or non-positive percentage leaves the base price
/// untouched.
pub fn compute_price(base_price: Decimal, discount_percent: Option<Decimal>) -> PriceQuote {
    let percent = match discount_percent {
        Some(p) if p > Decimal::ZERO => p,
        _ => {
            return PriceQuote {
                final_price: base_price,
                savings: Decimal::ZERO,
                has_discount: false,
            }
        }
    };

    let final_price = (base_price * (Decimal::ONE - percent / Decimal::ONE_HUNDRED))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let savings = (base_price - final_price)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    PriceQuote {
        final_price,
        savings,
        has_discount: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn quarter_off_one_hundred() {
        let quote = compute_price(dec!(100), Some(dec!(25)));

        assert_eq!(quote.final_price, dec!(75));
        assert_eq!(quote.savings, dec!(25));
        assert!(quote.has_discount);
    }

    #[test]
    fn absent_percent_keeps_base_price() {
        let quote = compute_price(dec!(49.9), None);

        assert_eq!(quote.final_price, dec!(49.9));
        assert_eq!(quote.savings, Decimal::ZERO);
        assert!(!quote.has_discount);
    }

    #[test]
    fn zero_and_negative_percents_are_not_discounts() {
        assert!(!compute_price(dec!(100), Some(Decimal::ZERO)).has_discount);
        assert!(!compute_price(dec!(100), Some(dec!(-10))).has_discount);
    }

    #[test]
    fn full_discount_reaches_zero() {
        let quote = compute_price(dec!(120), Some(dec!(100)));

        assert_eq!(quote.final_price, Decimal::ZERO);
        assert_eq!(quote.savings, dec!(120));
    }

    #[test]
    fn rounds_to_nearest_whole_unit() {
        // 89.9 * 0.85 = 76.415 -> 76
        let quote = compute_price(dec!(89.9), Some(dec!(15)));

        assert_eq!(quote.final_price, dec!(76));
        assert_eq!(quote.savings, dec!(14));
    }

    #[test]
    fn final_price_never_exceeds_base_price() {
        for percent in 0..=100 {
            let quote = compute_price(dec!(999.99), Some(Decimal::from(percent)));
            assert!(
                quote.final_price <= dec!(999.99),
                "percent {} produced {}",
                percent,
                quote.final_price
            );
        }
    }
}
