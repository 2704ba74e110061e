//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no shared state. Every input is
//! accepted: unknown ids degrade to zero-valued contributions so a partially
//! filled booking form always has a renderable quote.

use std::collections::BTreeSet;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::catalog;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use monastery360_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Percentage of `amount`, rounded to cents.
pub fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    round_money(amount * percent / Decimal::ONE_HUNDRED, 2)
}

/// Compute the itemized price of a booking selection.
///
/// # Arguments
/// * `package_id` - Selected package, `None` or unknown means base price 0
/// * `service_ids` - Selected add-ons; duplicates collapse, unknown ids are ignored
/// * `group_size` - Selected bracket, `None` or unknown means no discount
/// * `currency` - Currency code stamped on the result
pub fn compute_price<'a, I>(
    package_id: Option<&str>,
    service_ids: I,
    group_size: Option<&str>,
    currency: &str,
) -> PriceBreakdown
where
    I: IntoIterator<Item = &'a str>,
{
    let base_price = package_id
        .and_then(catalog::find_package)
        .map(|p| p.base_price())
        .unwrap_or(Decimal::ZERO);

    let selected: BTreeSet<&str> = service_ids.into_iter().collect();

    // Catalog order keeps the itemization stable regardless of click order
    let lines: Vec<PriceLine> = catalog::SERVICES
        .iter()
        .filter(|s| selected.contains(s.id))
        .map(|s| PriceLine {
            service_id: s.id.to_string(),
            name: s.name.to_string(),
            price: s.unit_price(),
        })
        .collect();

    let services_price: Decimal = lines.iter().map(|l| l.price).sum();

    let discount_percent = group_size
        .and_then(catalog::find_group_size)
        .map(|g| g.discount_percent)
        .unwrap_or(0);

    let subtotal = base_price + services_price;
    let discount = percent_of(subtotal, Decimal::from(discount_percent));

    PriceBreakdown {
        base_price,
        services_price,
        subtotal,
        discount,
        total: subtotal - discount,
        discount_percent,
        lines,
        currency: currency.to_string(),
    }
}

/// One recognised add-on service in a breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct PriceLine {
    pub service_id: String,
    pub name: String,
    pub price: Decimal,
}

/// Result of a price calculation
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreakdown {
    pub base_price: Decimal,
    pub services_price: Decimal,
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
    pub discount_percent: u32,
    pub lines: Vec<PriceLine>,
    pub currency: String,
}

impl PriceBreakdown {
    pub fn has_discount(&self) -> bool {
        self.discount > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_bankers_rounding_to_even() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(2));
        assert_eq!(round_money(dec!(3.5), 0), dec!(4));
        assert_eq!(round_money(dec!(4.5), 0), dec!(4));
        assert_eq!(round_money(dec!(5.5), 0), dec!(6));
    }

    #[test]
    fn test_round_money_decimal_places() {
        assert_eq!(round_money(dec!(2.25), 1), dec!(2.2));
        assert_eq!(round_money(dec!(2.35), 1), dec!(2.4));
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(dec!(4800), dec!(10)), dec!(480));
        assert_eq!(percent_of(dec!(3100), dec!(5)), dec!(155));
        assert_eq!(percent_of(dec!(0), dec!(15)), dec!(0));
        // 33.335 -> 33.34 (half-even on the third place)
        assert_eq!(percent_of(dec!(333.35), dec!(10)), dec!(33.34));
    }

    // ==================== compute_price tests ====================

    #[test]
    fn test_compute_price_reference_example() {
        let quote = compute_price(Some("rumtek"), ["guide", "transport"], Some("5-8"), "INR");

        assert_eq!(quote.base_price, dec!(2500));
        assert_eq!(quote.services_price, dec!(2300));
        assert_eq!(quote.subtotal, dec!(4800));
        assert_eq!(quote.discount, dec!(480));
        assert_eq!(quote.total, dec!(4320));
        assert_eq!(quote.discount_percent, 10);
        assert_eq!(quote.currency, "INR");
    }

    #[test]
    fn test_compute_price_empty_selection() {
        let quote = compute_price(None, std::iter::empty(), None, "INR");

        assert_eq!(quote.base_price, dec!(0));
        assert_eq!(quote.services_price, dec!(0));
        assert_eq!(quote.total, dec!(0));
        assert!(quote.lines.is_empty());
        assert!(!quote.has_discount());
    }

    #[test]
    fn test_compute_price_no_services() {
        let quote = compute_price(Some("tashiding"), std::iter::empty(), Some("2-4"), "INR");

        assert_eq!(quote.services_price, dec!(0));
        assert_eq!(quote.subtotal, dec!(2000));
        assert_eq!(quote.discount, dec!(100));
        assert_eq!(quote.total, dec!(1900));
    }

    #[test]
    fn test_compute_price_unknown_package_is_zero() {
        let quote = compute_price(Some("potala"), ["meals"], None, "INR");

        assert_eq!(quote.base_price, dec!(0));
        assert_eq!(quote.total, dec!(600));
    }

    #[test]
    fn test_compute_price_unknown_bracket_no_discount() {
        let quote = compute_price(Some("rumtek"), ["guide"], Some("50+"), "INR");
        assert_eq!(quote.discount, dec!(0));
        assert_eq!(quote.discount_percent, 0);
        assert_eq!(quote.total, dec!(3300));

        let quote = compute_price(Some("rumtek"), ["guide"], None, "INR");
        assert_eq!(quote.discount, dec!(0));
    }

    #[test]
    fn test_compute_price_duplicate_services_collapse() {
        let quote = compute_price(
            Some("pemayangtse"),
            ["meals", "meals", "photography", "meals"],
            Some("1"),
            "INR",
        );

        assert_eq!(quote.services_price, dec!(900));
        assert_eq!(quote.lines.len(), 2);
    }

    #[test]
    fn test_compute_price_unknown_services_ignored() {
        let quote = compute_price(Some("rumtek"), ["helicopter", "guide", ""], None, "INR");

        assert_eq!(quote.services_price, dec!(800));
        assert_eq!(quote.lines.len(), 1);
        assert_eq!(quote.lines[0].service_id, "guide");
    }

    #[test]
    fn test_compute_price_lines_follow_catalog_order() {
        let quote = compute_price(None, ["photography", "guide", "meals"], None, "INR");

        let ids: Vec<&str> = quote.lines.iter().map(|l| l.service_id.as_str()).collect();
        assert_eq!(ids, vec!["guide", "meals", "photography"]);
    }

    #[test]
    fn test_compute_price_everything_max_discount() {
        let all: Vec<&str> = catalog::SERVICES.iter().map(|s| s.id).collect();
        let quote = compute_price(Some("rumtek"), all, Some("9+"), "INR");

        // 2500 + 800 + 1500 + 1800 + 600 + 300 = 7500
        assert_eq!(quote.subtotal, dec!(7500));
        assert_eq!(quote.discount, dec!(1125));
        assert_eq!(quote.total, dec!(6375));
    }
}
